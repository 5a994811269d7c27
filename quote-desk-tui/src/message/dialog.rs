//! 对话框消息类型

/// 对话框相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMessage {
    /// Escape 键（经由监听注册表分发）
    Escape,

    /// Cancel 按钮
    Cancel,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 提交表单
    Submit,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 鼠标左键点击（终端坐标）
    Click { column: u16, row: u16 },
}
