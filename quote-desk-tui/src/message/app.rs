//! 应用主消息枚举

use quote_desk_core::DialogEvent;

use super::{ContentMessage, DialogMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 对话框相关消息
    Dialog(DialogMessage),

    /// 后台任务完成（中转应答或自动关闭计时器）
    Background(DialogEvent),

    /// 终端窗口大小改变
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
