//! 内容面板消息
//!
//! 页面滚动与价格卡片选择

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 向上滚动一行
    ScrollUp,
    /// 向下滚动一行
    ScrollDown,
    /// 回到页面顶部
    ScrollTop,
    /// 上一张价格卡片
    PrevCard,
    /// 下一张价格卡片
    NextCard,
    /// 确认（价格页：为选中的分类申请报价）
    Confirm,
}
