//! 应用主状态结构

use quote_desk_core::{DialogEvent, Site};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use super::{FocusPanel, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 各页面的滚动偏移（行），下标见 `Page::index`
    pub scroll: [u16; 4],

    /// 价格页当前选中的卡片
    pub selected_card: usize,

    /// 对话框内的校验提示
    pub dialog_hint: Option<String>,

    /// 最近一次绘制的终端区域，供鼠标命中测试使用
    pub viewport: Rect,

    /// 页面区块与各自的对话框
    pub site: Site,

    /// 后台任务（中转应答、自动关闭）的事件接收端
    events: UnboundedReceiver<DialogEvent>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(site: Site, events: UnboundedReceiver<DialogEvent>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            scroll: [0; 4],
            selected_card: 0,
            dialog_hint: None,
            viewport: Rect::default(),
            site,
            events,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 是否有对话框打开
    pub fn has_dialog(&self) -> bool {
        self.site.active_dialog().is_some()
    }

    /// 当前页面的滚动偏移
    pub fn page_scroll(&self) -> u16 {
        self.scroll[self.current_page.index()]
    }

    /// 当前页面的滚动偏移（可变）
    pub fn page_scroll_mut(&mut self) -> &mut u16 {
        &mut self.scroll[self.current_page.index()]
    }

    /// 取出一个已到达的后台事件（不阻塞）
    pub fn next_event(&mut self) -> Option<DialogEvent> {
        self.events.try_recv().ok()
    }
}
