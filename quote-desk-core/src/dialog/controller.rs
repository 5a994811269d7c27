//! 对话框控制器

use super::{DialogId, EscapeBinding, KeyListeners, ScrollLock, ScrollLockGuard};

/// Where a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop around the panel.
    Overlay,
    /// The panel itself.
    Content,
}

/// What an open dialog exposes to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub id: DialogId,
    pub role: &'static str,
    pub modal: bool,
    pub title: Option<String>,
}

/// 打开期间持有的资源，关闭时随 drop 一起释放
#[derive(Debug)]
struct OpenHandles {
    _escape: EscapeBinding,
    _scroll: ScrollLockGuard,
}

/// Open/closed lifecycle of one modal.
#[derive(Debug)]
pub struct DialogController {
    id: DialogId,
    title: Option<String>,
    scroll_lock: ScrollLock,
    listeners: KeyListeners,
    open: Option<OpenHandles>,
}

impl DialogController {
    pub fn new(scroll_lock: ScrollLock, listeners: KeyListeners) -> Self {
        Self {
            id: DialogId::next(),
            title: None,
            scroll_lock,
            listeners,
            open: None,
        }
    }

    pub fn id(&self) -> DialogId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Show the dialog. Reopening only replaces the title.
    pub fn open(&mut self, title: Option<String>) {
        self.title = title;
        if self.open.is_none() {
            self.open = Some(OpenHandles {
                _escape: self.listeners.register(self.id),
                _scroll: self.scroll_lock.acquire(),
            });
        }
    }

    /// Hide the dialog. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Backdrop clicks close; panel clicks are swallowed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Overlay => self.close(),
            ClickTarget::Content => false,
        }
    }

    /// Escape closes only the dialog holding the newest listener.
    pub fn handle_escape(&mut self) -> bool {
        if self.listeners.dispatch_escape() == Some(self.id) {
            self.close()
        } else {
            false
        }
    }

    /// Nothing at all is rendered while closed.
    pub fn view(&self) -> Option<DialogView> {
        self.open.as_ref().map(|_| DialogView {
            id: self.id,
            role: "dialog",
            modal: true,
            title: self.title.clone(),
        })
    }
}
