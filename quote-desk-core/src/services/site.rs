//! 整个页面：页头 + 价格区块
//!
//! 同一时刻最多只有一个对话框处于打开状态。

use std::sync::Arc;

use crate::dialog::{ClickTarget, DialogId};
use crate::error::CoreResult;
use crate::services::{DialogContext, DialogEvent, FormDialog, HeaderSection, PricingSection};

/// All sections of the page and their dialogs.
#[derive(Debug)]
pub struct Site {
    ctx: Arc<DialogContext>,
    pub header: HeaderSection,
    pub pricing: PricingSection,
}

impl Site {
    pub fn new(ctx: Arc<DialogContext>) -> Self {
        Self {
            header: HeaderSection::new(&ctx),
            pricing: PricingSection::new(&ctx),
            ctx,
        }
    }

    pub fn context(&self) -> &Arc<DialogContext> {
        &self.ctx
    }

    pub fn dialogs(&self) -> [&FormDialog; 3] {
        let [free_quote, contact_us] = self.header.dialogs();
        [free_quote, contact_us, &self.pricing.dialog]
    }

    pub fn dialogs_mut(&mut self) -> [&mut FormDialog; 3] {
        let [free_quote, contact_us] = self.header.dialogs_mut();
        [free_quote, contact_us, &mut self.pricing.dialog]
    }

    pub fn dialog(&self, id: DialogId) -> Option<&FormDialog> {
        self.dialogs().into_iter().find(|d| d.id() == id)
    }

    pub fn dialog_mut(&mut self, id: DialogId) -> Option<&mut FormDialog> {
        self.dialogs_mut().into_iter().find(|d| d.id() == id)
    }

    /// The open dialog, if any.
    pub fn active_dialog(&self) -> Option<&FormDialog> {
        self.dialogs().into_iter().find(|d| d.is_open())
    }

    pub fn active_dialog_mut(&mut self) -> Option<&mut FormDialog> {
        self.dialogs_mut().into_iter().find(|d| d.is_open())
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.ctx.scroll_lock.is_locked()
    }

    fn close_all(&mut self) {
        for dialog in self.dialogs_mut() {
            dialog.close();
        }
    }

    // ===== 触发入口 =====

    pub fn open_free_quote(&mut self) {
        self.close_all();
        self.header.open_free_quote();
    }

    pub fn open_contact_us(&mut self) {
        self.close_all();
        self.header.open_contact_us();
    }

    pub fn request_quote(&mut self, category: &str) -> CoreResult<()> {
        // 分类不存在时保持当前对话框
        if !self.pricing.catalog().iter().any(|c| c.name == category) {
            return self.pricing.request_quote(category);
        }
        self.close_all();
        self.pricing.request_quote(category)
    }

    // ===== 输入路由 =====

    /// Escape goes to the dialog holding the newest listener.
    pub fn handle_escape(&mut self) -> bool {
        let Some(target) = self.ctx.key_listeners.dispatch_escape() else {
            return false;
        };
        self.dialog_mut(target)
            .is_some_and(FormDialog::handle_escape)
    }

    /// Pointer click while a dialog is open.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        self.active_dialog_mut()
            .is_some_and(|dialog| dialog.handle_click(target))
    }

    /// Route a background event to its dialog.
    pub fn apply(&mut self, event: DialogEvent) -> bool {
        match self.dialog_mut(event.dialog()) {
            Some(dialog) => dialog.handle_event(event),
            None => {
                log::debug!("No dialog for event {event:?}");
                false
            }
        }
    }
}
