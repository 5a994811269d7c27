//! 内容面板更新逻辑
//!
//! 页面滚动受对话框的滚动锁约束；价格页的 Enter 打开报价对话框。

use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 单页最大滚动行数
const MAX_SCROLL: u16 = 40;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::ScrollUp => {
            scroll_to(app, |offset| offset.saturating_sub(1));
        }
        ContentMessage::ScrollDown => {
            scroll_to(app, |offset| offset.saturating_add(1).min(MAX_SCROLL));
        }
        ContentMessage::ScrollTop => {
            scroll_to(app, |_| 0);
        }
        ContentMessage::PrevCard => {
            if app.current_page == Page::Pricing {
                app.selected_card = app.selected_card.saturating_sub(1);
            }
        }
        ContentMessage::NextCard => {
            if app.current_page == Page::Pricing {
                let last = app.site.pricing.catalog().len().saturating_sub(1);
                app.selected_card = (app.selected_card + 1).min(last);
            }
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
        }
    }
}

/// 滚动当前页面；滚动锁被持有时不做任何事
fn scroll_to(app: &mut App, next: impl FnOnce(u16) -> u16) {
    if app.site.is_scroll_locked() {
        return;
    }
    let offset = app.page_scroll_mut();
    *offset = next(*offset);
}

/// 处理确认操作
fn handle_confirm(app: &mut App) {
    if app.current_page != Page::Pricing {
        return;
    }

    let Some(category) = app
        .site
        .pricing
        .catalog()
        .get(app.selected_card)
        .map(|c| c.name.clone())
    else {
        return;
    };

    match app.site.request_quote(&category) {
        Ok(()) => {
            app.dialog_hint = None;
        }
        Err(e) => {
            log::warn!("Failed to open quote dialog for {category}: {e}");
            app.set_status(e.to_string());
        }
    }
}
