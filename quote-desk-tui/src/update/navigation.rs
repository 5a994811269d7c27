//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                confirm(app, id);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

/// 页面项切换页面，动作项打开页头对话框
fn confirm(app: &mut App, id: NavItemId) {
    match id {
        NavItemId::FreeQuote => {
            app.site.open_free_quote();
            app.dialog_hint = None;
        }
        NavItemId::ContactUs => {
            app.site.open_contact_us();
            app.dialog_hint = None;
        }
        NavItemId::Home | NavItemId::Solution | NavItemId::Pricing | NavItemId::About => {
            app.current_page = page_from_nav_id(id);
            app.clear_status(); // 切换页面时清除状态消息
        }
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Solution => Page::Solution,
        NavItemId::Pricing => Page::Pricing,
        NavItemId::About => Page::About,
        NavItemId::Home | NavItemId::FreeQuote | NavItemId::ContactUs => Page::Home,
    }
}
