//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavItemId};
use crate::view::theme::colors;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_navigation();

    // 边框样式
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    // 构建导航项列表
    let mut items: Vec<ListItem> = Vec::with_capacity(app.navigation.items.len() + 1);
    for (i, nav_item) in app.navigation.items.iter().enumerate() {
        // 页面与动作按钮之间的分隔线
        if nav_item.id.is_action()
            && i > 0
            && !app.navigation.items[i - 1].id.is_action()
        {
            items.push(ListItem::new(Line::styled(
                "  ──────",
                Style::default().fg(c.border),
            )));
        }

        let is_selected = i == app.navigation.selected;
        let prefix = if is_selected { "▶ " } else { "  " };

        // 根据导航项 ID 获取翻译后的标签
        let label = match nav_item.id {
            NavItemId::Home => texts.nav.home,
            NavItemId::Solution => texts.nav.solution,
            NavItemId::Pricing => texts.nav.pricing,
            NavItemId::About => texts.nav.about,
            NavItemId::FreeQuote => texts.nav.free_quote,
            NavItemId::ContactUs => texts.nav.contact_us,
        };

        let content = format!("{}{} {}", prefix, nav_item.icon, label);

        let style = if is_selected {
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else if nav_item.id.is_action() {
            Style::default().fg(c.highlight)
        } else {
            Style::default().fg(c.fg)
        };

        items.push(ListItem::new(Line::from(Span::styled(content, style))));
    }

    let list = List::new(items).block(block);

    // 分隔线占了一行，选中下标需要跟着偏移
    let separator_before = app
        .navigation
        .current_id()
        .is_some_and(NavItemId::is_action);
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected + usize::from(separator_before)));

    frame.render_stateful_widget(list, area, &mut state);
}
