//! 价格页视图
//!
//! 每个分类一张卡片，卡片底部是 "Request a Quote" 按钮。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use quote_desk_core::types::PricingCategory;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染价格页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().pricing;
    let c = colors();
    let catalog = app.site.pricing.catalog();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        texts.heading,
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, layout[0]);

    if catalog.is_empty() {
        return;
    }

    let count = u32::try_from(catalog.len()).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = catalog.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(layout[1]);

    let selected = app.selected_card.min(catalog.len() - 1);
    for (i, (category, column)) in catalog.iter().zip(columns.iter()).enumerate() {
        render_card(app, frame, *column, category, i == selected);
    }
}

/// 渲染单张分类卡片
fn render_card(app: &App, frame: &mut Frame, area: Rect, category: &PricingCategory, selected: bool) {
    let texts = &t().pricing;
    let c = colors();

    let border_style = if selected {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let mut title = format!(" {} {} ", category.emoji, category.name);
    if category.popular {
        title.push_str(&format!("★ {} ", texts.popular));
    }

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let button_style = if selected && app.focus.is_content() {
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let lines = vec![
        Line::from(Span::styled(
            category.price_info.clone(),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            category.description.clone(),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("[ {} ]", texts.request_quote), button_style)),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll(), 0))
        .block(block);
    frame.render_widget(card, area);
}
