//! 首页视图（Hero）

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let c = colors();

    let products = texts.products.join("  ·  ");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.headline),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.tagline),
            Style::default().fg(c.fg).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.body),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}: ", texts.products_label),
                Style::default().fg(c.muted),
            ),
            Span::styled(products, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.call_to_action),
            Style::default().fg(c.success),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll(), 0));
    frame.render_widget(paragraph, area);
}
