//! 解决方案页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染解决方案页：标题与简介 + 三张特性卡片
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().solution;
    let c = colors();
    let scroll = app.page_scroll();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            texts.heading,
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(texts.intro, Style::default().fg(c.muted))),
    ])
    .wrap(Wrap { trim: true })
    .scroll((scroll, 0));
    frame.render_widget(intro, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout[1]);

    for (card, column) in texts.cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} {} ", card.emoji, card.title))
            .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));

        let body = Paragraph::new(card.body)
            .style(Style::default().fg(c.fg))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
            .block(block);
        frame.render_widget(body, *column);
    }
}
