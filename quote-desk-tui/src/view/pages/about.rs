//! 关于页视图

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

/// 渲染关于页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().about;
    let c = colors();

    let mut lines = vec![
        Line::from(Span::styled(
            texts.heading,
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for paragraph in texts.paragraphs {
        lines.push(Line::from(Span::styled(*paragraph, Style::default().fg(c.fg))));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll(), 0));
    frame.render_widget(widget, area);
}
