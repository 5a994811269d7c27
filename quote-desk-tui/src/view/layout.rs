//! 主布局渲染

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 屏幕分区
struct Areas {
    title: Rect,
    nav: Rect,
    page: Rect,
    status: Rect,
}

impl Areas {
    /// 标题栏 / 导航(22 列) + 页面 / 状态栏
    fn split(screen: Rect) -> Self {
        let [title, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(screen);
        let [nav, page] =
            Layout::horizontal([Constraint::Length(22), Constraint::Min(20)]).areas(body);

        Self {
            title,
            nav,
            page,
            status,
        }
    }
}

/// 渲染整个屏幕；对话框最后绘制，覆盖在页面之上
pub fn render(app: &App, frame: &mut Frame) {
    let palette = colors();
    let screen = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(palette.bg)), screen);

    let areas = Areas::split(screen);
    render_title_bar(frame, areas.title);
    components::navigation::render(app, frame, areas.nav);
    render_page(app, frame, areas.page);
    components::statusbar::render(app, frame, areas.status);

    components::dialog::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let palette = colors();
    let texts = t();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", texts.common.app_name),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("v{}  ", env!("CARGO_PKG_VERSION"))),
        Span::styled(texts.home.tagline, Style::new().fg(palette.accent)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(palette.statusbar()),
        area,
    );
}

/// 页面外框 + 按 `current_page` 分发
fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let palette = colors();
    let border = if app.focus.is_content() {
        palette.border_focused
    } else {
        palette.border
    };

    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border))
        .title(Span::styled(
            format!(" {} ", app.current_page.title()),
            Style::new().fg(palette.fg).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let draw = match app.current_page {
        Page::Home => pages::home::render,
        Page::Solution => pages::solution::render,
        Page::Pricing => pages::pricing::render,
        Page::About => pages::about::render,
    };
    draw(app, frame, inner);
}
