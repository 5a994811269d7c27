//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{t, ActionTexts, KeyNames};
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::colors;

const SEPARATOR: &str = " │ ";

/// 渲染状态栏：快捷键提示 + 状态消息
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = colors();
    let hints = &t().hints;

    let mut spans = Vec::new();
    for (key, desc) in hints_for(app, &hints.keys, &hints.actions) {
        spans.push(Span::styled(format!(" {key} "), palette.hint_key()));
        spans.push(Span::styled(desc, palette.hint_desc()));
        spans.push(Span::raw(SEPARATOR));
    }
    spans.push(Span::styled(status_text(app), palette.hint_key()));

    let paragraph = Paragraph::new(Line::from(spans)).style(palette.statusbar());
    frame.render_widget(paragraph, area);
}

/// 状态消息优先；对话框打开时提示页面滚动已锁定
fn status_text(app: &App) -> String {
    let texts = &t().status_bar;
    match &app.status_message {
        Some(msg) => msg.clone(),
        None if app.site.is_scroll_locked() => texts.scroll_locked.to_string(),
        None => texts.ready.to_string(),
    }
}

/// 当前可用的快捷键
fn hints_for(
    app: &App,
    keys: &'static KeyNames,
    actions: &'static ActionTexts,
) -> Vec<(&'static str, &'static str)> {
    // 对话框拦截全部按键
    if app.has_dialog() {
        return vec![
            (keys.tab, actions.next_field),
            (keys.shift_tab, actions.prev_field),
            (keys.enter, actions.submit),
            (keys.ctrl_x, actions.cancel),
            (keys.esc, actions.close),
        ];
    }

    let mut hints = vec![(keys.tab, actions.switch_panel)];
    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content if app.current_page == Page::Pricing => {
            hints.push((keys.arrows_lr, actions.pick_card));
            hints.push((keys.enter, actions.request_quote));
            hints.push((keys.arrows_ud, actions.scroll));
        }
        FocusPanel::Content => hints.push((keys.arrows_ud, actions.scroll)),
    }
    hints.push((keys.alt_q, t().common.quit));
    hints
}
