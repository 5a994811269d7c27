//! 对话框组件
//!
//! 遮罩层 + 居中面板。面板几何（`panel_rect` / `field_at`）同时被
//! Update 层用来判断鼠标点击落在遮罩层还是面板内。

use quote_desk_core::types::{FormField, SubmissionState};
use quote_desk_core::FormDialog;
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 面板宽度
const PANEL_WIDTH: u16 = 64;
/// 每个字段占用的行数：标签 + 输入 + 空行
const FIELD_ROWS: u16 = 3;
/// 面板高度：边框(2) + 字段(4×3) + 按钮(1) + 空行(1) + 反馈(1) + 提示(1)
const PANEL_HEIGHT: u16 = 2 + 4 * FIELD_ROWS + 4;

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 对话框面板在 `area` 中的位置
pub fn panel_rect(area: Rect) -> Rect {
    centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area)
}

/// 面板内容区（去掉边框与左右留白）
fn inner_rect(panel: Rect) -> Rect {
    Rect::new(
        panel.x + 2,
        panel.y + 1,
        panel.width.saturating_sub(4),
        panel.height.saturating_sub(2),
    )
}

/// 坐标是否落在面板内
pub fn panel_contains(panel: Rect, column: u16, row: u16) -> bool {
    panel.contains(Position::new(column, row))
}

/// 面板中第 `row` 行对应的字段（标签行或输入行）
pub fn field_at(panel: Rect, row: u16) -> Option<FormField> {
    let inner = inner_rect(panel);
    let offset = row.checked_sub(inner.y)?;
    if offset % FIELD_ROWS == FIELD_ROWS - 1 {
        return None;
    }
    FormField::ALL.get(usize::from(offset / FIELD_ROWS)).copied()
}

/// 渲染对话框（如果有打开的对话框）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(dialog) = app.site.active_dialog() else {
        return;
    };
    let Some(view) = dialog.view() else {
        return;
    };

    let c = colors();
    let screen = frame.area();

    // 遮罩层：压暗整个页面
    frame
        .buffer_mut()
        .set_style(screen, Style::default().fg(c.backdrop));

    let area = panel_rect(screen);
    frame.render_widget(Clear, area);

    let title = view.title.unwrap_or_default();
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.dialog_bg).fg(c.fg));
    frame.render_widget(block, area);

    let inner = inner_rect(area);
    let mut lines = Vec::new();

    for field in FormField::ALL {
        lines.extend(field_lines(dialog, field, inner.width));
    }

    lines.push(button_line(dialog));
    lines.push(Line::from(""));
    lines.extend(feedback_lines(app, dialog));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 一个字段的三行：标签、输入、空行
fn field_lines(dialog: &FormDialog, field: FormField, width: u16) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();
    let focused = dialog.focus() == field;
    let enabled = dialog.inputs_enabled();

    let mut label = vec![Span::styled(field.label(), Style::default().fg(c.muted))];
    if field.is_required() {
        label.push(Span::styled(
            format!(" {}", texts.dialog.required_marker),
            Style::default().fg(c.error),
        ));
    }

    let value = dialog.draft().get(field);
    let marker = if focused && enabled { "▎" } else { " " };
    let input = if value.is_empty() {
        match field.placeholder() {
            Some(placeholder) if !focused => Line::from(vec![
                Span::raw(marker),
                Span::styled(placeholder, Style::default().fg(c.border)),
            ]),
            _ => Line::from(Span::raw(marker)),
        }
    } else {
        // 只显示能放下的末尾部分，让光标始终可见
        let visible = visible_tail(&value.replace('\n', " "), usize::from(width.saturating_sub(2)));
        let style = if !enabled {
            Style::default().fg(c.muted)
        } else if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        Line::from(vec![Span::raw(marker), Span::styled(visible, style)])
    };

    vec![Line::from(label), input, Line::from("")]
}

/// Cancel / Submit 按钮行
fn button_line(dialog: &FormDialog) -> Line<'static> {
    let texts = t();
    let c = colors();
    let state = dialog.state();

    let enabled = Style::default().fg(c.selected_fg).bg(c.selected_bg);
    let disabled = Style::default().fg(c.muted);

    let cancel_style = if state == SubmissionState::Success {
        disabled
    } else {
        enabled
    };
    let (submit_label, submit_style) = match state {
        SubmissionState::Submitting => (texts.dialog.submitting, disabled),
        SubmissionState::Success => (texts.common.submit, disabled),
        SubmissionState::Idle | SubmissionState::Error => (
            texts.common.submit,
            enabled.add_modifier(Modifier::BOLD),
        ),
    };

    Line::from(vec![
        Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
        Span::raw("   "),
        Span::styled(format!(" {submit_label} "), submit_style),
    ])
    .alignment(Alignment::Right)
}

/// 反馈行：提交结果或本地校验提示
fn feedback_lines(app: &App, dialog: &FormDialog) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();

    if let Some(feedback) = dialog.feedback() {
        let color = if feedback.is_error() { c.error } else { c.success };
        let mut lines = vec![Line::styled(feedback.text(), Style::default().fg(color))];
        if dialog.dismiss_pending() {
            lines.push(Line::styled(
                texts.dialog.closing_soon,
                Style::default().fg(c.muted),
            ));
        }
        return lines;
    }

    match &app.dialog_hint {
        Some(hint) => vec![Line::styled(hint.clone(), Style::default().fg(c.warning))],
        None => Vec::new(),
    }
}

/// 截取字符串末尾，使显示宽度不超过 `max_width`
fn visible_tail(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    text[start..].to_string()
}
