//! 对话框更新逻辑
//!
//! 所有操作都作用于 `Site` 当前打开的对话框。

use quote_desk_core::types::SubmissionState;
use quote_desk_core::{ClickTarget, CoreError, CoreResult, DialogEvent, FormDialog};

use crate::message::DialogMessage;
use crate::model::App;
use crate::view::components::dialog::{field_at, panel_contains, panel_rect};

/// 处理对话框消息
pub fn update(app: &mut App, msg: DialogMessage) {
    match msg {
        DialogMessage::Escape => {
            if app.site.handle_escape() {
                app.dialog_hint = None;
            }
        }
        DialogMessage::Cancel => handle_cancel(app),
        DialogMessage::NextField => {
            if let Some(dialog) = app.site.active_dialog_mut() {
                dialog.focus_next();
            }
        }
        DialogMessage::PrevField => {
            if let Some(dialog) = app.site.active_dialog_mut() {
                dialog.focus_prev();
            }
        }
        DialogMessage::Submit => handle_submit(app),
        DialogMessage::Input(c) => edit(app, |dialog| dialog.input_char(c)),
        DialogMessage::Backspace => edit(app, FormDialog::backspace),
        DialogMessage::Click { column, row } => handle_click(app, column, row),
    }
}

/// 应用后台事件（中转应答、自动关闭）
pub fn apply_background(app: &mut App, event: DialogEvent) {
    let dialog_id = event.dialog();
    if !app.site.apply(event) {
        return;
    }

    let feedback = app.site.dialog(dialog_id).and_then(FormDialog::feedback);
    if let Some(feedback) = feedback {
        app.set_status(feedback.text());
    }
}

/// Cancel 按钮：成功状态下禁用
fn handle_cancel(app: &mut App) {
    let Some(dialog) = app.site.active_dialog_mut() else {
        return;
    };
    if dialog.state() == SubmissionState::Success {
        return;
    }
    dialog.close();
    app.dialog_hint = None;
}

/// 提交当前对话框，本地校验失败时在对话框内提示
fn handle_submit(app: &mut App) {
    let Some(dialog) = app.site.active_dialog_mut() else {
        return;
    };

    match dialog.submit() {
        Ok(ticket) => {
            log::debug!("Submitted {ticket}");
            app.dialog_hint = None;
        }
        // 提交中或已成功时按钮处于禁用状态
        Err(e @ CoreError::InvalidTransition { .. }) => {
            log::debug!("Ignored submit: {e}");
        }
        Err(e) => {
            app.dialog_hint = Some(e.to_string());
        }
    }
}

/// 编辑当前字段
fn edit(app: &mut App, op: impl FnOnce(&mut FormDialog) -> CoreResult<()>) {
    let Some(dialog) = app.site.active_dialog_mut() else {
        return;
    };

    match op(dialog) {
        Ok(()) => app.dialog_hint = None,
        // 输入被锁定时忽略按键
        Err(CoreError::InputLocked) => {}
        Err(e) => app.dialog_hint = Some(e.to_string()),
    }
}

/// 鼠标点击：面板外为遮罩层，面板内聚焦光标下的字段
fn handle_click(app: &mut App, column: u16, row: u16) {
    let panel = panel_rect(app.viewport);

    if !panel_contains(panel, column, row) {
        if app.site.handle_click(ClickTarget::Overlay) {
            app.dialog_hint = None;
        }
        return;
    }

    app.site.handle_click(ClickTarget::Content);
    if let (Some(field), Some(dialog)) = (field_at(panel, row), app.site.active_dialog_mut()) {
        dialog.set_focus(field);
    }
}
