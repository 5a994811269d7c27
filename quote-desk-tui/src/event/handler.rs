//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, DialogMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何情况下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有对话框打开，优先处理对话框输入
    if app.has_dialog() {
        return handle_dialog_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        KeyCode::Left | KeyCode::Char('h') if app.current_page == Page::Pricing => {
            AppMessage::Content(ContentMessage::PrevCard)
        }
        KeyCode::Right | KeyCode::Char('l') if app.current_page == Page::Pricing => {
            AppMessage::Content(ContentMessage::NextCard)
        }
        _ if DefaultKeymap::CONFIRM.matches(&key) => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理对话框中的按键
fn handle_dialog_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::DIALOG_ESCAPE.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Escape);
    }
    if DefaultKeymap::DIALOG_CANCEL.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Cancel);
    }
    if DefaultKeymap::DIALOG_SUBMIT.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Submit);
    }
    if DefaultKeymap::DIALOG_NEXT_FIELD.matches(&key) {
        return AppMessage::Dialog(DialogMessage::NextField);
    }
    if DefaultKeymap::DIALOG_PREV_FIELD.matches(&key) {
        return AppMessage::Dialog(DialogMessage::PrevField);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Dialog(DialogMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Dialog(DialogMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if app.has_dialog() => {
            AppMessage::Dialog(DialogMessage::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        // 滚轮始终转成滚动消息，是否生效由滚动锁决定
        MouseEventKind::ScrollUp => AppMessage::Content(ContentMessage::ScrollUp),
        MouseEventKind::ScrollDown => AppMessage::Content(ContentMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}
