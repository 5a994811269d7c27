//! 快捷键表

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 一个按键 + 修饰键组合
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
    /// 为真时忽略修饰键（部分终端发送 BackTab 时不带 SHIFT）
    any_modifiers: bool,
}

impl KeyBinding {
    const fn with(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self {
            code,
            modifiers,
            any_modifiers: false,
        }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::with(KeyModifiers::NONE, code)
    }

    pub const fn alt(c: char) -> Self {
        Self::with(KeyModifiers::ALT, KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::with(KeyModifiers::CONTROL, KeyCode::Char(c))
    }

    /// 不论修饰键如何都匹配
    pub const fn any(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
            any_modifiers: true,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && (self.any_modifiers || key.modifiers == self.modifiers)
    }
}

/// 默认快捷键
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl('c');
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::plain(KeyCode::Tab);
    pub const CONFIRM: KeyBinding = KeyBinding::plain(KeyCode::Enter);

    // 对话框
    pub const DIALOG_ESCAPE: KeyBinding = KeyBinding::plain(KeyCode::Esc);
    pub const DIALOG_CANCEL: KeyBinding = KeyBinding::ctrl('x');
    pub const DIALOG_SUBMIT: KeyBinding = KeyBinding::plain(KeyCode::Enter);
    pub const DIALOG_NEXT_FIELD: KeyBinding = KeyBinding::plain(KeyCode::Tab);
    pub const DIALOG_PREV_FIELD: KeyBinding = KeyBinding::any(KeyCode::BackTab);
}
