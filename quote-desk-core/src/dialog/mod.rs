//! 模态对话框生命周期
//!
//! - [`DialogController`]: 打开/关闭状态
//! - [`ScrollLock`]: 页面滚动锁（计数器）
//! - [`KeyListeners`]: Escape 键监听注册表

mod controller;
mod key_listener;
mod scroll_lock;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

pub use controller::{ClickTarget, DialogController, DialogView};
pub use key_listener::{EscapeBinding, KeyListeners};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

static NEXT_DIALOG_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DialogId(u64);

impl DialogId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DIALOG_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}
