//! 页面滚动锁
//!
//! 计数器实现：任一对话框持有 guard 时页面不可滚动。

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared page scroll lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold; released when the guard drops.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// One hold on a [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_counts_holders() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let a = lock.acquire();
        let b = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(a);
        assert!(lock.is_locked());
        drop(b);
        assert!(!lock.is_locked());
    }
}
