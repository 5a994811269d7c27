//! Escape 键监听注册表

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DialogId;

#[derive(Debug, Default)]
struct Registry {
    /// 注册顺序，最后一个最先收到 Escape
    stack: Vec<DialogId>,
    registrations: u64,
    removals: u64,
}

/// Shared registry of Escape-key listeners.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Arc<Mutex<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `dialog`; the listener is removed when the binding drops.
    #[must_use = "the listener is removed as soon as the binding is dropped"]
    pub fn register(&self, dialog: DialogId) -> EscapeBinding {
        let mut registry = self.lock();
        registry.stack.push(dialog);
        registry.registrations += 1;
        EscapeBinding {
            dialog,
            listeners: self.clone(),
        }
    }

    /// Dialog that should handle the next Escape press.
    pub fn dispatch_escape(&self) -> Option<DialogId> {
        self.lock().stack.last().copied()
    }

    pub fn is_registered(&self, dialog: DialogId) -> bool {
        self.lock().stack.contains(&dialog)
    }

    pub fn len(&self) -> usize {
        self.lock().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total `register` calls so far.
    pub fn registrations(&self) -> u64 {
        self.lock().registrations
    }

    /// Total bindings removed so far.
    pub fn removals(&self) -> u64 {
        self.lock().removals
    }

    fn remove(&self, dialog: DialogId) {
        let mut registry = self.lock();
        if let Some(pos) = registry.stack.iter().rposition(|id| *id == dialog) {
            registry.stack.remove(pos);
            registry.removals += 1;
        }
    }
}

/// Live Escape registration for one dialog.
#[derive(Debug)]
pub struct EscapeBinding {
    dialog: DialogId,
    listeners: KeyListeners,
}

impl EscapeBinding {
    pub fn dialog(&self) -> DialogId {
        self.dialog
    }
}

impl Drop for EscapeBinding {
    fn drop(&mut self) {
        self.listeners.remove(self.dialog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_registration_receives_escape() {
        let listeners = KeyListeners::new();
        let (a, b) = (DialogId::next(), DialogId::next());

        let first = listeners.register(a);
        let second = listeners.register(b);
        assert_eq!(listeners.dispatch_escape(), Some(b));

        drop(second);
        assert_eq!(listeners.dispatch_escape(), Some(a));
        drop(first);
        assert_eq!(listeners.dispatch_escape(), None);
        assert_eq!(listeners.registrations(), 2);
        assert_eq!(listeners.removals(), 2);
    }
}
