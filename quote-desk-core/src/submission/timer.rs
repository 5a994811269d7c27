//! 一次性延时回调（成功后自动关闭）

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Delay between a successful submission and the automatic close.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Cancellable one-shot timer.
#[derive(Debug, Default)]
pub struct DismissTimer {
    task: Option<AbortHandle>,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `delay`, replacing any pending callback.
    pub fn schedule<F>(&mut self, runtime: &Handle, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        // 截止时间在调度时确定，与任务何时首次被 poll 无关
        let deadline = tokio::time::Instant::now() + delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire();
        });
        self.task = Some(handle.abort_handle());
    }

    /// Abort the pending callback, if any.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                let pending = !task.is_finished();
                task.abort();
                pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
