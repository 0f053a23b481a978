// One-shot delayed work tied to the lifetime of its owner.
//
// Purpose
// - Run a future once after a fixed delay on the tokio runtime.
// - Guarantee the work never runs once the owner has cancelled or dropped it.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to a delayed task. Aborts the task when cancelled or dropped.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `task` to run after `delay`. Must be called from within a tokio runtime.
    pub fn after<F>(delay: Duration, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        Self { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
