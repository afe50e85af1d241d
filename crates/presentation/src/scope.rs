//! Lifetime-bound task scope for a screen.

use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::{runtime::Handle, sync::watch, task::JoinSet};
use tracing::{debug, warn};

use crate::error::ControllerError;

/// Owns every task started on behalf of one screen. Dropping the scope (or
/// calling [`ScreenScope::cancel`]) aborts whatever is still running.
pub struct ScreenScope {
    runtime: Handle,
    tasks: Mutex<Option<JoinSet<()>>>,
    active: Arc<watch::Sender<usize>>,
}

struct ActiveTask(Arc<watch::Sender<usize>>);

impl Drop for ActiveTask {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n = n.saturating_sub(1));
    }
}

impl ScreenScope {
    pub fn current() -> Result<Self, ControllerError> {
        Ok(Self::with_handle(Handle::try_current()?))
    }

    pub fn with_handle(runtime: Handle) -> Self {
        let (active, _rx) = watch::channel(0);
        Self {
            runtime,
            tasks: Mutex::new(Some(JoinSet::new())),
            active: Arc::new(active),
        }
    }

    /// Starts `task` on the scope. Returns `false` once the scope is cancelled.
    pub fn spawn<F>(&self, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut guard = self.lock_tasks();
        let Some(tasks) = guard.as_mut() else {
            debug!("screen scope cancelled; dropping task");
            return false;
        };

        while let Some(result) = tasks.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    warn!(error = %err, "screen task panicked");
                }
            }
        }

        self.active.send_modify(|n| *n += 1);
        let active = ActiveTask(Arc::clone(&self.active));
        tasks.spawn_on(
            async move {
                let _active = active;
                task.await;
            },
            &self.runtime,
        );
        true
    }

    /// Resolves once every task spawned so far has finished or been aborted.
    pub async fn wait_idle(&self) {
        let mut rx = self.active.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|n| *n == 0).await;
    }

    pub fn active_tasks(&self) -> usize {
        *self.active.borrow()
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock_tasks().is_none()
    }

    pub fn cancel(&self) {
        if let Some(mut tasks) = self.lock_tasks().take() {
            debug!(pending = tasks.len(), "cancelling screen scope");
            tasks.abort_all();
        }
    }

    fn lock_tasks(&self) -> MutexGuard<'_, Option<JoinSet<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
