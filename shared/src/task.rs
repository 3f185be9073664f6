use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;

/// Owns the in-flight requests of one component.
///
/// Every future passed through [`TaskScope::guard`] resolves to
/// `Err(Aborted)` once the scope is cancelled, so a torn-down view never
/// receives a late state update. Dropping the scope cancels it.
#[derive(Debug, Default)]
pub struct TaskScope {
    handles: Vec<(AbortHandle, Arc<AtomicBool>)>,
    cancelled: bool,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles of finished futures are released on the next call.
    pub fn guard<F: Future>(&mut self, future: F) -> impl Future<Output = Result<F::Output, Aborted>> {
        self.handles.retain(|(_, done)| !done.load(Ordering::Relaxed));
        let (handle, registration) = AbortHandle::new_pair();
        let done = Arc::new(AtomicBool::new(false));
        if self.cancelled {
            handle.abort();
        } else {
            self.handles.push((handle, done.clone()));
        }
        let guarded = Abortable::new(future, registration);
        async move {
            let result = guarded.await;
            done.store(true, Ordering::Relaxed);
            result
        }
    }

    pub fn cancel(&mut self) {
        if !self.cancelled {
            debug!(pending = self.pending(), "cancelling task scope");
        }
        self.cancelled = true;
        for (handle, _) in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Guarded futures that have not finished yet.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|(_, done)| !done.load(Ordering::Relaxed)).count()
    }

    /// Handles currently held, finished or not.
    pub fn tracked(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
