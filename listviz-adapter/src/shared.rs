use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use listviz::{Report, Snapshot};

use crate::{Command, Controller};

/// A cloneable handle that serializes access to one [`Controller`].
///
/// The engine itself assumes a single owner. Use this when several threads (e.g. a UI thread
/// and a timer thread) need to drive the same list.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Controller>>,
}

impl SharedEngine {
    pub fn new(controller: Controller) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Controller> {
        // Every operation is atomic, so the state behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn apply(&self, command: Command, now_ms: u64) -> Report {
        self.lock().apply(command, now_ms)
    }

    pub fn tick(&self, now_ms: u64) -> bool {
        self.lock().tick(now_ms)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().engine().snapshot()
    }
}
