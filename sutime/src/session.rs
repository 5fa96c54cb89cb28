//! Lock-guarded, lazily constructed annotation session state
//!
//! The session is an explicit two-state machine: unloaded until the engine
//! handle has been constructed, loaded forever after. Construction is the
//! one critical section: the mutex guarantees racing threads build exactly
//! one handle and never observe a loaded session without one. Reads after
//! the transition go through the `OnceLock` without taking the lock.

use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, OnceLock};
use sutime_engine::AnnotationEngine;

pub(crate) struct Session {
    engine: OnceLock<Arc<dyn AnnotationEngine>>,
    init: Mutex<()>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            engine: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Construct the engine handle exactly once
    ///
    /// Later calls, including concurrent ones, are no-ops once a handle
    /// exists. A failed construction leaves the session unloaded so the
    /// caller may retry.
    pub(crate) fn load_with<F>(&self, construct: F) -> Result<()>
    where
        F: FnOnce() -> Result<Arc<dyn AnnotationEngine>>,
    {
        let _guard = self.init.lock().expect("session init lock poisoned");
        if self.engine.get().is_some() {
            return Ok(());
        }
        let engine = construct()?;
        // The init lock is held, so the cell is still empty here.
        let _ = self.engine.set(engine);
        Ok(())
    }

    /// The engine handle, or a usage error when the session is unloaded
    pub(crate) fn engine(&self) -> Result<&Arc<dyn AnnotationEngine>> {
        self.engine.get().ok_or(Error::NotLoaded)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.engine.get().is_some()
    }
}
