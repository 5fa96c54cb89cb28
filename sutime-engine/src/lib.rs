//! JVM orchestration for the SUTime temporal annotator
//!
//! This crate owns everything needed to get a working annotation session
//! out of the JVM-hosted engine: resolving the dependency archives into a
//! class path, starting the process-wide runtime exactly once, attaching
//! calling threads, and the raw call/reply contract with the Java-side
//! bridge class. The linguistic work itself is the engine's; nothing here
//! interprets the text.

#![warn(missing_docs)]

pub mod bridge;
pub mod classpath;
pub mod error;
pub mod jvm;

// Re-export key types
pub use bridge::{SuTimeBridge, BRIDGE_CLASS};
pub use classpath::{required_artifacts, Classpath, BRIDGE_JAR, CORENLP_VERSION};
pub use error::{EngineError, Result};
pub use jvm::{JvmRuntime, STARTUP_NET_TIMEOUT_MS};

/// Capability seam to the external annotation engine
///
/// The API layer only ever talks to this trait: one idempotent thread
/// registration step and one annotate call returning the engine's JSON
/// reply. [`SuTimeBridge`] is the JNI-backed implementation; tests and
/// embedders may substitute their own.
pub trait AnnotationEngine: Send + Sync {
    /// Register the calling thread with the runtime; a no-op when the
    /// thread is already registered.
    fn ensure_attached(&self) -> Result<()>;

    /// Run one annotation pass and return the engine's structured reply.
    ///
    /// An absent `reference_date` makes the engine resolve relative
    /// expressions against its own current time.
    fn annotate(&self, text: &str, reference_date: Option<&str>) -> Result<String>;
}
