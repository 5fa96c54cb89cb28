//! Engine-layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while orchestrating the Java runtime
#[derive(Error, Debug)]
pub enum EngineError {
    /// The pinned bridge archive could not be found
    #[error(
        "bridge archive not found at {}: set SUTIME_BRIDGE_JAR or the bridge_jar option to its location",
        path.display()
    )]
    BridgeArchiveMissing {
        /// Path that was probed for the bridge archive
        path: PathBuf,
    },

    /// Required dependency archives are absent from the resource root
    #[error(
        "missing required archives under {}: {}. Download the CoreNLP dependencies into the resource root first",
        root.display(),
        names.join(", ")
    )]
    MissingArtifacts {
        /// Resource root that was scanned
        root: PathBuf,
        /// Exact file names that were not found
        names: Vec<String>,
    },

    /// Walking the resource root failed
    #[error("failed to scan {}: {source}", root.display())]
    Scan {
        /// Resource root that was being scanned
        root: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The startup flags could not be assembled
    #[error("invalid runtime flags: {0}")]
    InvalidFlags(#[from] jni::JvmError),

    /// The Java virtual machine failed to start
    #[error("failed to start the Java virtual machine: {0}")]
    Startup(#[from] jni::errors::StartJvmError),

    /// A runtime was required but none has been started in this process
    #[error(
        "no Java runtime is started in this process; start one first or construct without runtime_already_started"
    )]
    NotStarted,

    /// A call through the JNI boundary failed
    #[error("runtime call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The annotator threw on the Java side
    #[error("annotator error: {detail}")]
    Java {
        /// Rendered form of the Java-side throwable
        detail: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
