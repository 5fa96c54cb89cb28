//! Dependency resolution for the annotator's classpath
//!
//! The annotator runs inside a JVM and needs its dependency archives on the
//! class path before startup: the CoreNLP engine and models, gson for the
//! reply serialization, an slf4j binding, and the bridge archive shipped
//! with this wrapper. Resolution scans a user-provided resource root for
//! jars and verifies the required set is complete.

use crate::error::{EngineError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// CoreNLP version the wrapper is pinned to
pub const CORENLP_VERSION: &str = "4.0.0";

/// File name of the bridge archive shipped with this wrapper
pub const BRIDGE_JAR: &str = "stanford-corenlp-sutime-bridge-1.4.0.jar";

/// Archives that must be present under the resource root
pub fn required_artifacts() -> [String; 4] {
    [
        format!("stanford-corenlp-{CORENLP_VERSION}.jar"),
        format!("stanford-corenlp-{CORENLP_VERSION}-models.jar"),
        "gson-2.8.6.jar".to_string(),
        "slf4j-simple-1.7.30.jar".to_string(),
    ]
}

/// Resolved, validated set of archive locations for the runtime
///
/// The bridge archive always comes first; the remaining order follows the
/// directory walk and does not matter to the JVM.
#[derive(Debug, Clone)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    /// Resolve the classpath from a resource root and a bridge archive
    ///
    /// Walks `resource_root` recursively collecting every `*.jar` file and
    /// validates that the collected names cover [`required_artifacts`].
    /// The error on a failed validation names exactly the missing archives.
    pub fn resolve(resource_root: &Path, bridge_jar: &Path) -> Result<Self> {
        if !bridge_jar.is_file() {
            return Err(EngineError::BridgeArchiveMissing {
                path: bridge_jar.to_path_buf(),
            });
        }

        let mut entries = vec![bridge_jar.to_path_buf()];
        let mut names = BTreeSet::new();
        for entry in WalkDir::new(resource_root) {
            let entry = entry.map_err(|e| EngineError::Scan {
                root: resource_root.to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "jar")
            {
                names.insert(entry.file_name().to_string_lossy().into_owned());
                entries.push(entry.into_path());
            }
        }

        let missing: Vec<String> = required_artifacts()
            .into_iter()
            .filter(|name| !names.contains(name))
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::MissingArtifacts {
                root: resource_root.to_path_buf(),
                names: missing,
            });
        }

        Ok(Self { entries })
    }

    /// Archive locations, bridge archive first
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Join the entries into the search-path string the JVM expects
    pub fn to_search_path(&self) -> String {
        let separator = if cfg!(windows) { ";" } else { ":" };
        self.entries
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
