//! Rust wrapper for Stanford CoreNLP's SUTime temporal tagger
//!
//! SUTime recognizes time, date, duration, and set expressions in free-form
//! text and normalizes them to ISO-8601-like values. The recognizer itself
//! runs inside a JVM; this crate is the orchestration layer that resolves
//! the dependency archives, starts the shared runtime once per process,
//! keeps calling threads attached, and decodes the engine's structured
//! reply.
//!
//! ```no_run
//! use sutime::{Config, SuTime};
//!
//! # fn main() -> sutime::Result<()> {
//! let sutime = SuTime::new(Config::builder().resource_root("jars").build())?;
//! let annotations = sutime.parse("I have written a test today.", Some("2017-01-09"))?;
//! for annotation in &annotations {
//!     println!("{:?}: {:?}", annotation.timex_type, annotation.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Construction is expensive (the CoreNLP pipeline loads its models);
//! construct one [`SuTime`] and share it across threads. `parse` is safe to
//! call concurrently once the session is loaded.

#![warn(missing_docs)]

pub mod annotation;
pub mod config;
pub mod error;

mod language;
mod session;

use session::Session;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use sutime_engine::{Classpath, JvmRuntime, SuTimeBridge, BRIDGE_JAR};

// Re-export key types
pub use annotation::{AnnotationValue, TemporalAnnotation, TimexType};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use sutime_engine::{AnnotationEngine, EngineError};

/// A configured, loaded annotation session
///
/// One `SuTime` owns one engine handle, configured at construction and
/// reused across all subsequent [`parse`](SuTime::parse) calls from any
/// number of threads.
pub struct SuTime {
    config: Config,
    language: &'static str,
    session: Session,
}

impl std::fmt::Debug for SuTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuTime")
            .field("config", &self.config)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl SuTime {
    /// Construct a session
    ///
    /// Validates the language first (fails fast before any runtime work),
    /// then resolves the dependency archives, starts the shared runtime if
    /// this process has not started one yet, and builds the engine handle.
    pub fn new(config: Config) -> Result<Self> {
        let language = language::validate(config.language(), config.resource_root())?;

        let runtime = if config.runtime_already_started {
            JvmRuntime::current().ok_or(EngineError::NotStarted)?
        } else {
            let bridge_jar = bridge_jar_location(&config);
            let classpath = Classpath::resolve(config.resource_root(), &bridge_jar)?;
            JvmRuntime::ensure_started(&classpath, &config.jvm_flags)?
        };

        let mark_time_ranges = config.mark_time_ranges;
        let include_range = config.include_range;
        let session = Session::new();
        session.load_with(|| {
            let bridge = SuTimeBridge::new(runtime, mark_time_ranges, include_range, language)?;
            Ok(Arc::new(bridge) as Arc<dyn AnnotationEngine>)
        })?;

        Ok(Self {
            config,
            language,
            session,
        })
    }

    /// Construct a session for a specific language, defaults otherwise
    pub fn with_language(language: &str) -> Result<Self> {
        Self::new(Config::builder().language(language).build())
    }

    /// Construct a session over a caller-supplied engine
    ///
    /// The capability seam for embedders with their own engine transport,
    /// and for tests that script the engine's replies. Language validation
    /// still applies; dependency resolution and runtime startup are skipped
    /// entirely.
    pub fn with_engine(config: Config, engine: Arc<dyn AnnotationEngine>) -> Result<Self> {
        let language = language::validate(config.language(), config.resource_root())?;
        let session = Session::new();
        session.load_with(|| Ok(engine))?;
        Ok(Self {
            config,
            language,
            session,
        })
    }

    /// Extract temporal expressions from `text`
    ///
    /// When `reference_date` (ISO-8601) is given, relative expressions such
    /// as "tomorrow" resolve against it; when absent or empty, the engine
    /// resolves against its own current time. Records come back in document
    /// order. Every call is a fresh annotation pass; nothing is cached.
    pub fn parse(
        &self,
        text: &str,
        reference_date: Option<&str>,
    ) -> Result<Vec<TemporalAnnotation>> {
        let engine = self.session.engine()?;
        engine.ensure_attached().map_err(Error::Engine)?;

        let reference_date = reference_date.filter(|date| !date.trim().is_empty());
        let reply = engine
            .annotate(text, reference_date)
            .map_err(Error::Engine)?;
        Ok(annotation::decode(&reply)?)
    }

    /// Canonical language the session was configured with
    pub fn language(&self) -> &str {
        self.language
    }

    /// Whether the engine handle has been constructed
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// The configuration this session was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Locate the bridge archive: explicit option, then environment, then the
/// bridge archive name under the resource root.
fn bridge_jar_location(config: &Config) -> PathBuf {
    config
        .bridge_jar
        .clone()
        .or_else(|| env::var_os("SUTIME_BRIDGE_JAR").map(PathBuf::from))
        .unwrap_or_else(|| config.resource_root.join(BRIDGE_JAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_on_an_unloaded_session_is_a_usage_error() {
        let sutime = SuTime {
            config: Config::default(),
            language: "english",
            session: Session::new(),
        };
        let err = sutime.parse("tomorrow", None).unwrap_err();
        assert!(matches!(err, Error::NotLoaded));
    }

    #[test]
    fn bridge_jar_defaults_under_the_resource_root() {
        let config = Config::builder().resource_root("/opt/jars").build();
        if env::var_os("SUTIME_BRIDGE_JAR").is_none() {
            assert_eq!(
                bridge_jar_location(&config),
                PathBuf::from("/opt/jars").join(BRIDGE_JAR)
            );
        }
    }

    #[test]
    fn explicit_bridge_jar_wins() {
        let config = Config::builder()
            .resource_root("/opt/jars")
            .bridge_jar("/elsewhere/bridge.jar")
            .build();
        assert_eq!(
            bridge_jar_location(&config),
            PathBuf::from("/elsewhere/bridge.jar")
        );
    }
}
