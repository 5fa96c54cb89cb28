//! High-level session configuration

use std::env;
use std::path::{Path, PathBuf};

/// Configuration for an annotation session
///
/// All options are fixed at construction; a session is never reconfigured
/// after it is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) resource_root: PathBuf,
    pub(crate) bridge_jar: Option<PathBuf>,
    pub(crate) runtime_already_started: bool,
    pub(crate) mark_time_ranges: bool,
    pub(crate) include_range: bool,
    pub(crate) jvm_flags: Vec<String>,
    pub(crate) language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_root: env::var_os("SUTIME_JARS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("jars")),
            bridge_jar: None,
            runtime_already_started: false,
            mark_time_ranges: false,
            include_range: false,
            jvm_flags: Vec::new(),
            language: "english".to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Directory holding the pre-downloaded dependency archives
    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Whether range phrases are merged into one annotation
    pub fn mark_time_ranges(&self) -> bool {
        self.mark_time_ranges
    }

    /// Whether range annotations carry begin/end sub-structure
    pub fn include_range(&self) -> bool {
        self.include_range
    }

    /// Requested language, as supplied by the caller
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory holding the pre-downloaded dependency archives
    ///
    /// Defaults to `jars/`, overridable process-wide via the `SUTIME_JARS`
    /// environment variable.
    pub fn resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.resource_root = root.into();
        self
    }

    /// Point at the bridge archive explicitly
    ///
    /// When unset, the `SUTIME_BRIDGE_JAR` environment variable is
    /// consulted, then the bridge archive name under the resource root.
    pub fn bridge_jar(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bridge_jar = Some(path.into());
        self
    }

    /// Declare that the Java runtime is managed by the embedding
    /// application
    ///
    /// Skips dependency resolution and startup entirely; the embedder is
    /// responsible for the runtime's class path.
    pub fn runtime_already_started(mut self, yes: bool) -> Self {
        self.config.runtime_already_started = yes;
        self
    }

    /// Merge range phrases such as "July to August" into one annotation
    pub fn mark_time_ranges(mut self, yes: bool) -> Self {
        self.config.mark_time_ranges = yes;
        self
    }

    /// Attach begin/end sub-structure to range annotations
    pub fn include_range(mut self, yes: bool) -> Self {
        self.config.include_range = yes;
        self
    }

    /// Append one runtime tuning flag, passed through verbatim
    /// (for example `-Xmx2g`)
    pub fn jvm_flag(mut self, flag: impl Into<String>) -> Self {
        self.config.jvm_flags.push(flag.into());
        self
    }

    /// Append several runtime tuning flags, passed through verbatim
    pub fn jvm_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.jvm_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Set the language, as a full name or ISO 639-1 code
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = Config::default();
        assert!(!config.runtime_already_started);
        assert!(!config.mark_time_ranges);
        assert!(!config.include_range);
        assert!(config.jvm_flags.is_empty());
        assert_eq!(config.language, "english");
    }

    #[test]
    fn builder_accumulates_flags_in_order() {
        let config = Config::builder()
            .jvm_flag("-Xms256m")
            .jvm_flags(["-Xmx2g", "-XX:+UseG1GC"])
            .build();
        assert_eq!(config.jvm_flags, ["-Xms256m", "-Xmx2g", "-XX:+UseG1GC"]);
    }

    #[test]
    fn builder_sets_session_options() {
        let config = Config::builder()
            .resource_root("/opt/corenlp/jars")
            .mark_time_ranges(true)
            .include_range(true)
            .language("es")
            .build();
        assert_eq!(config.resource_root(), Path::new("/opt/corenlp/jars"));
        assert!(config.mark_time_ranges());
        assert!(config.include_range());
        assert_eq!(config.language(), "es");
    }
}
