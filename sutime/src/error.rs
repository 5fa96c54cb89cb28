//! API error types

use std::path::PathBuf;
use sutime_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum Error {
    /// The requested language identifier is not in the known table
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// Identifier as supplied by the caller
        language: String,
    },

    /// The language is supported but its model archive is absent
    #[error(
        "missing language model for {language}: expected {model_jar} under {}. \
         Run `mvn dependency:copy-dependencies -DoutputDirectory=./jars -P {language}`",
        root.display()
    )]
    MissingLanguageModel {
        /// Canonical language name
        language: String,
        /// Expected model archive file name
        model_jar: String,
        /// Resource root that was checked
        root: PathBuf,
    },

    /// `parse` was called before the session finished loading
    #[error("annotator is not loaded; construct the session first")]
    NotLoaded,

    /// The engine's reply could not be decoded
    #[error("failed to decode annotator reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// Engine-layer error
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
