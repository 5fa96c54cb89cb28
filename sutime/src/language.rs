//! Language identifier validation and model availability checks
//!
//! Validation runs before any runtime work so a bad language fails fast,
//! without paying for dependency resolution or JVM startup.

use crate::error::{Error, Result};
use std::path::Path;
use sutime_engine::CORENLP_VERSION;

/// Languages bundled with rule files in the base engine distribution.
const SUPPORTED: [&str; 3] = ["british", "english", "spanish"];

/// Languages covered by the base models archive; everything else needs a
/// per-language model archive next to it.
const BASE_MODEL: [&str; 2] = ["british", "english"];

/// Map a user-facing identifier (full name or ISO 639-1 code,
/// case-insensitive) to its canonical language name.
fn canonical(identifier: &str) -> Option<&'static str> {
    match identifier {
        "arabic" | "ar" => Some("arabic"),
        "chinese" | "zh" => Some("chinese"),
        "english" | "en" => Some("english"),
        "british" => Some("british"),
        "french" | "fr" => Some("french"),
        "german" | "de" => Some("german"),
        "spanish" | "es" => Some("spanish"),
        _ => None,
    }
}

/// Expected file name of a per-language model archive
fn model_jar(language: &str) -> String {
    format!("stanford-corenlp-{CORENLP_VERSION}-models-{language}.jar")
}

/// Validate a language identifier and confirm its model is available
///
/// A recognized language without dedicated engine support degrades
/// gracefully to the default grammar with a logged warning; an unknown
/// identifier or a missing model archive is an error.
pub(crate) fn validate(identifier: &str, resource_root: &Path) -> Result<&'static str> {
    let normalized = identifier.trim().to_ascii_lowercase();
    let canonical = canonical(&normalized).ok_or_else(|| Error::UnsupportedLanguage {
        language: identifier.to_string(),
    })?;

    if !SUPPORTED.contains(&canonical) {
        log::warn!("{canonical} is not (yet) supported by SUTime; falling back to the default model");
        return Ok(canonical);
    }

    if BASE_MODEL.contains(&canonical) {
        return Ok(canonical);
    }

    let model_jar = model_jar(canonical);
    if !resource_root.join(&model_jar).is_file() {
        return Err(Error::MissingLanguageModel {
            language: canonical.to_string(),
            model_jar,
            root: resource_root.to_path_buf(),
        });
    }
    Ok(canonical)
}
