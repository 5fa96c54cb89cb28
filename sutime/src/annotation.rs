//! Typed view of the engine's annotation reply
//!
//! The Java bridge serializes its annotation list to JSON; this module is
//! the receiving half of that contract. Records arrive in document order
//! and are handed to the caller as owned values; nothing is cached.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Classification of a recognized temporal expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimexType {
    /// A calendar date ("tomorrow", "2017-01-09")
    Date,
    /// A time of day ("2pm", "Sunday night")
    Time,
    /// A span ("2 hours", or a merged range when range marking is on)
    Duration,
    /// A recurring expression ("every Tuesday", "christmas eve")
    Set,
    /// Forward-compatibility escape for types this wrapper does not know
    Other,
}

impl TimexType {
    /// Wire form of the type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TimexType::Date => "DATE",
            TimexType::Time => "TIME",
            TimexType::Duration => "DURATION",
            TimexType::Set => "SET",
            TimexType::Other => "OTHER",
        }
    }
}

impl Serialize for TimexType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimexType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "DATE" => TimexType::Date,
            "TIME" => TimexType::Time,
            "DURATION" => TimexType::Duration,
            "SET" => TimexType::Set,
            _ => TimexType::Other,
        })
    }
}

/// Normalized value of an annotation
///
/// Most expressions normalize to a single ISO-8601-like literal or symbolic
/// pattern (`2017-01-09`, `PT2H`, `XXXX-12-24`). Merged ranges normalize to
/// a begin/end pair instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// Single normalized literal
    Text(String),
    /// Begin/end pair of a merged range
    Range {
        /// Normalized start of the range
        begin: String,
        /// Normalized end of the range
        end: String,
    },
}

impl AnnotationValue {
    /// The single literal, if this value is not a range
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnnotationValue::Text(value) => Some(value),
            AnnotationValue::Range { .. } => None,
        }
    }

    /// The begin/end pair, if this value is a range
    pub fn as_range(&self) -> Option<(&str, &str)> {
        match self {
            AnnotationValue::Text(_) => None,
            AnnotationValue::Range { begin, end } => Some((begin, end)),
        }
    }
}

/// One recognized temporal expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnnotation {
    /// Surface form as it appeared in the input
    pub text: String,
    /// Character offset where the expression starts
    pub start: usize,
    /// Character offset just past the expression
    pub end: usize,
    /// Expression classification
    #[serde(rename = "type")]
    pub timex_type: TimexType,
    /// Normalized value
    pub value: AnnotationValue,
    /// Engine-specific normalized TIMEX tag, when the engine emits one
    #[serde(
        rename = "timex-value",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub timex_value: Option<String>,
    /// Any further fields the engine emits, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Decode the engine's JSON reply into ordered annotation records
///
/// A reply that does not parse is a defect in the engine contract and is
/// surfaced to the caller, never swallowed.
pub(crate) fn decode(reply: &str) -> Result<Vec<TemporalAnnotation>, serde_json::Error> {
    serde_json::from_str(reply)
}
