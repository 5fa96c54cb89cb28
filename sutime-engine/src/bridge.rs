//! JNI bridge to the Java-side annotator wrapper
//!
//! The Java half of this wrapper is a single bridge class that owns the
//! CoreNLP pipeline and exposes `annotate` overloads returning the
//! annotations as a JSON string. This module constructs that object once
//! and forwards calls to it.

use crate::error::{EngineError, Result};
use crate::jvm::JvmRuntime;
use crate::AnnotationEngine;
use jni::objects::{GlobalRef, JString, JValue};
use jni::sys::jboolean;
use jni::JNIEnv;

/// JNI name of the bridge class inside the bridge archive
pub const BRIDGE_CLASS: &str = "edu/stanford/nlp/bridge/SUTimeBridge";

/// Live handle to one configured annotator instance
///
/// Construction is the expensive step (the CoreNLP pipeline loads its
/// models); the handle is then shared across threads and called
/// concurrently without further locking.
pub struct SuTimeBridge {
    runtime: JvmRuntime,
    instance: GlobalRef,
}

impl SuTimeBridge {
    /// Construct the Java-side annotator
    ///
    /// `language` must already be canonical; validation happens in the API
    /// layer before any runtime work.
    pub fn new(
        runtime: JvmRuntime,
        mark_time_ranges: bool,
        include_range: bool,
        language: &str,
    ) -> Result<Self> {
        runtime.ensure_attached()?;
        let mut env = runtime.env()?;
        let language = env.new_string(language)?;
        let instance = env
            .new_object(
                BRIDGE_CLASS,
                "(ZZLjava/lang/String;)V",
                &[
                    JValue::Bool(mark_time_ranges as jboolean),
                    JValue::Bool(include_range as jboolean),
                    (&language).into(),
                ],
            )
            .map_err(|e| take_java_error(&mut env, e))?;
        let instance = env.new_global_ref(instance)?;
        Ok(Self { runtime, instance })
    }
}

impl AnnotationEngine for SuTimeBridge {
    fn ensure_attached(&self) -> Result<()> {
        self.runtime.ensure_attached()
    }

    fn annotate(&self, text: &str, reference_date: Option<&str>) -> Result<String> {
        self.runtime.ensure_attached()?;
        let mut env = self.runtime.env()?;
        let input = env.new_string(text)?;

        // The engine treats an omitted reference date as "now", so the two
        // cases are distinct call shapes rather than a defaulted argument.
        let reply = match reference_date {
            Some(date) => {
                let date = env.new_string(date)?;
                env.call_method(
                    &self.instance,
                    "annotate",
                    "(Ljava/lang/String;Ljava/lang/String;)Ljava/lang/String;",
                    &[(&input).into(), (&date).into()],
                )
            }
            None => env.call_method(
                &self.instance,
                "annotate",
                "(Ljava/lang/String;)Ljava/lang/String;",
                &[(&input).into()],
            ),
        }
        .map_err(|e| take_java_error(&mut env, e))?;

        let reply = JString::from(reply.l()?);
        let text = env.get_string(&reply)?.into();
        Ok(text)
    }
}

/// Map a failed JNI call to a typed error, consuming any pending Java
/// exception so later calls on this thread start clean.
fn take_java_error(env: &mut JNIEnv<'_>, err: jni::errors::Error) -> EngineError {
    if !matches!(err, jni::errors::Error::JavaException) {
        return EngineError::Jni(err);
    }
    let detail =
        describe_throwable(env).unwrap_or_else(|| "unknown Java exception".to_string());
    EngineError::Java { detail }
}

fn describe_throwable(env: &mut JNIEnv<'_>) -> Option<String> {
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    let rendered = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    let rendered = JString::from(rendered);
    env.get_string(&rendered).ok().map(String::from)
}
