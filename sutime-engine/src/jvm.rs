//! Process-wide Java runtime management
//!
//! The JVM allows at most one instance per process and requires every OS
//! thread to be attached before it may call in. Both constraints are
//! foreign-runtime quirks this module absorbs: startup is check-then-start
//! under a lock, and attachment is an explicit, idempotent per-thread step.

use crate::classpath::Classpath;
use crate::error::Result;
use jni::{InitArgsBuilder, JNIEnv, JNIVersion, JavaVM};
use std::sync::{Mutex, OnceLock};

/// Timeout applied to incidental network use during runtime startup, in
/// milliseconds (CoreNLP resolves the local hostname while initializing).
/// Process-wide, set once at startup.
pub const STARTUP_NET_TIMEOUT_MS: u64 = 15_000;

static RUNTIME: OnceLock<JavaVM> = OnceLock::new();
static START_LOCK: Mutex<()> = Mutex::new(());

/// Assemble the startup flags: the mandatory class-path binding first, the
/// startup network timeouts, then caller flags appended verbatim.
fn startup_flags(search_path: &str, extra_flags: &[String]) -> Vec<String> {
    let mut flags = vec![
        format!("-Djava.class.path={search_path}"),
        format!("-Dsun.net.client.defaultConnectTimeout={STARTUP_NET_TIMEOUT_MS}"),
        format!("-Dsun.net.client.defaultReadTimeout={STARTUP_NET_TIMEOUT_MS}"),
    ];
    flags.extend_from_slice(extra_flags);
    flags
}

/// Handle to the process-wide Java runtime
///
/// At most one runtime is ever started per process; the handle is a cheap
/// shared reference to it. It is never torn down within the process
/// lifetime.
#[derive(Clone, Copy)]
pub struct JvmRuntime {
    vm: &'static JavaVM,
}

impl std::fmt::Debug for JvmRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JvmRuntime").finish_non_exhaustive()
    }
}

impl JvmRuntime {
    /// Start the shared runtime, or return it if already started
    ///
    /// The caller-supplied `extra_flags` are opaque pass-through (memory
    /// tuning and the like) and take effect only on the call that actually
    /// starts the runtime. Startup failure is returned as a typed error;
    /// nothing here terminates the process.
    pub fn ensure_started(classpath: &Classpath, extra_flags: &[String]) -> Result<Self> {
        let _guard = START_LOCK.lock().expect("runtime start lock poisoned");
        if let Some(vm) = RUNTIME.get() {
            log::debug!("Java runtime already started; reusing it");
            return Ok(Self { vm });
        }

        let mut args = InitArgsBuilder::new().version(JNIVersion::V8);
        for flag in startup_flags(&classpath.to_search_path(), extra_flags) {
            args = args.option(flag);
        }
        let vm = JavaVM::new(args.build()?)?;
        log::info!("started the shared Java runtime");

        // The start lock is held, so the cell is still empty here.
        Ok(Self {
            vm: RUNTIME.get_or_init(move || vm),
        })
    }

    /// The runtime started (or adopted) earlier in this process, if any
    pub fn current() -> Option<Self> {
        RUNTIME.get().map(|vm| Self { vm })
    }

    /// Register a runtime the embedding application started itself
    ///
    /// The embedder is responsible for having put the required archives on
    /// that runtime's class path. If a runtime is already registered, the
    /// existing one wins and `vm` is dropped (the JVM itself is unaffected).
    pub fn adopt(vm: JavaVM) -> Self {
        Self {
            vm: RUNTIME.get_or_init(move || vm),
        }
    }

    /// Whether the calling thread is attached to the runtime
    pub fn is_attached(&self) -> bool {
        self.vm.get_env().is_ok()
    }

    /// Attach the calling thread to the runtime if it is not already
    ///
    /// Idempotent: attaching an attached thread is a no-op. The attachment
    /// is permanent; it is released when the thread exits.
    pub fn ensure_attached(&self) -> Result<()> {
        if !self.is_attached() {
            self.vm.attach_current_thread_permanently()?;
            log::debug!("attached the calling thread to the Java runtime");
        }
        Ok(())
    }

    /// Execution environment of the calling thread
    ///
    /// The thread must be attached; call [`JvmRuntime::ensure_attached`]
    /// first.
    pub fn env(&self) -> Result<JNIEnv<'static>> {
        Ok(self.vm.get_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_path_binding_comes_first() {
        let flags = startup_flags("a.jar:b.jar", &[]);
        assert_eq!(flags[0], "-Djava.class.path=a.jar:b.jar");
    }

    #[test]
    fn startup_timeouts_are_applied() {
        let flags = startup_flags("a.jar", &[]);
        assert!(flags.contains(&"-Dsun.net.client.defaultConnectTimeout=15000".to_string()));
        assert!(flags.contains(&"-Dsun.net.client.defaultReadTimeout=15000".to_string()));
    }

    #[test]
    fn extra_flags_are_appended_verbatim() {
        let extra = vec!["-Xmx2g".to_string(), "-Xms256m".to_string()];
        let flags = startup_flags("a.jar", &extra);
        assert_eq!(&flags[flags.len() - 2..], &extra[..]);
    }

    #[test]
    fn no_runtime_is_started_by_default() {
        // Nothing in the test binary starts a JVM, so the process-wide
        // handle must be absent.
        assert!(JvmRuntime::current().is_none());
    }
}
