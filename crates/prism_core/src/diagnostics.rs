//! Coding-Error Diagnostics
//!
//! Misuse of an API that is recoverable locally (a relative path where an
//! absolute one is required, for example) is reported as a [`CodingError`]
//! and then skipped. Reporting never panics and never aborts the caller.
//!
//! # Sinks
//!
//! Errors are delivered to a [`DiagnosticSink`]. Unless a sink is installed
//! for the current thread with [`with_sink`], errors go to the default
//! [`LogSink`], which writes through the `log` facade at `Error` level.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use prism_core::diagnostics::{self, DiagnosticCollector};
//!
//! let collector = Arc::new(DiagnosticCollector::new());
//! diagnostics::with_sink(collector.clone(), || {
//!     prism_core::coding_error!("Root path must be absolute");
//! });
//! assert_eq!(collector.len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// A reported API misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingError {
    /// Module that reported the error
    pub site: &'static str,
    pub message: String,
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coding error in {}: {}", self.site, self.message)
    }
}

/// Destination for coding errors.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &CodingError);
}

// ============================================================================
// LogSink
// ============================================================================

/// Writes coding errors to the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    level: log::Level,
}

impl LogSink {
    #[must_use]
    pub const fn new(level: log::Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(log::Level::Error)
    }
}

impl DiagnosticSink for LogSink {
    fn report(&self, error: &CodingError) {
        log::log!(target: error.site, self.level, "{error}");
    }
}

// ============================================================================
// DiagnosticCollector
// ============================================================================

/// Captures coding errors in memory, mainly for tests.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    errors: Mutex<Vec<CodingError>>,
}

impl DiagnosticCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the errors captured so far.
    #[must_use]
    pub fn errors(&self) -> Vec<CodingError> {
        self.errors.lock().clone()
    }

    /// Drains the captured errors.
    pub fn take(&self) -> Vec<CodingError> {
        std::mem::take(&mut *self.errors.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }

    pub fn clear(&self) {
        self.errors.lock().clear();
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, error: &CodingError) {
        self.errors.lock().push(error.clone());
    }
}

// ============================================================================
// Active sink
// ============================================================================

static DEFAULT_SINK: LogSink = LogSink::new(log::Level::Error);

thread_local! {
    static SCOPED_SINK: RefCell<Option<Arc<dyn DiagnosticSink>>> = const { RefCell::new(None) };
}

/// Restores the previously installed sink when dropped, also on unwind.
struct SinkScope {
    previous: Option<Arc<dyn DiagnosticSink>>,
}

impl Drop for SinkScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED_SINK.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Runs `f` with `sink` receiving every coding error reported on this
/// thread. Scopes nest; the outer sink is restored afterwards.
pub fn with_sink<R>(sink: Arc<dyn DiagnosticSink>, f: impl FnOnce() -> R) -> R {
    let previous = SCOPED_SINK.with(|slot| slot.replace(Some(sink)));
    let _scope = SinkScope { previous };
    f()
}

/// Delivers a coding error to the active sink.
///
/// Prefer the [`coding_error!`](crate::coding_error) macro, which fills in
/// the reporting module.
pub fn report_coding_error(site: &'static str, message: impl Into<String>) {
    let error = CodingError {
        site,
        message: message.into(),
    };
    // Clone the handle out so a sink may itself report without re-borrowing.
    let scoped = SCOPED_SINK.with(|slot| slot.borrow().clone());
    match scoped {
        Some(sink) => sink.report(&error),
        None => DEFAULT_SINK.report(&error),
    }
}

/// Reports a formatted coding error from the calling module.
#[macro_export]
macro_rules! coding_error {
    ($($arg:tt)+) => {
        $crate::diagnostics::report_coding_error(module_path!(), format!($($arg)+))
    };
}
