//! Helpers for tests of code that composes styles.
//!
//! ```
//! use acss::testing::{DiagnosticLog, block_for};
//! use acss::{Rule, Session};
//!
//! let mut session = Session::new();
//! let log = DiagnosticLog::attach(&mut session);
//! let class = session.cx([Rule::new([("gap", "1rem")]), Rule::new([("gap", "2rem")])]);
//!
//! assert_eq!(log.len(), 1);
//! let first = class.split(' ').next().unwrap();
//! assert_eq!(
//!     block_for(&session.generate_css(), first),
//!     Some(format!(".{} {{\n  gap: 1rem;\n}}", first).as_str())
//! );
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::diagnostics::Diagnostic;
use crate::session::Session;

/// The top-level block of `css` that renders `class_name`, including any
/// `@media`/`@supports` wrappers.
pub fn block_for<'a>(css: &'a str, class_name: &str) -> Option<&'a str> {
    let needle = format!(".{}", class_name);
    css.split("\n\n").find(|block| {
        block.match_indices(&needle).any(|(at, _)| {
            block[at + needle.len()..]
                .chars()
                .next()
                .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        })
    })
}

/// Collects diagnostics delivered to a session sink.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log installed as `session`'s diagnostic sink.
    pub fn attach(session: &mut Session) -> Self {
        let log = Self::new();
        session.set_diagnostic_sink(log.sink());
        log
    }

    pub fn sink(&self) -> impl FnMut(&Diagnostic) + Send + 'static {
        let entries = Arc::clone(&self.entries);
        move |diagnostic: &Diagnostic| {
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(diagnostic.clone())
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|d| d.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
