//! Build sessions.
//!
//! A [`Session`] owns all mutable state of a build: the layer counter, the
//! dynamic-id counter, the registry and the diagnostic sink. Independent
//! builds use independent sessions. A process-wide default session backs
//! the free functions ([`cx`], [`dcx`], [`dynamic`], [`generate_css`]) and is
//! reset with [`reset_global`].
//!
//! ## Configuration
//!
//! ```
//! use acss::{DiagnosticKinds, Session, SessionConfig};
//!
//! let session = Session::with_config(SessionConfig {
//!     class_prefix: "tw-".into(),
//!     diagnostics: DiagnosticKinds::SAME_CONTEXT,
//!     ..SessionConfig::default()
//! });
//! assert_eq!(session.config().class_prefix, "tw-");
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::compose::Item;
use crate::diagnostics::{Diagnostic, DiagnosticKinds};
use crate::dynamic::{DEFAULT_DYNAMIC_PREFIX, DynamicCounter, DynamicResult, DynamicValue};
use crate::hash::DEFAULT_CLASS_PREFIX;
use crate::layer::LayerCounter;
use crate::registry::{ListenerId, Registry};
use crate::rule::Rule;

/// Session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix of generated class names. Must not start with a digit.
    pub class_prefix: String,
    /// Prefix of dynamic custom property names.
    pub dynamic_prefix: String,
    /// Which conflict checks run on every composition.
    pub diagnostics: DiagnosticKinds,
    /// Treat rules with no declarations and no bindings as no-ops.
    pub skip_empty_rules: bool,
    /// Return the earlier result when an identical item list is composed
    /// again, instead of registering it at new layers.
    pub reuse_compositions: bool,
    /// How many distinct compositions are remembered for reuse. The oldest
    /// is forgotten first; composing it again registers it at new layers.
    pub composition_cache_limit: usize,
}

/// Default for [`SessionConfig::composition_cache_limit`].
pub const DEFAULT_COMPOSITION_CACHE_LIMIT: usize = 4096;

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            dynamic_prefix: DEFAULT_DYNAMIC_PREFIX.to_string(),
            diagnostics: DiagnosticKinds::default(),
            skip_empty_rules: true,
            reuse_compositions: true,
            composition_cache_limit: DEFAULT_COMPOSITION_CACHE_LIMIT,
        }
    }
}

type DiagnosticSink = Box<dyn FnMut(&Diagnostic) + Send>;

type CompositionCache = IndexMap<u64, Vec<(Vec<Item>, String)>, FxBuildHasher>;

/// All mutable state of one build.
///
/// Composition goes through [`Session::cx`] and [`Session::dcx`]; the
/// registered rules come back out through [`Session::generate_css`].
#[derive(Default)]
pub struct Session {
    config: SessionConfig,
    layers: LayerCounter,
    dynamics: DynamicCounter,
    registry: Registry,
    /// Remembered compositions keyed by item hash, oldest first.
    compositions: CompositionCache,
    cached_compositions: usize,
    diagnostic_sink: Option<DiagnosticSink>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("layers", &self.layers)
            .field("registry", &self.registry)
            .field("has_sink", &self.diagnostic_sink.is_some())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Takes the next cascade layer.
    pub fn next_layer(&mut self) -> u64 {
        self.layers.next_layer()
    }

    /// Wraps `value` for runtime binding under a fresh custom property.
    pub fn dynamic(&mut self, value: impl fmt::Display) -> DynamicValue {
        self.dynamics.wrap(&self.config.dynamic_prefix, value)
    }

    pub fn register(&mut self, class_name: &str, rule: Rule, layer: u64) -> bool {
        self.registry.register(class_name, rule, layer)
    }

    /// Subscribes to new registrations. The callback must not use the
    /// session it is registered on.
    pub fn on_change(&mut self, callback: impl FnMut() + Send + 'static) -> ListenerId {
        self.registry.on_change(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.registry.unsubscribe(id)
    }

    pub fn generate_css(&self) -> String {
        self.registry.generate_css()
    }

    /// Routes every diagnostic to `sink` in addition to the log.
    pub fn set_diagnostic_sink(&mut self, sink: impl FnMut(&Diagnostic) + Send + 'static) {
        self.diagnostic_sink = Some(Box::new(sink));
    }

    pub fn clear_diagnostic_sink(&mut self) {
        self.diagnostic_sink = None;
    }

    /// Clears the registry and both counters. Listeners and the diagnostic
    /// sink survive.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.layers.reset();
        self.dynamics.reset();
        self.compositions.clear();
        self.cached_compositions = 0;
    }

    pub(crate) fn report(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{}", diagnostic.message);
        if let Some(sink) = self.diagnostic_sink.as_mut() {
            sink(diagnostic);
        }
    }

    pub(crate) fn cached_composition(&self, key: u64, items: &[Item]) -> Option<String> {
        self.compositions
            .get(&key)?
            .iter()
            .find(|(cached, _)| cached.as_slice() == items)
            .map(|(_, class_name)| class_name.clone())
    }

    pub(crate) fn cache_composition(&mut self, key: u64, items: Vec<Item>, class_name: String) {
        let limit = self.config.composition_cache_limit;
        if limit == 0 {
            return;
        }
        while self.cached_compositions >= limit {
            let Some((_, evicted)) = self.compositions.shift_remove_index(0) else {
                break;
            };
            self.cached_compositions -= evicted.len();
        }
        self.compositions
            .entry(key)
            .or_default()
            .push((items, class_name));
        self.cached_compositions += 1;
    }
}

static GLOBAL: Lazy<Mutex<Session>> = Lazy::new(|| Mutex::new(Session::new()));

/// Runs `f` with the process-wide session locked.
///
/// Calling any other global function from inside `f` deadlocks.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    let mut session = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut session)
}

/// [`Session::cx`] on the global session.
pub fn cx<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_session(|session| session.cx(items))
}

/// [`Session::dcx`] on the global session.
pub fn dcx<I>(items: I) -> DynamicResult
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_session(|session| session.dcx(items))
}

/// [`Session::dynamic`] on the global session.
pub fn dynamic(value: impl fmt::Display) -> DynamicValue {
    with_session(|session| session.dynamic(value))
}

pub fn generate_css() -> String {
    with_session(|session| session.generate_css())
}

pub fn on_change(callback: impl FnMut() + Send + 'static) -> ListenerId {
    with_session(|session| session.on_change(callback))
}

pub fn unsubscribe(id: ListenerId) -> bool {
    with_session(|session| session.unsubscribe(id))
}

/// Resets the global session for test isolation.
pub fn reset_global() {
    with_session(Session::reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reset_clears_state_but_keeps_listeners() {
        let mut session = Session::new();
        let hits = Arc::new(Mutex::new(0));
        let seen = Arc::clone(&hits);
        session.on_change(move || *seen.lock().unwrap() += 1);

        session.cx([Rule::new([("color", "red")])]);
        session.dynamic(1);
        session.reset();

        assert!(session.registry().is_empty());
        assert_eq!(session.next_layer(), 0);
        assert_eq!(session.dynamic("x").id(), "--twc-d0");

        session.cx([Rule::new([("color", "red")])]);
        assert_eq!(*hits.lock().unwrap(), 2);
    }

    #[test]
    fn custom_prefixes() {
        let mut session = Session::with_config(SessionConfig {
            class_prefix: "c-".into(),
            dynamic_prefix: "--v".into(),
            ..SessionConfig::default()
        });
        assert!(session.cx([Rule::new([("color", "red")])]).starts_with("c-"));
        assert_eq!(session.dynamic(3).id(), "--v0");
    }

    #[test]
    fn sink_receives_diagnostics() {
        let mut session = Session::new();
        let collected = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&collected);
        session.set_diagnostic_sink(move |d| sink.lock().unwrap().push(d.property.clone()));

        session.cx([Rule::new([("padding", "1rem")]), Rule::new([("padding", "2rem")])]);
        assert_eq!(collected.lock().unwrap().as_slice(), ["padding"]);
    }

    #[test]
    fn composition_cache_forgets_the_oldest_first() {
        let mut session = Session::with_config(SessionConfig {
            composition_cache_limit: 2,
            ..SessionConfig::default()
        });
        let red = || [Rule::new([("color", "red")])];
        let blue = || [Rule::new([("color", "blue")])];
        let green = || [Rule::new([("color", "green")])];

        let first_red = session.cx(red());
        session.cx(blue());
        let first_green = session.cx(green());
        assert_eq!(session.cached_compositions, 2);

        assert_eq!(session.cx(green()), first_green);
        assert_ne!(session.cx(red()), first_red);
        assert_eq!(session.next_layer(), 4);
    }

    #[test]
    fn zero_limit_disables_reuse() {
        let mut session = Session::with_config(SessionConfig {
            composition_cache_limit: 0,
            ..SessionConfig::default()
        });
        let rule = || [Rule::new([("color", "red")])];
        let first = session.cx(rule());
        let second = session.cx(rule());
        assert_ne!(first, second);
        assert!(session.compositions.is_empty());
    }

    #[test]
    fn diagnostics_never_change_output() {
        let items = || [Rule::new([("padding", "1rem")]), Rule::new([("padding", "2rem")])];
        let mut quiet = Session::with_config(SessionConfig {
            diagnostics: DiagnosticKinds::empty(),
            ..SessionConfig::default()
        });
        let mut loud = Session::new();
        assert_eq!(quiet.cx(items()), loud.cx(items()));
        assert_eq!(quiet.generate_css(), loud.generate_css());
    }
}
