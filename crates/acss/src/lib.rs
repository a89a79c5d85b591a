//! Atomic CSS generation.
//!
//! Utilities produce [`Rule`]s, modifiers wrap them in selector and query
//! context, and the composer ([`Session::cx`]) hashes each rule at its
//! cascade layer, registers it, and returns generated class names. The
//! registry renders everything registered as CSS text in layer order.
//!
//! ```
//! use acss::utilities::{bg, p};
//! use acss::modifiers::pseudo::HOVER;
//! use acss::{Session, when};
//!
//! let mut session = Session::new();
//! let class = session.cx([p(4), when([HOVER]).apply(&[bg("blue-500")])]);
//! assert_eq!(class.split(' ').count(), 2);
//!
//! let css = session.generate_css();
//! assert!(css.contains("padding: 1rem;"));
//! assert!(css.contains(":hover {\n  background-color: #3b82f6;\n}"));
//! ```
//!
//! Values known only at runtime go through [`Session::dynamic`] and
//! [`Session::dcx`], which returns the inline custom properties alongside
//! the class names.

pub mod compose;
pub mod diagnostics;
pub mod dynamic;
pub mod hash;
pub mod inject;
pub mod layer;
pub mod modifiers;
pub mod registry;
pub mod rule;
pub mod session;
pub mod testing;
pub mod utilities;
pub mod value;
pub mod when;

pub use compose::{Composition, Item};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticKinds};
pub use dynamic::{DynamicResult, DynamicValue};
pub use hash::generate_hash;
pub use inject::StylesheetPublisher;
pub use layer::{Layer, layer};
pub use modifiers::Modifier;
pub use registry::{ListenerId, Registry};
pub use rule::{Rule, combine};
pub use session::{
    Session, SessionConfig, cx, dcx, dynamic, generate_css, on_change, reset_global, unsubscribe,
    with_session,
};
pub use utilities::css;
pub use value::Value;
pub use when::{When, apply_modifiers, when};

// Re-export the log crate so callers can configure one logger for both.
pub use log;
