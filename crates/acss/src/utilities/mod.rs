//! Utility functions: arguments in, [`Rule`] out.
//!
//! Utilities are pure. Numbers and theme tokens are resolved against the
//! `palette` tables; anything unrecognized passes through as written. A
//! [`Value::Dynamic`] argument always becomes a `var()` reference plus a
//! binding, never a resolved literal.
//!
//! ```
//! use acss::utilities::{bg, p};
//!
//! assert_eq!(p(4).declaration("padding"), Some("1rem"));
//! assert_eq!(bg("blue-500").declaration("background-color"), Some("#3b82f6"));
//! ```

pub mod borders;
pub mod colors;
pub mod effects;
pub mod interactivity;
pub mod layout;
pub mod spacing;
pub mod transitions;
pub mod typography;

pub use borders::*;
pub use colors::*;
pub use effects::*;
pub use interactivity::*;
pub use layout::*;
pub use spacing::*;
pub use transitions::*;
pub use typography::*;

use crate::rule::Rule;
use crate::value::Value;

/// A rule from literal declarations.
///
/// ```
/// let rule = acss::css([("display", "contents")]);
/// assert_eq!(rule.declaration("display"), Some("contents"));
/// ```
pub fn css<K, V>(declarations: impl IntoIterator<Item = (K, V)>) -> Rule
where
    K: Into<String>,
    V: Into<String>,
{
    Rule::new(declarations)
}

/// Numbers index the spacing scale; strings may name a size or scale step.
pub(crate) fn spacing_value(value: &Value) -> String {
    match value {
        Value::Num(n) => palette::resolve_spacing(*n),
        Value::Str(s) => palette::resolve_size(s),
        other => other.to_string(),
    }
}

/// Color tokens (`blue-500`, `white`) resolve; anything else passes through.
pub(crate) fn color_value(value: &Value) -> String {
    match value {
        Value::Str(s) => palette::resolve_color(s),
        other => other.to_string(),
    }
}

/// Bare numbers become pixels.
pub(crate) fn px_value(value: &Value) -> String {
    match value {
        Value::Num(n) => format!("{}px", n),
        other => other.to_string(),
    }
}

/// Bare numbers become milliseconds.
pub(crate) fn ms_value(value: &Value) -> String {
    match value {
        Value::Num(n) => format!("{}ms", n),
        other => other.to_string(),
    }
}

pub(crate) fn literal(value: &Value) -> String {
    value.to_string()
}

/// Single-property utility helper.
pub(crate) fn rule_for(property: &str, value: impl Into<Value>, resolve: fn(&Value) -> String) -> Rule {
    value.into().into_rule(&[property], resolve)
}

/// Multi-property utility helper; every property gets the same value.
pub(crate) fn rule_for_all(properties: &[&str], value: impl Into<Value>, resolve: fn(&Value) -> String) -> Rule {
    value.into().into_rule(properties, resolve)
}
