//! Applying modifiers to groups of rules.

use crate::modifiers::Modifier;
use crate::rule::{Rule, combine};

/// A list of modifiers waiting for the rules they wrap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct When {
    modifiers: Vec<Modifier>,
}

/// Starts a modifier application.
///
/// ```
/// use acss::{Rule, when};
/// use acss::modifiers::{media, pseudo};
///
/// let rule = when([media::MD, pseudo::HOVER]).apply(&[Rule::new([("color", "red")])]);
/// assert_eq!(rule.selectors(), [":hover"]);
/// assert_eq!(rule.media_queries(), ["(min-width: 768px)"]);
/// ```
pub fn when(modifiers: impl IntoIterator<Item = Modifier>) -> When {
    When {
        modifiers: modifiers.into_iter().collect(),
    }
}

impl When {
    /// Combines `rules` into one, then applies the modifiers right to left:
    /// the last modifier wraps innermost, the first outermost.
    pub fn apply(&self, rules: &[Rule]) -> Rule {
        apply_modifiers(&combine(rules), &self.modifiers)
    }
}

/// Applies `modifiers` to a single rule, last modifier first.
pub fn apply_modifiers(rule: &Rule, modifiers: &[Modifier]) -> Rule {
    modifiers
        .iter()
        .rev()
        .fold(rule.clone(), |acc, modifier| modifier.apply(&acc))
}
