//! Cascade layers.
//!
//! Every rule submitted to the composer takes the next number from a
//! [`LayerCounter`]. The registry emits CSS sorted by that number, so rules
//! submitted later win ties in specificity. [`layer`] pins rules to a fixed
//! number instead.

use crate::rule::{Rule, combine};

/// Monotonic layer sequence.
#[derive(Debug, Default)]
pub struct LayerCounter {
    next: u64,
}

impl LayerCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number and advances the counter.
    pub fn next_layer(&mut self) -> u64 {
        let layer = self.next;
        self.next += 1;
        layer
    }

    /// The number the next call to [`next_layer`](Self::next_layer) returns.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// A fixed cascade position for rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    priority: u64,
}

/// Pins rules to layer `priority`.
///
/// ```
/// use acss::{Rule, layer};
///
/// let base = layer(0).apply(&[Rule::new([("color", "black")])]);
/// assert_eq!(base.pinned_layer(), Some(0));
/// ```
pub fn layer(priority: u64) -> Layer {
    Layer { priority }
}

impl Layer {
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// Combines `rules` and pins the result to this layer.
    pub fn apply(&self, rules: &[Rule]) -> Rule {
        let combined = match rules {
            [single] => single.clone(),
            _ => combine(rules),
        };
        combined.with_pinned_layer(self.priority)
    }
}
