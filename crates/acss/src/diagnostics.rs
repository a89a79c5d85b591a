//! Conflict diagnostics for a single composition.
//!
//! Two checks run over the rules passed to one composer call:
//!
//! - **Same context**: two rules with identical selectors, template and
//!   conditions declare different values for one property. Whichever comes
//!   later silently wins.
//! - **Cascade hazard**: two rules with identical selectors and template
//!   declare different values for one property under condition sets where
//!   neither contains the other. The result depends on which unrelated
//!   condition is evaluated last.
//!
//! Diagnostics are advisory. They never change what gets registered.

use std::collections::BTreeSet;

use bitflags::bitflags;
use phf::phf_map;
use rustc_hash::FxHashSet;

use crate::rule::Rule;

bitflags! {
    /// Which diagnostics a session runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DiagnosticKinds: u8 {
        /// Two rules in one rendering context set different values.
        const SAME_CONTEXT   = 0b01;
        /// Two rules set different values under overlapping but unordered
        /// media or supports conditions.
        const CASCADE_HAZARD = 0b10;
    }
}

impl Default for DiagnosticKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// The check that produced a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// See [`DiagnosticKinds::SAME_CONTEXT`].
    SameContext,
    /// See [`DiagnosticKinds::CASCADE_HAZARD`].
    CascadeHazard,
}

/// One reported conflict. `first` and `second` are item positions in the
/// composer call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The CSS property both rules declare.
    pub property: String,
    pub first: usize,
    pub second: usize,
    /// Human-readable description; also the dedup key.
    pub message: String,
}

/// Shorthand anchors and the properties they are routinely refined with.
///
/// Declaring an anchor alongside a later rule that only adjusts one of its
/// refinements is the intended idiom (`transition` then `duration(300)`).
static REFINEMENTS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "transition-property" => &[
        "transition-duration",
        "transition-timing-function",
        "transition-delay",
    ],
    "font-size" => &["line-height"],
    "border-width" => &["border-style"],
    "animation" => &[
        "animation-duration",
        "animation-timing-function",
        "animation-delay",
    ],
};

fn declares_anchor_for(rule: &Rule, property: &str) -> bool {
    REFINEMENTS.entries().any(|(anchor, refined)| {
        refined.contains(&property) && rule.declarations().contains_key(*anchor)
    })
}

/// A conflict on `property` is the shorthand idiom when exactly one side
/// declares an anchor that `property` refines.
fn is_refinement(a: &Rule, b: &Rule, property: &str) -> bool {
    declares_anchor_for(a, property) != declares_anchor_for(b, property)
}

fn conditions(rule: &Rule) -> BTreeSet<&str> {
    rule.media_queries()
        .iter()
        .chain(rule.supports_queries())
        .map(String::as_str)
        .collect()
}

fn same_selector_context(a: &Rule, b: &Rule) -> bool {
    a.selectors() == b.selectors() && a.selector_template() == b.selector_template()
}

fn query_set(list: &[String]) -> BTreeSet<&str> {
    list.iter().map(String::as_str).collect()
}

fn same_conditions(a: &Rule, b: &Rule) -> bool {
    query_set(a.media_queries()) == query_set(b.media_queries())
        && query_set(a.supports_queries()) == query_set(b.supports_queries())
}

fn describe(set: &BTreeSet<&str>) -> String {
    if set.is_empty() {
        return "(none)".to_string();
    }
    set.iter().copied().collect::<Vec<_>>().join(" and ")
}

/// Runs the enabled checks over `(position, rule)` pairs, in order.
///
/// Each unique message is reported once; the first pair producing it
/// supplies the positions.
pub fn check(rules: &[(usize, &Rule)], kinds: DiagnosticKinds) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if kinds.is_empty() {
        return out;
    }
    let mut seen = FxHashSet::default();

    for (i, &(first, a)) in rules.iter().enumerate() {
        for &(second, b) in &rules[i + 1..] {
            if !same_selector_context(a, b) {
                continue;
            }
            let same_context = same_conditions(a, b);

            for (property, first_value) in a.declarations() {
                let Some(second_value) = b.declaration(property) else {
                    continue;
                };
                if first_value == second_value {
                    continue;
                }

                let diagnostic = if same_context {
                    if !kinds.contains(DiagnosticKinds::SAME_CONTEXT)
                        || is_refinement(a, b, property)
                    {
                        continue;
                    }
                    Diagnostic {
                        kind: DiagnosticKind::SameContext,
                        property: property.clone(),
                        first,
                        second,
                        message: format!(
                            "conflicting values for \"{}\" in the same context: \"{}\" is overridden by \"{}\"",
                            property, first_value, second_value
                        ),
                    }
                } else {
                    if !kinds.contains(DiagnosticKinds::CASCADE_HAZARD) {
                        continue;
                    }
                    let ca = conditions(a);
                    let cb = conditions(b);
                    if ca.is_superset(&cb) || cb.is_superset(&ca) {
                        continue;
                    }
                    Diagnostic {
                        kind: DiagnosticKind::CascadeHazard,
                        property: property.clone(),
                        first,
                        second,
                        message: format!(
                            "cascade hazard for \"{}\": set under {} and under {}; the winner depends on rule order when both match",
                            property,
                            describe(&ca),
                            describe(&cb)
                        ),
                    }
                };

                if seen.insert(diagnostic.message.clone()) {
                    out.push(diagnostic);
                }
            }
        }
    }
    out
}
