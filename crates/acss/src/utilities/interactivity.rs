//! Cursor, selection and accessibility helpers.

use super::{literal, rule_for};
use crate::rule::Rule;
use crate::value::Value;

pub fn cursor(value: impl Into<Value>) -> Rule {
    rule_for("cursor", value, literal)
}

pub fn select(value: impl Into<Value>) -> Rule {
    rule_for("user-select", value, literal)
}

pub fn pointer_events(value: impl Into<Value>) -> Rule {
    rule_for("pointer-events", value, literal)
}

pub fn resize(value: impl Into<Value>) -> Rule {
    rule_for("resize", value, literal)
}

pub fn appearance_none() -> Rule {
    Rule::new([("appearance", "none")])
}

/// Visually hidden but still announced by screen readers.
pub fn sr_only() -> Rule {
    Rule::new([
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("padding", "0"),
        ("margin", "-1px"),
        ("overflow", "hidden"),
        ("clip", "rect(0, 0, 0, 0)"),
        ("white-space", "nowrap"),
        ("border-width", "0"),
    ])
}

pub fn not_sr_only() -> Rule {
    Rule::new([
        ("position", "static"),
        ("width", "auto"),
        ("height", "auto"),
        ("padding", "0"),
        ("margin", "0"),
        ("overflow", "visible"),
        ("clip", "auto"),
        ("white-space", "normal"),
    ])
}
