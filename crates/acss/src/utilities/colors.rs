//! Color utilities.

use super::{color_value, rule_for};
use crate::rule::Rule;
use crate::value::Value;

pub fn bg(color: impl Into<Value>) -> Rule {
    rule_for("background-color", color, color_value)
}

pub fn text_color(color: impl Into<Value>) -> Rule {
    rule_for("color", color, color_value)
}

pub fn border_color(color: impl Into<Value>) -> Rule {
    rule_for("border-color", color, color_value)
}

/// A background color at `opacity` percent.
pub fn bg_opacity(color: &str, opacity: f64) -> Rule {
    Rule::new([(
        "background-color",
        palette::resolve_color_with_opacity(color, opacity),
    )])
}
