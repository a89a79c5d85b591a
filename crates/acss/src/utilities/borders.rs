//! Border radius, border width, rings and outlines.
//!
//! Radius utilities take a token from `palette::tokens::RADII` (`"DEFAULT"`
//! is 0.25rem) or a raw length. Width utilities turn bare numbers into
//! pixels and always declare a solid style.

use palette::tokens;

use super::{color_value, px_value, rule_for, rule_for_all};
use crate::rule::{Declarations, Rule, combine};
use crate::value::Value;

pub const DEFAULT_RADIUS: &str = "DEFAULT";
pub const DEFAULT_BORDER_WIDTH: &str = "1px";
pub const DEFAULT_RING_WIDTH: &str = "3px";
pub const DEFAULT_RING_COLOR: &str = "#3b82f6";

fn radius_value(value: &Value) -> String {
    match value {
        Value::Str(s) => tokens::radius(s),
        other => px_value(other),
    }
}

pub fn rounded(value: impl Into<Value>) -> Rule {
    rule_for("border-radius", value, radius_value)
}

pub fn rounded_t(value: impl Into<Value>) -> Rule {
    rule_for_all(&["border-top-left-radius", "border-top-right-radius"], value, radius_value)
}

pub fn rounded_r(value: impl Into<Value>) -> Rule {
    rule_for_all(&["border-top-right-radius", "border-bottom-right-radius"], value, radius_value)
}

pub fn rounded_b(value: impl Into<Value>) -> Rule {
    rule_for_all(&["border-bottom-left-radius", "border-bottom-right-radius"], value, radius_value)
}

pub fn rounded_l(value: impl Into<Value>) -> Rule {
    rule_for_all(&["border-top-left-radius", "border-bottom-left-radius"], value, radius_value)
}

fn solid(width: Rule) -> Rule {
    combine(&[width, Rule::new([("border-style", "solid")])])
}

pub fn border(width: impl Into<Value>) -> Rule {
    solid(rule_for("border-width", width, px_value))
}

pub fn border_t(width: impl Into<Value>) -> Rule {
    solid(rule_for("border-top-width", width, px_value))
}

pub fn border_r(width: impl Into<Value>) -> Rule {
    solid(rule_for("border-right-width", width, px_value))
}

pub fn border_b(width: impl Into<Value>) -> Rule {
    solid(rule_for("border-bottom-width", width, px_value))
}

pub fn border_l(width: impl Into<Value>) -> Rule {
    solid(rule_for("border-left-width", width, px_value))
}

pub fn border_x(width: impl Into<Value>) -> Rule {
    solid(rule_for_all(&["border-left-width", "border-right-width"], width, px_value))
}

pub fn border_y(width: impl Into<Value>) -> Rule {
    solid(rule_for_all(&["border-top-width", "border-bottom-width"], width, px_value))
}

pub fn border_style(style: impl Into<Value>) -> Rule {
    rule_for("border-style", style, super::literal)
}

/// A focus ring drawn with `box-shadow`.
pub fn ring(width: impl Into<Value>, color: impl Into<Value>) -> Rule {
    let mut bindings = Declarations::new();
    let width = width.into().resolve_part(px_value, &mut bindings);
    let color = color.into().resolve_part(color_value, &mut bindings);
    let mut declarations = Declarations::new();
    declarations.insert("box-shadow".to_string(), format!("0 0 0 {} {}", width, color));
    Rule::with_bindings(declarations, bindings)
}

pub fn ring_color(color: impl Into<Value>) -> Rule {
    rule_for("--twc-ring-color", color, color_value)
}

pub fn outline_none() -> Rule {
    Rule::new([("outline", "2px solid transparent"), ("outline-offset", "2px")])
}

pub fn outline(width: impl Into<Value>) -> Rule {
    combine(&[
        rule_for("outline-width", width, px_value),
        Rule::new([("outline-style", "solid")]),
    ])
}

pub fn outline_color(color: impl Into<Value>) -> Rule {
    rule_for("outline-color", color, color_value)
}

pub fn outline_offset(offset: impl Into<Value>) -> Rule {
    rule_for("outline-offset", offset, px_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_radius() {
        assert_eq!(rounded(DEFAULT_RADIUS).declaration("border-radius"), Some("0.25rem"));
        assert_eq!(rounded("full").declaration("border-radius"), Some("9999px"));
        assert_eq!(rounded("3px").declaration("border-radius"), Some("3px"));
    }

    #[test]
    fn borders_are_solid() {
        let rule = border(DEFAULT_BORDER_WIDTH);
        assert_eq!(rule.declaration("border-width"), Some("1px"));
        assert_eq!(rule.declaration("border-style"), Some("solid"));
        assert_eq!(border(2).declaration("border-width"), Some("2px"));
    }

    #[test]
    fn ring_defaults() {
        let rule = ring(DEFAULT_RING_WIDTH, DEFAULT_RING_COLOR);
        assert_eq!(rule.declaration("box-shadow"), Some("0 0 0 3px #3b82f6"));
        assert_eq!(ring(2, "red-500").declaration("box-shadow"), Some("0 0 0 2px #ef4444"));
    }

    #[test]
    fn dynamic_ring_parts_keep_their_bindings() {
        let mut session = crate::Session::new();
        let width = session.dynamic("4px");
        let result = session.dcx([ring(&width, "red-500")]);
        assert_eq!(result.style.len(), 1);
        assert_eq!(result.style[width.id()], "4px");

        let css = session.generate_css();
        assert!(css.contains("box-shadow: 0 0 0 var(--twc-d0) #ef4444;"));

        let color = session.dynamic("#000");
        let both = ring(&width, &color);
        let bindings = both.dynamic_bindings().unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[color.id()], "#000");
    }
}
