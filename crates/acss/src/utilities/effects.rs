//! Shadows, opacity, filters and blending.

use palette::tokens;

use super::{color_value, literal, rule_for};
use crate::rule::Rule;
use crate::value::Value;

pub const DEFAULT_SHADOW: &str = "DEFAULT";

/// Box shadow by preset name (`sm`, `lg`, `none`) or a raw shadow list.
pub fn shadow(value: impl Into<Value>) -> Rule {
    rule_for("box-shadow", value, |v| match v {
        Value::Str(s) => tokens::shadow(s),
        other => other.to_string(),
    })
}

pub fn shadow_color(color: impl Into<Value>) -> Rule {
    rule_for("--twc-shadow-color", color, color_value)
}

/// Opacity as a fraction (`0.5`) or percent (`50`).
pub fn opacity(value: impl Into<Value>) -> Rule {
    rule_for("opacity", value, |v| match v {
        Value::Num(n) if *n > 1.0 => format!("{}", n / 100.0),
        other => other.to_string(),
    })
}

pub fn backdrop(filter: impl Into<Value>) -> Rule {
    rule_for("backdrop-filter", filter, literal)
}

pub fn blur(radius: impl Into<Value>) -> Rule {
    rule_for("filter", radius, |v| match v {
        Value::Num(n) => format!("blur({}px)", n),
        other => format!("blur({})", other),
    })
}

pub fn filter(value: impl Into<Value>) -> Rule {
    rule_for("filter", value, literal)
}

pub fn mix_blend_mode(mode: impl Into<Value>) -> Rule {
    rule_for("mix-blend-mode", mode, literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_presets() {
        assert_eq!(shadow("none").declaration("box-shadow"), Some("0 0 #0000"));
        assert_eq!(
            shadow("0 0 2px red").declaration("box-shadow"),
            Some("0 0 2px red")
        );
        assert!(shadow(DEFAULT_SHADOW).declaration("box-shadow").unwrap().starts_with("0 1px 3px"));
    }

    #[test]
    fn opacity_accepts_percent() {
        assert_eq!(opacity(50).declaration("opacity"), Some("0.5"));
        assert_eq!(opacity(0.25).declaration("opacity"), Some("0.25"));
    }

    #[test]
    fn blur_wraps_lengths() {
        assert_eq!(blur(4).declaration("filter"), Some("blur(4px)"));
        assert_eq!(blur("1rem").declaration("filter"), Some("blur(1rem)"));
    }
}
