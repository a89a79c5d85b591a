//! Transitions and animations.
//!
//! Every `transition*` utility sets the property list together with the
//! default timing function and duration, so `duration(300)` after one of
//! them is a refinement rather than a conflict.

use palette::tokens;

use super::{literal, ms_value, rule_for};
use crate::rule::Rule;
use crate::value::Value;

pub const DEFAULT_TIMING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const DEFAULT_DURATION: &str = "150ms";

const DEFAULT_PROPERTIES: &str = "color, background-color, border-color, text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter";
const COLOR_PROPERTIES: &str = "color, background-color, border-color, text-decoration-color, fill, stroke";

fn timed(properties: &str) -> Rule {
    Rule::new([
        ("transition-property", properties),
        ("transition-timing-function", DEFAULT_TIMING),
        ("transition-duration", DEFAULT_DURATION),
    ])
}

pub fn transition() -> Rule {
    timed(DEFAULT_PROPERTIES)
}

pub fn transition_all() -> Rule {
    timed("all")
}

pub fn transition_colors() -> Rule {
    timed(COLOR_PROPERTIES)
}

pub fn transition_opacity() -> Rule {
    timed("opacity")
}

pub fn transition_shadow() -> Rule {
    timed("box-shadow")
}

pub fn transition_transform() -> Rule {
    timed("transform")
}

pub fn transition_none() -> Rule {
    Rule::new([("transition-property", "none")])
}

pub fn duration(value: impl Into<Value>) -> Rule {
    rule_for("transition-duration", value, ms_value)
}

pub fn delay(value: impl Into<Value>) -> Rule {
    rule_for("transition-delay", value, ms_value)
}

/// Timing function: `linear`, `in`, `out`, `in-out`, or a raw function.
pub fn ease(value: impl Into<Value>) -> Rule {
    rule_for("transition-timing-function", value, |v| match v.as_str() {
        Some("in") => "cubic-bezier(0.4, 0, 1, 1)".to_string(),
        Some("out") => "cubic-bezier(0, 0, 0.2, 1)".to_string(),
        Some("in-out") => DEFAULT_TIMING.to_string(),
        _ => literal(v),
    })
}

/// Animation preset (`spin`, `ping`, `pulse`, `bounce`, `none`) or a raw
/// shorthand. Presets rely on [`keyframes`] being present in the page.
pub fn animate(value: impl Into<Value>) -> Rule {
    rule_for("animation", value, |v| match v {
        Value::Str(s) => tokens::animation(s),
        other => other.to_string(),
    })
}

/// The `@keyframes` block backing an animation preset.
pub fn keyframes(name: &str) -> Option<&'static str> {
    tokens::KEYFRAMES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_carry_default_timing() {
        let rule = transition_colors();
        assert_eq!(rule.declaration("transition-property"), Some(COLOR_PROPERTIES));
        assert_eq!(rule.declaration("transition-duration"), Some("150ms"));
        assert_eq!(rule.declaration("transition-timing-function"), Some(DEFAULT_TIMING));
    }

    #[test]
    fn durations_in_milliseconds() {
        assert_eq!(duration(300).declaration("transition-duration"), Some("300ms"));
        assert_eq!(delay("1s").declaration("transition-delay"), Some("1s"));
    }

    #[test]
    fn animation_presets() {
        assert_eq!(animate("spin").declaration("animation"), Some("spin 1s linear infinite"));
        assert!(keyframes("spin").is_some());
        assert_eq!(keyframes("wobble"), None);
    }
}
