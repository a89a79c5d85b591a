//! Padding, margin, gap and child spacing.

use super::{rule_for, rule_for_all, spacing_value};
use crate::rule::Rule;
use crate::value::Value;

/// Selector template for spacing between visible children.
pub const CHILD_SPACING_TEMPLATE: &str = "& > :not([hidden]) ~ :not([hidden])";

pub fn p(value: impl Into<Value>) -> Rule {
    rule_for("padding", value, spacing_value)
}

pub fn px(value: impl Into<Value>) -> Rule {
    rule_for_all(&["padding-left", "padding-right"], value, spacing_value)
}

pub fn py(value: impl Into<Value>) -> Rule {
    rule_for_all(&["padding-top", "padding-bottom"], value, spacing_value)
}

pub fn pt(value: impl Into<Value>) -> Rule {
    rule_for("padding-top", value, spacing_value)
}

pub fn pr(value: impl Into<Value>) -> Rule {
    rule_for("padding-right", value, spacing_value)
}

pub fn pb(value: impl Into<Value>) -> Rule {
    rule_for("padding-bottom", value, spacing_value)
}

pub fn pl(value: impl Into<Value>) -> Rule {
    rule_for("padding-left", value, spacing_value)
}

pub fn ps(value: impl Into<Value>) -> Rule {
    rule_for("padding-inline-start", value, spacing_value)
}

pub fn pe(value: impl Into<Value>) -> Rule {
    rule_for("padding-inline-end", value, spacing_value)
}

pub fn m(value: impl Into<Value>) -> Rule {
    rule_for("margin", value, spacing_value)
}

pub fn mx(value: impl Into<Value>) -> Rule {
    rule_for_all(&["margin-left", "margin-right"], value, spacing_value)
}

pub fn my(value: impl Into<Value>) -> Rule {
    rule_for_all(&["margin-top", "margin-bottom"], value, spacing_value)
}

pub fn mt(value: impl Into<Value>) -> Rule {
    rule_for("margin-top", value, spacing_value)
}

pub fn mr(value: impl Into<Value>) -> Rule {
    rule_for("margin-right", value, spacing_value)
}

pub fn mb(value: impl Into<Value>) -> Rule {
    rule_for("margin-bottom", value, spacing_value)
}

pub fn ml(value: impl Into<Value>) -> Rule {
    rule_for("margin-left", value, spacing_value)
}

pub fn ms(value: impl Into<Value>) -> Rule {
    rule_for("margin-inline-start", value, spacing_value)
}

pub fn me(value: impl Into<Value>) -> Rule {
    rule_for("margin-inline-end", value, spacing_value)
}

pub fn gap(value: impl Into<Value>) -> Rule {
    rule_for("gap", value, spacing_value)
}

pub fn gap_x(value: impl Into<Value>) -> Rule {
    rule_for("column-gap", value, spacing_value)
}

pub fn gap_y(value: impl Into<Value>) -> Rule {
    rule_for("row-gap", value, spacing_value)
}

/// Horizontal space between children, applied to every child but the first.
pub fn space_x(value: impl Into<Value>) -> Rule {
    rule_for("margin-left", value, spacing_value).wrap_with_selector_template(CHILD_SPACING_TEMPLATE)
}

pub fn space_y(value: impl Into<Value>) -> Rule {
    rule_for("margin-top", value, spacing_value).wrap_with_selector_template(CHILD_SPACING_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_steps_and_raw_lengths() {
        assert_eq!(p(4).declaration("padding"), Some("1rem"));
        assert_eq!(p("3px").declaration("padding"), Some("3px"));
        assert_eq!(m("auto").declaration("margin"), Some("auto"));
    }

    #[test]
    fn axis_utilities_set_both_sides() {
        let rule = px(2);
        assert_eq!(rule.declaration("padding-left"), Some("0.5rem"));
        assert_eq!(rule.declaration("padding-right"), Some("0.5rem"));
    }

    #[test]
    fn gap_axes() {
        assert_eq!(gap_x(1).declaration("column-gap"), Some("0.25rem"));
        assert_eq!(gap_y(1).declaration("row-gap"), Some("0.25rem"));
    }

    #[test]
    fn child_spacing_uses_a_template() {
        let rule = space_x(4);
        assert_eq!(rule.selector_for("s"), ".s > :not([hidden]) ~ :not([hidden])");
    }

    #[test]
    fn child_spacing_under_modifiers() {
        use crate::modifiers::{pseudo, relational};
        use crate::when;

        let hovered = when([pseudo::HOVER]).apply(&[space_x(4)]);
        assert_eq!(hovered.selector_for("s"), ".s:hover > :not([hidden]) ~ :not([hidden])");

        let grouped = when([relational::GROUP_HOVER]).apply(&[space_y(4)]);
        assert_eq!(
            grouped.selector_for("s"),
            ".group:hover .s > :not([hidden]) ~ :not([hidden])"
        );
        assert_eq!(grouped.declaration("margin-top"), Some("1rem"));
    }
}
