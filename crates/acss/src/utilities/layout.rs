//! Display, flex and grid, sizing, positioning.

use super::{literal, rule_for, rule_for_all, spacing_value};
use crate::rule::Rule;
use crate::value::Value;

pub fn flex() -> Rule {
    Rule::new([("display", "flex")])
}

pub fn flex_col() -> Rule {
    Rule::new([("display", "flex"), ("flex-direction", "column")])
}

pub fn flex_row() -> Rule {
    Rule::new([("display", "flex"), ("flex-direction", "row")])
}

pub fn flex_wrap() -> Rule {
    Rule::new([("flex-wrap", "wrap")])
}

pub fn flex_nowrap() -> Rule {
    Rule::new([("flex-wrap", "nowrap")])
}

pub fn inline_flex() -> Rule {
    Rule::new([("display", "inline-flex")])
}

pub fn flex_1() -> Rule {
    Rule::new([("flex", "1 1 0%")])
}

pub fn flex_auto() -> Rule {
    Rule::new([("flex", "1 1 auto")])
}

pub fn flex_none() -> Rule {
    Rule::new([("flex", "none")])
}

pub fn grow(value: impl Into<Value>) -> Rule {
    rule_for("flex-grow", value, literal)
}

pub fn shrink(value: impl Into<Value>) -> Rule {
    rule_for("flex-shrink", value, literal)
}

pub fn order(value: impl Into<Value>) -> Rule {
    rule_for("order", value, literal)
}

pub fn grid() -> Rule {
    Rule::new([("display", "grid")])
}

pub fn grid_cols(count: impl Into<Value>) -> Rule {
    rule_for("grid-template-columns", count, repeat_tracks)
}

pub fn grid_rows(count: impl Into<Value>) -> Rule {
    rule_for("grid-template-rows", count, repeat_tracks)
}

fn repeat_tracks(value: &Value) -> String {
    match value {
        Value::Num(n) => format!("repeat({}, minmax(0, 1fr))", n),
        other => other.to_string(),
    }
}

pub fn col_span(count: impl Into<Value>) -> Rule {
    rule_for("grid-column", count, |v| match v {
        Value::Num(n) => format!("span {} / span {}", n, n),
        other => other.to_string(),
    })
}

pub fn w(value: impl Into<Value>) -> Rule {
    rule_for("width", value, spacing_value)
}

pub fn h(value: impl Into<Value>) -> Rule {
    rule_for("height", value, size_height)
}

/// Height keeps `screen` vertical.
fn size_height(value: &Value) -> String {
    match value {
        Value::Str(s) if s == "screen" => "100vh".to_string(),
        other => spacing_value(other),
    }
}

pub fn size(value: impl Into<Value>) -> Rule {
    rule_for_all(&["width", "height"], value, spacing_value)
}

pub fn min_w(value: impl Into<Value>) -> Rule {
    rule_for("min-width", value, spacing_value)
}

pub fn min_h(value: impl Into<Value>) -> Rule {
    rule_for("min-height", value, size_height)
}

pub fn max_w(value: impl Into<Value>) -> Rule {
    rule_for("max-width", value, spacing_value)
}

pub fn max_h(value: impl Into<Value>) -> Rule {
    rule_for("max-height", value, size_height)
}

pub fn display(value: impl Into<Value>) -> Rule {
    rule_for("display", value, literal)
}

pub fn hidden() -> Rule {
    Rule::new([("display", "none")])
}

pub fn block() -> Rule {
    Rule::new([("display", "block")])
}

pub fn items(value: impl Into<Value>) -> Rule {
    rule_for("align-items", value, align_keyword)
}

pub fn justify(value: impl Into<Value>) -> Rule {
    rule_for("justify-content", value, align_keyword)
}

pub fn self_align(value: impl Into<Value>) -> Rule {
    rule_for("align-self", value, align_keyword)
}

/// `start`/`end` map to their flex keywords; `between`/`around`/`evenly`
/// to the space-* distributions.
fn align_keyword(value: &Value) -> String {
    match value.as_str() {
        Some("start") => "flex-start".to_string(),
        Some("end") => "flex-end".to_string(),
        Some("between") => "space-between".to_string(),
        Some("around") => "space-around".to_string(),
        Some("evenly") => "space-evenly".to_string(),
        _ => value.to_string(),
    }
}

pub fn overflow(value: impl Into<Value>) -> Rule {
    rule_for("overflow", value, literal)
}

pub fn overflow_x(value: impl Into<Value>) -> Rule {
    rule_for("overflow-x", value, literal)
}

pub fn overflow_y(value: impl Into<Value>) -> Rule {
    rule_for("overflow-y", value, literal)
}

pub fn relative() -> Rule {
    Rule::new([("position", "relative")])
}

pub fn absolute() -> Rule {
    Rule::new([("position", "absolute")])
}

pub fn fixed() -> Rule {
    Rule::new([("position", "fixed")])
}

pub fn sticky() -> Rule {
    Rule::new([("position", "sticky")])
}

pub fn static_position() -> Rule {
    Rule::new([("position", "static")])
}

pub fn top(value: impl Into<Value>) -> Rule {
    rule_for("top", value, spacing_value)
}

pub fn right(value: impl Into<Value>) -> Rule {
    rule_for("right", value, spacing_value)
}

pub fn bottom(value: impl Into<Value>) -> Rule {
    rule_for("bottom", value, spacing_value)
}

pub fn left(value: impl Into<Value>) -> Rule {
    rule_for("left", value, spacing_value)
}

pub fn inset(value: impl Into<Value>) -> Rule {
    rule_for("inset", value, spacing_value)
}

pub fn z(value: impl Into<Value>) -> Rule {
    rule_for("z-index", value, literal)
}

pub fn aspect_ratio(value: impl Into<Value>) -> Rule {
    rule_for("aspect-ratio", value, |v| match v.as_str() {
        Some("square") => "1 / 1".to_string(),
        Some("video") => "16 / 9".to_string(),
        _ => v.to_string(),
    })
}

pub fn visible() -> Rule {
    Rule::new([("visibility", "visible")])
}

pub fn invisible() -> Rule {
    Rule::new([("visibility", "hidden")])
}

pub fn isolate() -> Rule {
    Rule::new([("isolation", "isolate")])
}

pub fn container() -> Rule {
    Rule::new([("width", "100%")])
}

pub fn box_border() -> Rule {
    Rule::new([("box-sizing", "border-box")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flex_column_sets_display_and_direction() {
        let rule = flex_col();
        assert_eq!(rule.declaration("display"), Some("flex"));
        assert_eq!(rule.declaration("flex-direction"), Some("column"));
    }

    #[test]
    fn grid_tracks() {
        assert_eq!(
            grid_cols(3).declaration("grid-template-columns"),
            Some("repeat(3, minmax(0, 1fr))")
        );
        assert_eq!(grid_cols("200px 1fr").declaration("grid-template-columns"), Some("200px 1fr"));
    }

    #[test]
    fn sizes_resolve_named_values() {
        assert_eq!(w("full").declaration("width"), Some("100%"));
        assert_eq!(h("screen").declaration("height"), Some("100vh"));
        assert_eq!(w(16).declaration("width"), Some("4rem"));
    }

    #[test]
    fn alignment_shorthands() {
        assert_eq!(justify("between").declaration("justify-content"), Some("space-between"));
        assert_eq!(items("center").declaration("align-items"), Some("center"));
    }

    #[test]
    fn z_index_is_literal() {
        assert_eq!(z(10).declaration("z-index"), Some("10"));
    }
}
