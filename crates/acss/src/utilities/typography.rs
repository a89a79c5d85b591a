//! Typography utilities.

use palette::tokens;

use super::{literal, rule_for};
use crate::rule::{Rule, combine};
use crate::value::Value;

/// Font size. Named sizes (`sm`, `lg`, `2xl`) also set their line height.
pub fn text(size: impl Into<Value>) -> Rule {
    match size.into() {
        Value::Str(name) => match tokens::text_size(&name) {
            Some(preset) => Rule::new([
                ("font-size", preset.font_size),
                ("line-height", preset.line_height),
            ]),
            None => Rule::new([("font-size", name)]),
        },
        other => rule_for("font-size", other, literal),
    }
}

/// Font weight by name (`bold`) or number (`600`).
pub fn font(weight: impl Into<Value>) -> Rule {
    rule_for("font-weight", weight, |v| match v {
        Value::Str(s) => tokens::font_weight(s),
        other => other.to_string(),
    })
}

pub fn font_family(family: impl Into<Value>) -> Rule {
    rule_for("font-family", family, |v| match v {
        Value::Str(s) => tokens::font_family(s),
        other => other.to_string(),
    })
}

pub fn tracking(value: impl Into<Value>) -> Rule {
    rule_for("letter-spacing", value, |v| match v {
        Value::Str(s) => tokens::letter_spacing(s),
        other => other.to_string(),
    })
}

pub fn leading(value: impl Into<Value>) -> Rule {
    rule_for("line-height", value, |v| match v {
        Value::Str(s) => tokens::line_height(s),
        other => other.to_string(),
    })
}

pub fn text_align(value: impl Into<Value>) -> Rule {
    rule_for("text-align", value, literal)
}

pub fn text_transform(value: impl Into<Value>) -> Rule {
    rule_for("text-transform", value, literal)
}

pub fn text_decoration(value: impl Into<Value>) -> Rule {
    rule_for("text-decoration-line", value, literal)
}

pub fn whitespace(value: impl Into<Value>) -> Rule {
    rule_for("white-space", value, literal)
}

pub fn line_clamp(lines: impl Into<Value>) -> Rule {
    let base = Rule::new([
        ("overflow", "hidden"),
        ("display", "-webkit-box"),
        ("-webkit-box-orient", "vertical"),
    ]);
    combine(&[base, rule_for("-webkit-line-clamp", lines, literal)])
}

pub fn italic() -> Rule {
    Rule::new([("font-style", "italic")])
}

pub fn not_italic() -> Rule {
    Rule::new([("font-style", "normal")])
}

pub fn truncate() -> Rule {
    Rule::new([
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ])
}

pub fn antialiased() -> Rule {
    Rule::new([
        ("-webkit-font-smoothing", "antialiased"),
        ("-moz-osx-font-smoothing", "grayscale"),
    ])
}

pub fn subpixel_antialiased() -> Rule {
    Rule::new([
        ("-webkit-font-smoothing", "auto"),
        ("-moz-osx-font-smoothing", "auto"),
    ])
}

pub fn uppercase() -> Rule {
    text_transform("uppercase")
}

pub fn tabular_nums() -> Rule {
    Rule::new([("font-variant-numeric", "tabular-nums")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_text_sizes_set_line_height() {
        let rule = text("lg");
        assert_eq!(rule.declaration("font-size"), Some("1.125rem"));
        assert_eq!(rule.declaration("line-height"), Some("1.75rem"));
        assert_eq!(text("13px").declaration("line-height"), None);
    }

    #[test]
    fn weights_by_name_or_number() {
        assert_eq!(font("thin").declaration("font-weight"), Some("100"));
        assert_eq!(font("black").declaration("font-weight"), Some("900"));
        assert_eq!(font(550).declaration("font-weight"), Some("550"));
    }

    #[test]
    fn line_clamp_accepts_numbers() {
        let rule = line_clamp(3);
        assert_eq!(rule.declaration("-webkit-line-clamp"), Some("3"));
        assert_eq!(rule.declaration("display"), Some("-webkit-box"));
    }
}
