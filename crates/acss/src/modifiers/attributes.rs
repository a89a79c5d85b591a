//! Attribute selectors and parameterized modifiers.

use super::Modifier;

pub const ARIA_CHECKED: Modifier = Modifier::selector("[aria-checked=\"true\"]");
pub const ARIA_DISABLED: Modifier = Modifier::selector("[aria-disabled=\"true\"]");
pub const ARIA_EXPANDED: Modifier = Modifier::selector("[aria-expanded=\"true\"]");
pub const ARIA_HIDDEN: Modifier = Modifier::selector("[aria-hidden=\"true\"]");
pub const ARIA_PRESSED: Modifier = Modifier::selector("[aria-pressed=\"true\"]");
pub const ARIA_READONLY: Modifier = Modifier::selector("[aria-readonly=\"true\"]");
pub const ARIA_REQUIRED: Modifier = Modifier::selector("[aria-required=\"true\"]");
pub const ARIA_SELECTED: Modifier = Modifier::selector("[aria-selected=\"true\"]");

/// `:has(<selector>)` on the element itself.
pub fn has(selector: &str) -> Modifier {
    Modifier::Selector(format!(":has({})", selector).into())
}

/// `[aria-<attr>]`; pass `sort="ascending"` to match a value.
pub fn aria(attr: &str) -> Modifier {
    Modifier::Selector(format!("[aria-{}]", attr).into())
}

/// `[data-<attr>]`; pass `state="open"` to match a value.
pub fn data(attr: &str) -> Modifier {
    Modifier::Selector(format!("[data-{}]", attr).into())
}

/// Wraps the rule in `@supports <query>`.
pub fn supports(query: &str) -> Modifier {
    Modifier::Supports(query.to_string().into())
}

/// Matches when a `.group` ancestor contains `selector`.
pub fn group_has(selector: &str) -> Modifier {
    Modifier::Template(format!(".group:has({}) &", selector).into())
}

/// Matches when a preceding `.peer` sibling contains `selector`.
pub fn peer_has(selector: &str) -> Modifier {
    Modifier::Template(format!(".peer:has({}) ~ &", selector).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn parameterized_selectors() {
        let rule = Rule::new([("opacity", "1")]);
        assert_eq!(has("img").apply(&rule).selector_for("c"), ".c:has(img)");
        assert_eq!(aria("sort=\"ascending\"").apply(&rule).selector_for("c"), ".c[aria-sort=\"ascending\"]");
        assert_eq!(group_has(".error").apply(&rule).selector_for("c"), ".group:has(.error) .c");
        assert_eq!(peer_has(":checked").apply(&rule).selector_for("c"), ".peer:has(:checked) ~ .c");
    }

    #[test]
    fn supports_adds_a_feature_query() {
        let rule = supports("(display: grid)").apply(&Rule::new([("display", "grid")]));
        assert_eq!(rule.supports_queries(), ["(display: grid)"]);
    }
}
