//! The style rule value type.
//!
//! A [`Rule`] is a set of CSS declarations plus the context it renders in:
//! selector suffixes, an optional selector template, media and feature
//! queries. Every operation here returns a new rule; nothing is mutated
//! after construction.
//!
//! ## Rendering
//!
//! ```text
//! .cls:hover { ... }                   selectors appended to the class
//! .group:hover .cls { ... }            template with `&` replaced by the class
//! .cls:hover > * + * { ... }          templates keep suffixes and nest
//! @media q { @supports s { ... } }     supports wraps first, media outermost
//! ```

use indexmap::IndexMap;

/// Ordered CSS property -> value map.
pub type Declarations = IndexMap<String, String>;

/// Placeholder in a selector template that stands for the generated class.
pub const TEMPLATE_PLACEHOLDER: char = '&';

/// CSS declarations plus the selector and query context they render in.
///
/// Built by utility functions, wrapped by modifiers, registered by the
/// composer under a generated class name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    declarations: Declarations,
    selectors: Vec<String>,
    selector_template: Option<String>,
    media_queries: Vec<String>,
    supports_queries: Vec<String>,
    dynamic_bindings: Option<Declarations>,
    pinned_layer: Option<u64>,
}

impl Rule {
    /// Creates a rule from `(property, value)` pairs. Later pairs overwrite
    /// earlier ones with the same property.
    pub fn new<K, V>(declarations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            declarations: declarations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Creates a rule whose declarations reference runtime-bound custom
    /// properties listed in `bindings`.
    pub fn with_bindings(declarations: Declarations, bindings: Declarations) -> Self {
        Self {
            declarations,
            dynamic_bindings: if bindings.is_empty() { None } else { Some(bindings) },
            ..Self::default()
        }
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn selector_template(&self) -> Option<&str> {
        self.selector_template.as_deref()
    }

    pub fn media_queries(&self) -> &[String] {
        &self.media_queries
    }

    pub fn supports_queries(&self) -> &[String] {
        &self.supports_queries
    }

    pub fn dynamic_bindings(&self) -> Option<&Declarations> {
        self.dynamic_bindings.as_ref()
    }

    /// The explicit layer set by [`crate::layer::layer`], if any.
    pub fn pinned_layer(&self) -> Option<u64> {
        self.pinned_layer
    }

    /// True when the rule has neither declarations nor dynamic bindings.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.dynamic_bindings.is_none()
    }

    /// Appends a selector suffix (`:hover`, `::before`, `[data-x]`).
    ///
    /// A templated rule also gets the suffix on every placeholder, so
    /// `& > *` becomes `&:hover > *`.
    pub fn wrap_with_selector(&self, selector: impl Into<String>) -> Rule {
        let selector = selector.into();
        let mut rule = self.clone();
        if let Some(template) = &self.selector_template {
            let compound = format!("{}{}", TEMPLATE_PLACEHOLDER, selector);
            rule.selector_template = Some(template.replace(TEMPLATE_PLACEHOLDER, &compound));
        }
        rule.selectors.push(selector);
        rule
    }

    /// Wraps the rule's current selector pattern in `template`.
    ///
    /// The placeholder in `template` stands for everything the rule already
    /// matches: its own template if it has one, otherwise the class plus its
    /// suffixes. `.group:hover &` around `& > *` gives `.group:hover & > *`.
    pub fn wrap_with_selector_template(&self, template: impl Into<String>) -> Rule {
        let template = template.into();
        let inner = match &self.selector_template {
            Some(existing) => existing.clone(),
            None => {
                let mut compound = TEMPLATE_PLACEHOLDER.to_string();
                for suffix in &self.selectors {
                    compound.push_str(suffix);
                }
                compound
            }
        };
        let mut rule = self.clone();
        rule.selector_template = Some(template.replace(TEMPLATE_PLACEHOLDER, &inner));
        rule
    }

    pub fn wrap_with_media_query(&self, query: impl Into<String>) -> Rule {
        let mut rule = self.clone();
        rule.media_queries.push(query.into());
        rule
    }

    pub fn wrap_with_supports_query(&self, query: impl Into<String>) -> Rule {
        let mut rule = self.clone();
        rule.supports_queries.push(query.into());
        rule
    }

    /// Returns a copy with `property` declared first, unless the rule
    /// already declares it.
    pub fn with_default_declaration(&self, property: &str, value: &str) -> Rule {
        if self.declarations.contains_key(property) {
            return self.clone();
        }
        let mut declarations = Declarations::with_capacity(self.declarations.len() + 1);
        declarations.insert(property.to_string(), value.to_string());
        declarations.extend(self.declarations.iter().map(|(k, v)| (k.clone(), v.clone())));
        Rule {
            declarations,
            ..self.clone()
        }
    }

    pub(crate) fn with_pinned_layer(self, layer: u64) -> Rule {
        Rule {
            pinned_layer: Some(layer),
            ..self
        }
    }

    /// The selector this rule renders under for `class_name`.
    ///
    /// A template already carries the suffixes, so only the placeholder is
    /// substituted.
    pub fn selector_for(&self, class_name: &str) -> String {
        let class_selector = format!(".{}", class_name);
        match &self.selector_template {
            Some(template) => template.replace(TEMPLATE_PLACEHOLDER, &class_selector),
            None => {
                let mut selector = class_selector;
                for suffix in &self.selectors {
                    selector.push_str(suffix);
                }
                selector
            }
        }
    }

    /// Renders the rule as a CSS block for `class_name`.
    pub fn render(&self, class_name: &str) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(property, value)| format!("  {}: {};", property, value))
            .collect::<Vec<_>>()
            .join("\n");

        let mut css = format!("{} {{\n{}\n}}", self.selector_for(class_name), body);
        for query in &self.supports_queries {
            css = format!("@supports {} {{\n{}\n}}", query, css);
        }
        for query in &self.media_queries {
            css = format!("@media {} {{\n{}\n}}", query, css);
        }
        css
    }
}

impl<K, V> FromIterator<(K, V)> for Rule
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Rule::new(iter)
    }
}

fn push_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}

/// Merges rules into one.
///
/// Declarations and dynamic bindings are last-write-wins. Selectors, media
/// and supports queries are unioned in first-seen order. The first selector
/// template and the first pinned layer encountered are kept.
pub fn combine<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Rule {
    let mut merged = Rule::default();
    for rule in rules {
        for (property, value) in &rule.declarations {
            merged.declarations.insert(property.clone(), value.clone());
        }
        push_unique(&mut merged.selectors, &rule.selectors);
        push_unique(&mut merged.media_queries, &rule.media_queries);
        push_unique(&mut merged.supports_queries, &rule.supports_queries);
        if merged.selector_template.is_none() {
            merged.selector_template = rule.selector_template.clone();
        }
        if let Some(bindings) = &rule.dynamic_bindings {
            merged
                .dynamic_bindings
                .get_or_insert_with(Declarations::new)
                .extend(bindings.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if merged.pinned_layer.is_none() {
            merged.pinned_layer = rule.pinned_layer;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_unions_distinct_properties() {
        let merged = combine(&[Rule::new([("padding", "1rem")]), Rule::new([("color", "red")])]);
        let expected: Declarations = [("padding", "1rem"), ("color", "red")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(merged.declarations(), &expected);
    }

    #[test]
    fn combine_last_declaration_wins() {
        let merged = combine(&[Rule::new([("padding", "1rem")]), Rule::new([("padding", "2rem")])]);
        assert_eq!(merged.declarations().len(), 1);
        assert_eq!(merged.declaration("padding"), Some("2rem"));
    }

    #[test]
    fn combine_dedups_context() {
        let a = Rule::new([("color", "red")]).wrap_with_selector(":hover");
        let b = Rule::new([("color", "blue")])
            .wrap_with_selector(":hover")
            .wrap_with_media_query("print");
        let merged = combine(&[a, b]);
        assert_eq!(merged.selectors(), [":hover"]);
        assert_eq!(merged.media_queries(), ["print"]);
    }

    #[test]
    fn wrapping_leaves_the_original_untouched() {
        let base = Rule::new([("color", "red")]);
        let hovered = base.wrap_with_selector(":hover");
        assert!(base.selectors().is_empty());
        assert_eq!(hovered.selectors(), [":hover"]);
    }

    #[test]
    fn default_declaration_goes_first_and_never_overrides() {
        let rule = Rule::new([("color", "red")]).with_default_declaration("content", "\"\"");
        assert_eq!(rule.declarations().keys().next().map(String::as_str), Some("content"));

        let own = Rule::new([("content", "\"x\"")]).with_default_declaration("content", "\"\"");
        assert_eq!(own.declaration("content"), Some("\"x\""));
    }

    #[test]
    fn template_replaces_every_placeholder() {
        let rule = Rule::new([("margin", "0")]).wrap_with_selector_template("& > :not([hidden]) ~ &");
        assert_eq!(rule.selector_for("x"), ".x > :not([hidden]) ~ .x");
    }

    #[test]
    fn suffixes_before_a_template_stay_on_the_class() {
        let rule = Rule::new([("color", "red")])
            .wrap_with_selector(":hover")
            .wrap_with_selector_template(".group &");
        assert_eq!(rule.selector_template(), Some(".group &:hover"));
        assert_eq!(rule.selector_for("x"), ".group .x:hover");
    }

    #[test]
    fn suffixes_after_a_template_attach_to_every_placeholder() {
        let rule = Rule::new([("margin", "0")])
            .wrap_with_selector_template("& > :not([hidden]) ~ &")
            .wrap_with_selector(":focus");
        assert_eq!(rule.selectors(), [":focus"]);
        assert_eq!(rule.selector_for("x"), ".x:focus > :not([hidden]) ~ .x:focus");
    }

    #[test]
    fn templates_compose_outer_around_inner() {
        let rule = Rule::new([("margin-left", "1rem")])
            .wrap_with_selector_template("& > :not([hidden]) ~ :not([hidden])")
            .wrap_with_selector_template(".group:hover &");
        assert_eq!(
            rule.selector_for("x"),
            ".group:hover .x > :not([hidden]) ~ :not([hidden])"
        );
    }

    #[test]
    fn render_nests_supports_inside_media() {
        let rule = Rule::new([("display", "grid")])
            .wrap_with_supports_query("(display: grid)")
            .wrap_with_media_query("(min-width: 640px)");
        insta::assert_snapshot!(rule.render("_a"), @r"
        @media (min-width: 640px) {
        @supports (display: grid) {
        ._a {
          display: grid;
        }
        }
        }
        ");
    }

    #[test]
    fn empty_rule_renders_an_empty_block() {
        let rule = Rule::default();
        assert!(rule.is_empty());
        assert_eq!(rule.render("_e"), "._e {\n\n}");
    }
}
