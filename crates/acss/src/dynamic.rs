//! Runtime-bound values.
//!
//! A [`DynamicValue`] carries a literal plus a generated custom-property
//! name. Utilities that receive one emit `var(--twc-dN)` into the static
//! CSS and attach a binding `--twc-dN -> literal` to the rule. The
//! composer's dynamic variant collects those bindings into an inline style
//! map returned next to the class names.

use std::fmt;

use indexmap::IndexMap;

pub const DEFAULT_DYNAMIC_PREFIX: &str = "--twc-d";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicValue {
    value: String,
    id: String,
}

impl DynamicValue {
    pub(crate) fn new(value: String, id: String) -> Self {
        Self { value, id }
    }

    /// The literal to bind at runtime.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The custom property name, e.g. `--twc-d0`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `var(<id>)`, the form that goes into static CSS.
    pub fn var_ref(&self) -> String {
        format!("var({})", self.id)
    }
}

/// Allocates custom property names.
#[derive(Debug, Default)]
pub struct DynamicCounter {
    next: u64,
}

impl DynamicCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap(&mut self, prefix: &str, value: impl fmt::Display) -> DynamicValue {
        let id = format!("{}{}", prefix, self.next);
        self.next += 1;
        DynamicValue::new(value.to_string(), id)
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Class names plus the inline style bindings they depend on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicResult {
    pub class_name: String,
    pub style: IndexMap<String, String>,
}

impl DynamicResult {
    /// Builds a result from precomputed parts, for callers that resolved
    /// the class names ahead of time.
    pub fn from_parts(class_name: impl Into<String>, bindings: IndexMap<String, String>) -> Self {
        Self {
            class_name: class_name.into(),
            style: bindings,
        }
    }

    /// The style map as an inline `style` attribute value.
    pub fn style_attribute(&self) -> String {
        self.style
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_resettable() {
        let mut counter = DynamicCounter::new();
        let a = counter.wrap(DEFAULT_DYNAMIC_PREFIX, "#fff");
        let b = counter.wrap(DEFAULT_DYNAMIC_PREFIX, 12);
        assert_eq!(a.id(), "--twc-d0");
        assert_eq!(b.id(), "--twc-d1");
        assert_eq!(b.value(), "12");
        assert_eq!(a.var_ref(), "var(--twc-d0)");

        counter.reset();
        assert_eq!(counter.wrap("--x", 1).id(), "--x0");
    }

    #[test]
    fn from_parts_and_style_attribute() {
        let mut bindings = IndexMap::new();
        bindings.insert("--twc-d0".to_string(), "#3b82f6".to_string());
        bindings.insert("--twc-d1".to_string(), "2rem".to_string());
        let result = DynamicResult::from_parts("_abc", bindings);
        assert_eq!(result.class_name, "_abc");
        assert_eq!(result.style_attribute(), "--twc-d0: #3b82f6; --twc-d1: 2rem");
    }
}
