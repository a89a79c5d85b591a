//! Utility arguments.

use std::fmt;

use crate::dynamic::DynamicValue;
use crate::rule::{Declarations, Rule};

/// A value passed to a utility function.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Num(f64),
    Str(String),
    Dynamic(DynamicValue),
}

impl Value {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Value::Dynamic(_))
    }

    /// Resolves the value as one part of a larger declaration value.
    ///
    /// Static values go through `resolve`. A dynamic value records its
    /// binding in `bindings` and yields its `var()` reference, so utilities
    /// that format several arguments into one declaration keep every binding.
    pub fn resolve_part(&self, resolve: impl FnOnce(&Value) -> String, bindings: &mut Declarations) -> String {
        match self {
            Value::Dynamic(dynamic) => {
                bindings.insert(dynamic.id().to_string(), dynamic.value().to_string());
                dynamic.var_ref()
            }
            value => resolve(value),
        }
    }

    /// Builds a rule setting every property in `properties`.
    ///
    /// Static values go through `resolve`. A dynamic value becomes a
    /// `var()` reference with the literal recorded as a binding.
    pub fn into_rule(self, properties: &[&str], resolve: impl FnOnce(&Value) -> String) -> Rule {
        let mut bindings = Declarations::new();
        let resolved = self.resolve_part(resolve, &mut bindings);
        let declarations: Declarations = properties
            .iter()
            .map(|p| (p.to_string(), resolved.clone()))
            .collect();
        Rule::with_bindings(declarations, bindings)
    }
}

/// Dynamic values display as their `var()` reference. Utilities resolve
/// them with [`Value::resolve_part`] so the binding is not lost.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Dynamic(d) => f.write_str(&d.var_ref()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<DynamicValue> for Value {
    fn from(value: DynamicValue) -> Self {
        Value::Dynamic(value)
    }
}

impl From<&DynamicValue> for Value {
    fn from(value: &DynamicValue) -> Self {
        Value::Dynamic(value.clone())
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Num(value as f64)
                }
            }
        )*
    };
}

value_from_number!(f64, f32, i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::DynamicCounter;

    #[test]
    fn static_values_resolve() {
        let rule = Value::from(4).into_rule(&["padding"], |v| format!("{}px", v));
        assert_eq!(rule.declaration("padding"), Some("4px"));
        assert!(rule.dynamic_bindings().is_none());
    }

    #[test]
    fn dynamic_values_bind() {
        let dynamic = DynamicCounter::new().wrap("--twc-d", "#3b82f6");
        let rule = Value::from(dynamic).into_rule(&["border-color", "outline-color"], |_| unreachable!());
        assert_eq!(rule.declaration("border-color"), Some("var(--twc-d0)"));
        assert_eq!(rule.declaration("outline-color"), Some("var(--twc-d0)"));
        assert_eq!(rule.dynamic_bindings().unwrap()["--twc-d0"], "#3b82f6");
    }

    #[test]
    fn parts_collect_every_binding() {
        let mut counter = DynamicCounter::new();
        let width = Value::from(counter.wrap("--twc-d", "2px"));
        let color = Value::from(counter.wrap("--twc-d", "red"));
        let mut bindings = Declarations::new();
        let value = format!(
            "{} {}",
            width.resolve_part(|v| v.to_string(), &mut bindings),
            color.resolve_part(|v| v.to_string(), &mut bindings)
        );
        assert_eq!(value, "var(--twc-d0) var(--twc-d1)");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings["--twc-d1"], "red");
    }

    #[test]
    fn numbers_display_without_trailing_zeroes() {
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
    }
}
