//! Arguments accepted by chain calls.

use acss::{DynamicValue, Rule, Value};

use crate::chain::{Access, Chain};

/// One argument to a chain call: a plain value for utilities and
/// parameterized modifiers, or rules for modifier groups and merging.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Value(Value),
    Chain(Chain),
    Rule(Rule),
}

impl Arg {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Arg::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<Chain> for Arg {
    fn from(chain: Chain) -> Self {
        Arg::Chain(chain)
    }
}

impl From<&Chain> for Arg {
    fn from(chain: &Chain) -> Self {
        Arg::Chain(chain.clone())
    }
}

impl From<Access> for Arg {
    fn from(access: Access) -> Self {
        Arg::Chain(access.into_chain())
    }
}

impl From<Rule> for Arg {
    fn from(rule: Rule) -> Self {
        Arg::Rule(rule)
    }
}

macro_rules! value_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

value_args!(&str, String, &String, DynamicValue, &DynamicValue, f64, f32, i32, i64, u32, u64, usize);
