//! The chain builder.
//!
//! A [`Chain`] holds the items accumulated so far plus the modifiers waiting
//! for the next utility. Chains are values: every access returns a new
//! chain and leaves the one it came from untouched, so two branches taken
//! from a shared prefix never see each other's rules.
//!
//! ```
//! use acss::Session;
//! use fluent::tw;
//!
//! let mut session = Session::new();
//! let card = tw()
//!     .get("flex")
//!     .get("p")
//!     .call([4])
//!     .get("hover")
//!     .get("bg")
//!     .call(["blue-500"]);
//!
//! let class = card.resolve_in(&mut session);
//! assert_eq!(class.split(' ').count(), 3);
//! ```

use std::fmt;

use acss::modifiers::{Modifier, ParamModifier};
use acss::{DynamicResult, Item, Rule, Session, Value, apply_modifiers};

use crate::arg::Arg;
use crate::dispatch::{self, Handler, Utility};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    items: Vec<Item>,
    pending: Vec<Modifier>,
}

/// An empty chain.
pub fn tw() -> Chain {
    Chain::new()
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Modifiers that will wrap the next utility.
    pub fn pending(&self) -> &[Modifier] {
        &self.pending
    }

    /// Accesses `name`: a style, modifier, utility or raw class.
    pub fn get(&self, name: &str) -> Access {
        match dispatch::lookup(name) {
            Some(Handler::Style(style)) => {
                log::trace!("chain: style {}", name);
                Access::Chain(self.with_rule(style()))
            }
            Some(Handler::Raw(class)) => {
                log::trace!("chain: raw class {}", class);
                Access::Chain(self.with_class(class))
            }
            Some(Handler::Modifier(modifier)) => {
                log::trace!("chain: modifier {}", name);
                Access::Modifier {
                    base: self.clone(),
                    modifier,
                }
            }
            Some(Handler::ParamModifier(modifier)) => {
                log::trace!("chain: parameterized modifier {}", name);
                Access::ParamModifier {
                    base: self.clone(),
                    modifier,
                }
            }
            Some(Handler::Utility(utility)) => {
                log::trace!("chain: utility {}", name);
                Access::Utility {
                    base: self.clone(),
                    utility,
                }
            }
            None => {
                log::trace!("chain: unknown name {} used as a class", name);
                Access::Chain(self.with_class(name))
            }
        }
    }

    /// Shorthand for `self.get(name).call(args)`.
    pub fn call<A>(&self, name: &str, args: impl IntoIterator<Item = A>) -> Chain
    where
        A: Into<Arg>,
    {
        self.get(name).call(args)
    }

    /// Calls the chain itself: the rules of every chain or rule argument are
    /// appended, string arguments become raw classes. Pending modifiers are
    /// kept.
    pub fn merge<A>(&self, args: impl IntoIterator<Item = A>) -> Chain
    where
        A: Into<Arg>,
    {
        let mut next = self.clone();
        for arg in args {
            match arg.into() {
                Arg::Chain(chain) => next.items.extend(chain.items),
                Arg::Rule(rule) => next.items.push(Item::Rule(rule)),
                Arg::Value(value) => next.items.push(Item::Class(value.to_string())),
            }
        }
        next
    }

    /// Adds `rule` with the pending modifiers applied, clearing them.
    pub fn with(&self, rule: Rule) -> Chain {
        self.with_rule(rule)
    }

    fn with_rule(&self, rule: Rule) -> Chain {
        let mut items = self.items.clone();
        items.push(Item::Rule(apply_modifiers(&rule, &self.pending)));
        Chain {
            items,
            pending: Vec::new(),
        }
    }

    fn with_class(&self, class: &str) -> Chain {
        let mut items = self.items.clone();
        items.push(Item::Class(class.to_string()));
        Chain {
            items,
            pending: Vec::new(),
        }
    }

    fn with_pending(&self, modifier: Modifier) -> Chain {
        let mut pending = self.pending.clone();
        pending.push(modifier);
        Chain {
            items: self.items.clone(),
            pending,
        }
    }

    /// Composes the chain on the global session.
    pub fn resolve(&self) -> String {
        acss::cx(self.items.iter().cloned())
    }

    pub fn resolve_in(&self, session: &mut Session) -> String {
        session.cx(self.items.iter().cloned())
    }

    /// Composes the chain on the global session, collecting dynamic
    /// bindings.
    pub fn resolve_dynamic(&self) -> DynamicResult {
        acss::dcx(self.items.iter().cloned())
    }

    pub fn resolve_dynamic_in(&self, session: &mut Session) -> DynamicResult {
        session.dcx(self.items.iter().cloned())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl From<Rule> for Chain {
    fn from(rule: Rule) -> Self {
        Chain::new().with(rule)
    }
}

/// The result of accessing a name on a chain.
///
/// Modifiers and utilities behave differently depending on whether they
/// are called or chained through, so an access stays unresolved until one
/// of [`call`](Access::call), [`get`](Access::get) or
/// [`into_chain`](Access::into_chain) decides.
#[derive(Clone, Debug)]
pub enum Access {
    Chain(Chain),
    Modifier { base: Chain, modifier: Modifier },
    ParamModifier { base: Chain, modifier: ParamModifier },
    Utility { base: Chain, utility: Utility },
}

impl Access {
    /// Calls the accessed name with `args`.
    ///
    /// - A chain merges its arguments (see [`Chain::merge`]).
    /// - A modifier wraps every rule of its chain and rule arguments with the
    ///   pending modifiers plus itself, then clears the pending list.
    /// - A parameterized modifier builds itself from the first argument and
    ///   becomes pending.
    /// - A utility builds its rule from the value arguments.
    pub fn call<A>(self, args: impl IntoIterator<Item = A>) -> Chain
    where
        A: Into<Arg>,
    {
        match self {
            Access::Chain(chain) => chain.merge(args),
            Access::Modifier { base, modifier } => {
                let mut modifiers = base.pending.clone();
                modifiers.push(modifier.clone());

                let mut grouped = Vec::new();
                for arg in args {
                    match arg.into() {
                        Arg::Chain(chain) => grouped.extend(chain.items),
                        Arg::Rule(rule) => grouped.push(Item::Rule(rule)),
                        Arg::Value(_) => {}
                    }
                }
                if grouped.is_empty() {
                    return base.with_pending(modifier);
                }

                let mut items = base.items;
                items.extend(grouped.into_iter().map(|item| match item {
                    Item::Rule(rule) => Item::Rule(apply_modifiers(&rule, &modifiers)),
                    class => class,
                }));
                Chain {
                    items,
                    pending: Vec::new(),
                }
            }
            Access::ParamModifier { base, modifier } => {
                let values: Vec<Value> = args
                    .into_iter()
                    .filter_map(|arg| match arg.into() {
                        Arg::Value(value) => Some(value),
                        _ => None,
                    })
                    .collect();
                match values.first() {
                    Some(value) => base.with_pending(modifier(&value.to_string())),
                    None => base,
                }
            }
            Access::Utility { base, utility } => {
                let values: Vec<Value> = args
                    .into_iter()
                    .filter_map(|arg| match arg.into() {
                        Arg::Value(value) => Some(value),
                        _ => None,
                    })
                    .collect();
                base.with_rule(utility(&values))
            }
        }
    }

    /// Chains through the access without calling it.
    pub fn get(self, name: &str) -> Access {
        self.into_chain().get(name)
    }

    /// Settles the access without a call: a modifier becomes pending and a
    /// utility runs with no arguments.
    pub fn into_chain(self) -> Chain {
        match self {
            Access::Chain(chain) => chain,
            Access::Modifier { base, modifier } => base.with_pending(modifier),
            Access::ParamModifier { base, .. } => base,
            Access::Utility { base, utility } => base.with_rule(utility(&[])),
        }
    }

    pub fn resolve(self) -> String {
        self.into_chain().resolve()
    }

    pub fn resolve_in(self, session: &mut Session) -> String {
        self.into_chain().resolve_in(session)
    }
}

impl From<Access> for Chain {
    fn from(access: Access) -> Self {
        access.into_chain()
    }
}
