//! The composer: rules in, class names out.
//!
//! For each rule the composer takes a layer, hashes the rule at that layer,
//! registers it and emits the generated class. Raw class strings pass
//! through in position. Conflict diagnostics run over the whole input first.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::diagnostics::{self, Diagnostic};
use crate::dynamic::DynamicResult;
use crate::hash;
use crate::rule::Rule;
use crate::session::Session;

/// One composer input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Rule(Rule),
    /// An already-resolved class name, emitted as is.
    Class(String),
}

impl Item {
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Item::Rule(rule) => Some(rule),
            Item::Class(_) => None,
        }
    }
}

impl From<Rule> for Item {
    fn from(rule: Rule) -> Self {
        Item::Rule(rule)
    }
}

impl From<&Rule> for Item {
    fn from(rule: &Rule) -> Self {
        Item::Rule(rule.clone())
    }
}

impl From<&str> for Item {
    fn from(class: &str) -> Self {
        Item::Class(class.to_string())
    }
}

impl From<String> for Item {
    fn from(class: String) -> Self {
        Item::Class(class)
    }
}

/// Everything one composer call produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    pub class_name: String,
    /// Dynamic bindings of every rule, later rules overwriting earlier ones.
    pub style: IndexMap<String, String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl From<Composition> for DynamicResult {
    fn from(composition: Composition) -> Self {
        DynamicResult::from_parts(composition.class_name, composition.style)
    }
}

/// Key for the composition cache. Equal item lists always share a key.
pub(crate) fn items_key(items: &[Item]) -> u64 {
    let mut hasher = FxHasher::default();
    items.len().hash(&mut hasher);
    for item in items {
        match item {
            Item::Rule(rule) => {
                hasher.write_u8(0);
                hasher.write_u64(hash::fingerprint(rule, 0));
                rule.pinned_layer().hash(&mut hasher);
            }
            Item::Class(class) => {
                hasher.write_u8(1);
                class.hash(&mut hasher);
            }
        }
    }
    hasher.finish()
}

impl Session {
    /// Composes `items` into a space-separated class string.
    ///
    /// ```
    /// use acss::{Session, Rule};
    ///
    /// let mut session = Session::new();
    /// let class = session.cx([Rule::new([("padding", "1rem")])]);
    /// assert!(session.generate_css().contains(&format!(".{} {{", class)));
    /// ```
    pub fn cx<I>(&mut self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.compose(items.into_iter().map(Into::into).collect()).class_name
    }

    /// Like [`cx`](Self::cx), also returning the inline style bindings of
    /// every dynamic value involved.
    pub fn dcx<I>(&mut self, items: I) -> DynamicResult
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        self.compose(items.into_iter().map(Into::into).collect()).into()
    }

    /// Like [`cx`](Self::cx), also returning the diagnostics it reported.
    pub fn cx_with_diagnostics<I>(&mut self, items: I) -> (String, Vec<Diagnostic>)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let composition = self.compose(items.into_iter().map(Into::into).collect());
        (composition.class_name, composition.diagnostics)
    }

    /// Runs the full composer over `items`.
    pub fn compose(&mut self, items: Vec<Item>) -> Composition {
        let rules: Vec<(usize, &Rule)> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_rule().map(|rule| (i, rule)))
            .collect();
        let found = diagnostics::check(&rules, self.config().diagnostics);
        for diagnostic in &found {
            self.report(diagnostic);
        }

        let mut style = IndexMap::new();
        for (_, rule) in &rules {
            if let Some(bindings) = rule.dynamic_bindings() {
                style.extend(bindings.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        let reuse = self.config().reuse_compositions;
        let key = items_key(&items);
        if reuse {
            if let Some(class_name) = self.cached_composition(key, &items) {
                log::trace!("composition cache hit: {}", class_name);
                return Composition {
                    class_name,
                    style,
                    diagnostics: found,
                };
            }
        }

        let mut tokens = Vec::with_capacity(items.len());
        for item in &items {
            match item {
                Item::Class(class) => tokens.push(class.clone()),
                Item::Rule(rule) => {
                    if self.config().skip_empty_rules && rule.is_empty() {
                        log::debug!("skipping empty rule");
                        continue;
                    }
                    let layer = match rule.pinned_layer() {
                        Some(layer) => layer,
                        None => self.next_layer(),
                    };
                    let class = hash::class_name(rule, layer, &self.config().class_prefix);
                    self.register(&class, rule.clone(), layer);
                    tokens.push(class);
                }
            }
        }

        let class_name = tokens.join(" ");
        if reuse {
            self.cache_composition(key, items, class_name.clone());
        }
        Composition {
            class_name,
            style,
            diagnostics: found,
        }
    }
}
