//! Deduplicating rule storage.
//!
//! The registry maps generated class names to the rule and layer they were
//! registered with, notifies listeners when a new class appears, and renders
//! everything it holds as CSS text ordered by layer.

use indexmap::IndexMap;

use crate::rule::Rule;

/// A registered rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub rule: Rule,
    /// Cascade position; lower layers render first.
    pub layer: u64,
}

/// Handle returned by [`Registry::on_change`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut() + Send>;

/// Generated class names and their rules, in registration order.
///
/// Entries are never replaced or removed except by [`Registry::clear`].
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, Entry>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `rule` under `class_name` unless the name is already taken.
    ///
    /// Returns `true` and notifies every listener once when the entry is new.
    /// Re-registering an existing name does nothing.
    pub fn register(&mut self, class_name: &str, rule: Rule, layer: u64) -> bool {
        if self.entries.contains_key(class_name) {
            return false;
        }
        log::debug!("register .{} at layer {}", class_name, layer);
        self.entries
            .insert(class_name.to_string(), Entry { rule, layer });
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
        true
    }

    /// Subscribes `callback` to new registrations.
    ///
    /// The callback runs synchronously inside [`register`](Self::register)
    /// and must not touch the registry.
    pub fn on_change(&mut self, callback: impl FnMut() + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Removes exactly the listener `id`. Returns `false` if it was not found.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&Entry> {
        self.entries.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Renders every entry, ascending by layer, blocks separated by a blank
    /// line. Entries sharing a layer keep registration order.
    pub fn generate_css(&self) -> String {
        let mut entries: Vec<(&String, &Entry)> = self.entries.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.layer);
        entries
            .into_iter()
            .map(|(name, entry)| entry.rule.render(name))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Drops every entry. Listeners stay subscribed.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
