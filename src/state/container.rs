use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::foundation::error::{PhasorError, PhasorResult};

/// Observable container for a fixed set of named values.
///
/// Three mappings are kept side by side:
///
/// - `current`: what readers see
/// - `initial`: everything ever passed to [`State::define`], used by [`State::reset`]
/// - `previous`: the snapshot the next write is compared against
///
/// Every write recomputes the modified flag over the whole mapping and then resyncs `previous`,
/// so [`State::has_changed`] reports whether the most recent write changed anything that was not
/// yet acknowledged.
#[derive(Clone, Debug, PartialEq)]
pub struct State<K, V> {
    current: BTreeMap<K, V>,
    initial: BTreeMap<K, V>,
    previous: BTreeMap<K, V>,
    modified: bool,
}

impl<K, V> Default for State<K, V> {
    fn default() -> Self {
        Self {
            current: BTreeMap::new(),
            initial: BTreeMap::new(),
            previous: BTreeMap::new(),
            modified: false,
        }
    }
}

impl<K, V> State<K, V>
where
    K: Ord + Clone + Debug,
    V: Clone + PartialEq,
{
    /// Empty container. Nothing is defined and nothing has changed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container seeded through [`State::define`]; it starts out modified.
    pub fn with_defaults(defaults: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut state = Self::new();
        state.define(defaults);
        state
    }

    /// Merge `definition` into the current, initial and previous mappings.
    ///
    /// May be called repeatedly to add or overwrite keys. Always marks the container modified.
    pub fn define(&mut self, definition: impl IntoIterator<Item = (K, V)>) -> &BTreeMap<K, V> {
        for (k, v) in definition {
            self.current.insert(k.clone(), v.clone());
            self.initial.insert(k.clone(), v.clone());
            self.previous.insert(k, v);
        }
        self.modified = true;
        &self.current
    }

    pub fn get(&self, key: &K) -> PhasorResult<&V> {
        self.current
            .get(key)
            .ok_or_else(|| PhasorError::key_not_found(key))
    }

    /// Independent copy of the current mapping.
    pub fn get_all(&self) -> BTreeMap<K, V> {
        self.current.clone()
    }

    pub fn set(&mut self, key: K, value: V) -> &BTreeMap<K, V> {
        self.set_multiple([(key, value)])
    }

    /// Merge `updates` into the current mapping, recompute the modified flag against the previous
    /// snapshot, then resync the snapshot.
    ///
    /// An empty update is legal: values stay put and the comparison still runs.
    pub fn set_multiple(&mut self, updates: impl IntoIterator<Item = (K, V)>) -> &BTreeMap<K, V> {
        for (k, v) in updates {
            self.current.insert(k, v);
        }
        self.modified = self.current != self.previous;
        for (k, v) in &self.current {
            self.previous.insert(k.clone(), v.clone());
        }
        &self.current
    }

    /// Restore the current mapping to the defined initial values.
    ///
    /// The modified flag and the previous snapshot are left as they were, so a later write of the
    /// pre-reset values may not register as a change.
    pub fn reset(&mut self) -> &BTreeMap<K, V> {
        self.current = self.initial.clone();
        &self.current
    }

    pub fn has_changed(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag without touching any value.
    pub fn acknowledge(&mut self) -> &BTreeMap<K, V> {
        self.modified = false;
        &self.current
    }

    pub fn initial(&self) -> &BTreeMap<K, V> {
        &self.initial
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.current.contains_key(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/container.rs"]
mod tests;
