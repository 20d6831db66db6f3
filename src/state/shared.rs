use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::foundation::error::PhasorResult;
use crate::state::container::State;

/// Cloneable handle to one [`State`] shared between control writers and the frame driver.
///
/// Each method holds the lock for its whole read-modify-write, so the modified flag always
/// reflects the most recent write no matter which thread made it.
#[derive(Debug)]
pub struct SharedState<K, V> {
    inner: Arc<Mutex<State<K, V>>>,
}

impl<K, V> Clone for SharedState<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedState<K, V>
where
    K: Ord + Clone + Debug,
    V: Clone + PartialEq,
{
    pub fn new(state: State<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run `f` with exclusive access to the container.
    pub fn with<R>(&self, f: impl FnOnce(&mut State<K, V>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn define(&self, definition: impl IntoIterator<Item = (K, V)>) -> BTreeMap<K, V> {
        self.with(|s| s.define(definition).clone())
    }

    pub fn get(&self, key: &K) -> PhasorResult<V> {
        self.with(|s| s.get(key).cloned())
    }

    pub fn get_all(&self) -> BTreeMap<K, V> {
        self.with(|s| s.get_all())
    }

    pub fn set(&self, key: K, value: V) -> BTreeMap<K, V> {
        self.with(|s| s.set(key, value).clone())
    }

    pub fn set_multiple(&self, updates: impl IntoIterator<Item = (K, V)>) -> BTreeMap<K, V> {
        self.with(|s| s.set_multiple(updates).clone())
    }

    pub fn reset(&self) -> BTreeMap<K, V> {
        self.with(|s| s.reset().clone())
    }

    pub fn has_changed(&self) -> bool {
        self.with(|s| s.has_changed())
    }

    pub fn acknowledge(&self) -> BTreeMap<K, V> {
        self.with(|s| s.acknowledge().clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/shared.rs"]
mod tests;
