//! Key-Value Store
//!
//! Abstract string storage for checkbox state.
//! The browser frontend backs it with `localStorage`; tests and the
//! session-only fallback use `MemoryStore`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreResult;

/// Origin-scoped string storage
///
/// Methods take `&self`: change listeners share one store and run on a
/// single thread, so implementations use interior mutability.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, overwriting any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store, lives as long as the value does
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Copy of all entries, sorted by key
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> =
            self.entries.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort();
        entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("/::0").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("/::0", "true").unwrap();
        store.set("/::0", "false").unwrap();

        assert_eq!(store.get("/::0").unwrap().as_deref(), Some("false"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shared_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let handle: Rc<dyn KeyValueStore> = store.clone();
        handle.set("/x::1", "true").unwrap();

        assert_eq!(store.snapshot(), vec![("/x::1".to_string(), "true".to_string())]);
    }
}
