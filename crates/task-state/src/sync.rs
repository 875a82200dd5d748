//! Checkbox State Synchronizer
//!
//! On page load every task checkbox is enabled, bound to a key derived
//! from the page path and its position, and restored from the store.
//! Each later change is written back under the same key.
//!
//! Store failures never reach the user: reads degrade to "no stored
//! value" and writes are dropped, both with a warning in the log.

use crate::checkbox::TaskCheckbox;
use crate::key::{StorageKey, DEFAULT_SEPARATOR};
use crate::store::KeyValueStore;
use crate::value::{decode_checked, encode_checked};

/// Outcome of restoring a single checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restored {
    /// A stored value existed and was applied
    Applied(bool),
    /// Nothing stored, rendered state kept
    Default,
}

/// A checkbox together with the key it persists under
#[derive(Debug)]
pub struct BoundCheckbox<C> {
    pub key: StorageKey,
    pub checkbox: C,
    pub restored: Restored,
}

pub struct CheckboxSync<S> {
    store: S,
    separator: String,
}

impl<S: KeyValueStore> CheckboxSync<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use another separator between path and index.
    ///
    /// An empty separator would let `/a1` + `0` and `/a` + `10` share a
    /// key, so it falls back to the default.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if separator.is_empty() {
            log::warn!("[SYNC] Empty separator, using '{}'", DEFAULT_SEPARATOR);
            self.separator = DEFAULT_SEPARATOR.to_string();
        } else {
            self.separator = separator;
        }
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key_for(&self, path: &str, index: usize) -> StorageKey {
        StorageKey::new(path, &self.separator, index)
    }

    /// Enable the checkbox and apply the stored state, if any
    pub fn restore<C: TaskCheckbox>(&self, key: &StorageKey, checkbox: &C) -> Restored {
        checkbox.enable();

        let saved = match self.store.get(key.as_str()) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("[SYNC] {}, keeping rendered state", e);
                None
            }
        };

        match saved {
            Some(value) => {
                let checked = decode_checked(&value);
                checkbox.set_checked(checked);
                Restored::Applied(checked)
            }
            None => Restored::Default,
        }
    }

    /// Write the current state, overwriting any previous value
    pub fn persist(&self, key: &StorageKey, checked: bool) {
        if let Err(e) = self.store.set(key.as_str(), encode_checked(checked)) {
            log::warn!("[SYNC] {}", e);
            return;
        }
        log::debug!("[SYNC] {} = {}", key, checked);
    }

    /// Enable and restore every checkbox of a page.
    ///
    /// `checkboxes` must yield in document order; the position in the
    /// sequence is the index part of each key.
    pub fn attach<C, I>(&self, path: &str, checkboxes: I) -> Vec<BoundCheckbox<C>>
    where
        C: TaskCheckbox,
        I: IntoIterator<Item = C>,
    {
        let bound: Vec<_> = checkboxes
            .into_iter()
            .enumerate()
            .map(|(index, checkbox)| {
                let key = self.key_for(path, index);
                let restored = self.restore(&key, &checkbox);
                BoundCheckbox { key, checkbox, restored }
            })
            .collect();

        let applied = bound.iter().filter(|b| b.restored != Restored::Default).count();
        log::info!("[SYNC] {}: {} task checkboxes, {} restored", path, bound.len(), applied);
        bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::store::MemoryStore;
    use std::cell::Cell;

    #[derive(Debug, Default)]
    struct FakeCheckbox {
        checked: Cell<bool>,
        disabled: Cell<bool>,
    }

    impl FakeCheckbox {
        fn rendered(checked: bool) -> Self {
            Self { checked: Cell::new(checked), disabled: Cell::new(true) }
        }
    }

    impl TaskCheckbox for FakeCheckbox {
        fn enable(&self) {
            self.disabled.set(false);
        }

        fn is_checked(&self) -> bool {
            self.checked.get()
        }

        fn set_checked(&self, checked: bool) {
            self.checked.set(checked);
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Read { key: key.to_string(), reason: "SecurityError".to_string() })
        }

        fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Write { key: key.to_string(), reason: "SecurityError".to_string() })
        }
    }

    #[test]
    fn test_restore_applies_stored_value() {
        let store = MemoryStore::new();
        store.set("/p::0", "true").unwrap();
        let sync = CheckboxSync::new(&store);

        let cb = FakeCheckbox::rendered(false);
        let restored = sync.restore(&sync.key_for("/p", 0), &cb);

        assert_eq!(restored, Restored::Applied(true));
        assert!(cb.is_checked());
        assert!(!cb.disabled.get());
    }

    #[test]
    fn test_restore_unchecks_on_false() {
        let store = MemoryStore::new();
        store.set("/p::0", "false").unwrap();
        let sync = CheckboxSync::new(&store);

        let cb = FakeCheckbox::rendered(true);
        assert_eq!(sync.restore(&sync.key_for("/p", 0), &cb), Restored::Applied(false));
        assert!(!cb.is_checked());
    }

    #[test]
    fn test_restore_without_value_keeps_default() {
        let sync = CheckboxSync::new(MemoryStore::new());

        let cb = FakeCheckbox::rendered(true);
        assert_eq!(sync.restore(&sync.key_for("/p", 3), &cb), Restored::Default);
        assert!(cb.is_checked());
        assert!(!cb.disabled.get());
    }

    #[test]
    fn test_persist_writes_string() {
        let sync = CheckboxSync::new(MemoryStore::new());
        let key = sync.key_for("/p", 2);

        sync.persist(&key, true);
        assert_eq!(sync.store().get("/p::2").unwrap().as_deref(), Some("true"));

        sync.persist(&key, false);
        assert_eq!(sync.store().get("/p::2").unwrap().as_deref(), Some("false"));
        assert_eq!(sync.store().len(), 1);
    }

    #[test]
    fn test_attach_assigns_keys_in_order() {
        let sync = CheckboxSync::new(MemoryStore::new());
        let boxes = vec![FakeCheckbox::default(), FakeCheckbox::default(), FakeCheckbox::default()];

        let bound = sync.attach("/list", boxes);

        let keys: Vec<_> = bound.iter().map(|b| b.key.to_string()).collect();
        assert_eq!(keys, vec!["/list::0", "/list::1", "/list::2"]);
        // Attaching never writes
        assert!(sync.store().is_empty());
    }

    #[test]
    fn test_attach_empty_page() {
        let sync = CheckboxSync::new(MemoryStore::new());
        let bound = sync.attach("/empty", Vec::<FakeCheckbox>::new());
        assert!(bound.is_empty());
    }

    #[test]
    fn test_broken_store_still_enables() {
        let sync = CheckboxSync::new(BrokenStore);
        let boxes = vec![FakeCheckbox::rendered(true), FakeCheckbox::rendered(false)];

        let bound = sync.attach("/p", boxes);

        assert!(bound.iter().all(|b| b.restored == Restored::Default));
        assert!(bound.iter().all(|b| !b.checkbox.disabled.get()));
        assert!(bound[0].checkbox.is_checked());
        assert!(!bound[1].checkbox.is_checked());

        // Dropped silently
        sync.persist(&bound[1].key, true);
    }

    #[test]
    fn test_custom_separator() {
        let sync = CheckboxSync::new(MemoryStore::new()).with_separator("|");
        assert_eq!(sync.key_for("/p", 7).as_str(), "/p|7");
    }

    #[test]
    fn test_empty_separator_falls_back() {
        let sync = CheckboxSync::new(MemoryStore::new()).with_separator("");

        assert_eq!(sync.key_for("/p", 7).as_str(), "/p::7");
        assert_ne!(sync.key_for("/a1", 0), sync.key_for("/a", 10));
    }
}
