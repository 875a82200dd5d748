//! Task Checkbox State
//!
//! Restores and persists the checked state of task-list checkboxes.
//! - key: `<page-path>::<index>` storage keys
//! - value: `"true"` / `"false"` encoding
//! - store: injectable key-value storage (in-memory implementation included)
//! - sync: enable, restore and persist checkboxes in document order
//!
//! Nothing here touches the browser; the frontend supplies the store
//! and checkbox implementations.

mod checkbox;
mod error;
mod key;
mod store;
mod sync;
mod value;


pub use checkbox::TaskCheckbox;
pub use error::{StoreError, StoreResult};
pub use key::{StorageKey, DEFAULT_SEPARATOR};
pub use store::{KeyValueStore, MemoryStore};
pub use sync::{BoundCheckbox, CheckboxSync, Restored};
pub use value::{decode_checked, encode_checked};
