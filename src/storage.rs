//! Browser Local Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use task_state::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::{JsCast, JsValue};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails when storage is disabled or blocked (e.g. sandboxed frames)
    pub fn from_window(window: &web_sys::Window) -> StoreResult<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable("localStorage is not provided".to_string())),
            Err(e) => Err(StoreError::Unavailable(js_error_message(&e))),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_error_message(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error_message(&e),
        })
    }
}

/// Message of a thrown JS error (DOMExceptions included), debug form otherwise
fn js_error_message(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => format!("{}: {}", String::from(e.name()), String::from(e.message())),
        None => format!("{:?}", err),
    }
}
