//! Local storage backed key-value store

use gloo_storage::{LocalStorage, Storage};
use letsgo_common::storage::KeyValueStore;
use letsgo_common::{Error, Result};
use wasm_bindgen::JsValue;

/// The browser's `window.localStorage`, holding raw strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::StorageUnavailable(js_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                message: js_message(&e),
            })
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
