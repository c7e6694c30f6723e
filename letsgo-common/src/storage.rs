//! Key-value storage seam
//!
//! The browser's local storage is the only persistence the client has. Pages
//! talk to it through [`KeyValueStore`] so the same logic runs against
//! [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::StorageKeys;
use crate::{BookingDetails, BookingRecord, Error, Result};

/// Synchronous string key-value store with local-storage semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory store, single-threaded like the browser tab it stands in for
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub fn get_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::MalformedRecord {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode a value as JSON and store it
pub fn set_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| Error::MalformedRecord {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &raw)
}

/// Typed access to the four keys the pages use
pub struct BookingStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    keys: &'a StorageKeys,
}

impl<'a, S: KeyValueStore + ?Sized> BookingStore<'a, S> {
    pub fn new(store: &'a S, keys: &'a StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn auth_token(&self) -> Result<Option<String>> {
        self.store.get_item(&self.keys.auth_token)
    }

    pub fn clear_auth_token(&self) -> Result<()> {
        self.store.remove_item(&self.keys.auth_token)
    }

    pub fn booking_details(&self) -> Result<Option<BookingDetails>> {
        get_json(self.store, &self.keys.booking_details)
    }

    pub fn save_booking_details(&self, details: &BookingDetails) -> Result<()> {
        set_json(self.store, &self.keys.booking_details, details)
    }

    pub fn profile_image(&self) -> Result<Option<String>> {
        self.store.get_item(&self.keys.profile_image)
    }

    pub fn save_profile_image(&self, data_url: &str) -> Result<()> {
        self.store.set_item(&self.keys.profile_image, data_url)
    }

    /// Bookings made from `mobile_number`, in stored order.
    ///
    /// Only the list itself has to be well formed; odd entries are skipped.
    pub fn bookings_for(&self, mobile_number: &str) -> Result<Vec<BookingRecord>> {
        let all: Vec<Value> = get_json(self.store, &self.keys.bookings)?.unwrap_or_default();

        Ok(all
            .iter()
            .filter_map(|entry| BookingRecord::for_session(entry, mobile_number))
            .collect())
    }
}
