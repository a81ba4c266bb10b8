/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Key/value storage capability.
//!
//! The website only ever persists three JSON documents, all in the browser's
//! `localStorage`. [`KeyValueStore`] is the seam: the web crate implements it
//! over `web_sys::Storage`, tests use [`MemoryStore`].
//!
//! Reads are read-then-write with no locking. Two tabs writing the same key
//! can lose an update; that is accepted.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Referral context captured from invite links.
pub const REFERRAL_KEY: &str = "trackwarranty_referral";
/// Unbounded local event log.
pub const ANALYTICS_KEY: &str = "trackwarranty_analytics";
/// Events that could not be handed to `gtag`, last 50 kept.
pub const GA_FALLBACK_KEY: &str = "ga_fallback_events";

#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend (private browsing, storage disabled, no window).
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend rejected the operation, e.g. quota exceeded.
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("invalid stored json: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key/value storage with `localStorage` semantics.
///
/// Methods take `&self`: browser storage is a shared handle and the fakes
/// use interior mutability, matching the single-threaded page model.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON document. A missing key yields `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Like [`load_json`], but a corrupt document is logged and treated as
/// absent so callers can start over instead of failing.
pub fn load_json_lenient<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Err(StorageError::Serde(e)) => {
            log::warn!("Discarding unreadable {key}: {e}");
            Ok(None)
        }
        other => other,
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// In-memory [`KeyValueStore`] used by tests and as a fallback when the
/// browser refuses to hand out `localStorage`.
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
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        name: String,
    }

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryStore::new();
        let doc: Option<Doc> = load_json(&store, "nope").unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn saved_document_is_readable() {
        let store = MemoryStore::new();
        save_json(&store, "doc", &Doc { name: "a".into() }).unwrap();
        let doc: Option<Doc> = load_json(&store, "doc").unwrap();
        assert_eq!(doc, Some(Doc { name: "a".into() }));
    }

    #[test]
    fn corrupt_document_is_an_error_unless_lenient() {
        let store = MemoryStore::new();
        store.set_item("doc", "{not json").unwrap();

        let strict: Result<Option<Doc>, _> = load_json(&store, "doc");
        assert!(matches!(strict, Err(StorageError::Serde(_))));

        let lenient: Option<Doc> = load_json_lenient(&store, "doc").unwrap();
        assert!(lenient.is_none());
    }

    #[test]
    fn remove_item_clears_key() {
        let store = MemoryStore::new();
        store.set_item("k", "v").unwrap();
        assert_eq!(store.len(), 1);
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }
}
