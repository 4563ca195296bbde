//! Typed wrapper with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, KvStore};

/// Type-safe cache over any [`KvStore`].
///
/// Values are stored as JSON text, which is what the browser's
/// `localStorage` holds.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a raw store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `Ok(None)` if the key doesn't exist and
    /// [`CacheError::SerializeError`] if the stored text does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("tattoo-cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, overwriting prior content.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("tattoo-cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = text.len(), "cache write");
        self.store.set_raw(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: i64,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::new(MemoryStore::new());
        let entries = vec![
            Entry { id: "a".into(), quantity: 2 },
            Entry { id: "b".into(), quantity: 1 },
        ];
        cache.set("entries", &entries).unwrap();

        let loaded: Option<Vec<Entry>> = cache.get("entries").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Entry>> = cache.get("entries").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_malformed_is_serialize_error() {
        let store = MemoryStore::new();
        store.set_raw("entries", "{not json").unwrap();
        let cache = Cache::new(store);

        let result: Result<Option<Vec<Entry>>, _> = cache.get("entries");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_stored_as_json_text() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache.set("n", &42_i64).unwrap();
        assert_eq!(store.get_raw("n").unwrap().as_deref(), Some("42"));
    }
}
