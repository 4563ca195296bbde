//! Raw string key-value stores.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::CacheError;

/// A durable string key-value store.
///
/// Methods take `&self`: the browser's `localStorage` is a shared,
/// single-threaded handle, and the in-memory store mirrors that.
pub trait KvStore {
    /// Read the raw value under `key`, or `None` when absent.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write `value` under `key`, overwriting prior content.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get_raw(key)?.is_some())
    }
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }
}

/// In-memory store for native builds and tests.
///
/// Clones share the same underlying map, so a clone handed to one
/// component observes writes made through another. That is how a page
/// reload is simulated in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
