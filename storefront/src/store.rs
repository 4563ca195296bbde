//! The page's durable store.

use inkshop_cache::{CacheError, KvStore, MemoryStore};

/// `localStorage` when the browser allows it, otherwise an in-memory map
/// so the widget still works for the current page view.
#[derive(Debug, Clone)]
pub enum PageStore {
    #[cfg(target_arch = "wasm32")]
    Local(inkshop_cache::LocalStorage),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match inkshop_cache::LocalStorage::open() {
                Ok(storage) => return PageStore::Local(storage),
                Err(e) => {
                    leptos::logging::warn!("localStorage unavailable, cart will not persist: {e}")
                }
            }
        }

        PageStore::Memory(MemoryStore::new())
    }
}

impl KvStore for PageStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            PageStore::Local(store) => store.get_raw(key),
            PageStore::Memory(store) => store.get_raw(key),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            PageStore::Local(store) => store.set_raw(key, value),
            PageStore::Memory(store) => store.set_raw(key, value),
        }
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self {
            #[cfg(target_arch = "wasm32")]
            PageStore::Local(store) => store.delete(key),
            PageStore::Memory(store) => store.delete(key),
        }
    }
}
