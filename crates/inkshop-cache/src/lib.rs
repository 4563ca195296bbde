//! Type-safe key-value persistence for the Inkshop storefront.
//!
//! Provides a small, ergonomic API over a durable string store with
//! automatic JSON serialization. In the browser the store is
//! `window.localStorage`; natively (and in tests) it is an in-memory map.
//!
//! # Example
//!
//! ```rust
//! use inkshop_cache::{Cache, KvStore, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Visit {
//!     count: u32,
//! }
//!
//! let store = MemoryStore::new();
//! let cache = Cache::new(store.clone());
//!
//! cache.set("visits", &Visit { count: 3 }).unwrap();
//! let visit: Option<Visit> = cache.get("visits").unwrap();
//! assert_eq!(visit, Some(Visit { count: 3 }));
//!
//! // Clones of a MemoryStore share their entries.
//! assert_eq!(store.get_raw("visits").unwrap().as_deref(), Some(r#"{"count":3}"#));
//! ```

mod error;
mod kv;
mod store;

#[cfg(target_arch = "wasm32")]
mod local;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{KvStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KvStore, MemoryStore};
}
