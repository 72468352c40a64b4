//! Persistent session storage
//!
//! The session lives in a plain string key-value store, the same shape as
//! browser local storage. This module provides the `KeyValueStore` trait that
//! abstracts over the backing store, and the typed [`TokenStore`] wrapper
//! the rest of the client talks to.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, used by tests and embedders
//! - [`FileStore`] - JSON file on disk, used by the terminal client (`native`)
//! - browser local storage - lives in the `ui` crate
//!
//! # Example
//!
//! ```rust
//! use campus_chat::store::{MemoryStore, TokenStore};
//!
//! let store = TokenStore::new(MemoryStore::new());
//! assert!(!store.has_session());
//! ```

#[cfg(feature = "native")]
pub mod file;
pub mod token;

#[cfg(feature = "native")]
pub use file::FileStore;
pub use token::{TokenStore, TOKEN_KEY, USER_KEY};

use crate::types::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Synchronous string key-value store.
///
/// Implementations use interior mutability so a store can be cloned into
/// several clients and still see the same entries.
pub trait KeyValueStore {
    /// Read an entry.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an entry, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete an entry. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
