//! Browser `localStorage` backing for the chat history snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller persists through the `HistoryStore` seam; this is the only
//! implementation that touches web-sys. Without the `csr` feature it behaves
//! like an empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use saanvi::persistence::{HistoryStore, StorageError};

/// History store keyed by a single `localStorage` entry.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl HistoryStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(&self.key, raw).map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(&self.key).map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
