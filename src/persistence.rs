//! Best-effort conversation snapshot persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget keeps a single JSON array of `{sender, text, time}` records under
//! one storage key, rewritten after every append and read once at startup.
//! There is no schema version. The browser `localStorage` implementation lives
//! in the widget crate; this module defines the seam and the codec.
//!
//! ERROR HANDLING
//! ==============
//! Store operations return [`StorageError`], but callers go through
//! [`load_history`] and [`save_history`], which log and swallow failures so a
//! broken or missing snapshot never reaches the user.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::sync::Mutex;

use crate::message::Message;

/// Error returned by [`HistoryStore`] operations and the snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The host has no storage facility (or access was denied).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading the snapshot key failed.
    #[error("failed to read snapshot: {0}")]
    Read(String),
    /// Writing the snapshot key failed (quota, private mode, ...).
    #[error("failed to write snapshot: {0}")]
    Write(String),
    /// The stored snapshot is not a valid JSON message array.
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Raw key-value access to the persisted snapshot.
pub trait HistoryStore: Send + Sync {
    /// Return the raw snapshot, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&self, raw: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// Store that never persists anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStore;

impl HistoryStore for NoopStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn save(&self, _raw: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-process store, used by tests and hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }

    /// Current stored value, for inspection.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|guard| guard.clone())
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let guard = self.raw.lock().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        let mut guard = self.raw.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        *guard = Some(raw.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.raw.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

pub fn encode_snapshot(messages: &[Message]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(messages)?)
}

pub fn decode_snapshot(raw: &str) -> Result<Vec<Message>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and decode the stored history. Any failure yields an empty history.
pub fn load_history(store: &dyn HistoryStore) -> Vec<Message> {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("chat history unavailable: {e}");
            return Vec::new();
        }
    };

    match decode_snapshot(&raw) {
        Ok(messages) => messages,
        Err(e) => {
            log::warn!("discarding chat history: {e}");
            Vec::new()
        }
    }
}

/// Encode and write the full history, logging any failure.
pub fn save_history(store: &dyn HistoryStore, messages: &[Message]) {
    if let Err(e) = encode_snapshot(messages).and_then(|raw| store.save(&raw)) {
        log::warn!("failed to persist chat history: {e}");
    }
}

/// Remove the stored history, logging any failure.
pub fn clear_history(store: &dyn HistoryStore) {
    if let Err(e) = store.clear() {
        log::warn!("failed to clear chat history: {e}");
    }
}
