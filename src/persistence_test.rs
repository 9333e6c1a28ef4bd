use super::*;
use crate::message::Sender;

struct BrokenStore;

impl HistoryStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("no window".into()))
    }

    fn save(&self, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Write("denied".into()))
    }
}

// =============================================================
// Codec
// =============================================================

#[test]
fn encode_snapshot_writes_record_array() {
    let raw = encode_snapshot(&[Message::at(Sender::User, "hi", "08:30")]).unwrap();
    assert_eq!(raw, r#"[{"sender":"user","text":"hi","time":"08:30"}]"#);
}

#[test]
fn decode_snapshot_rejects_non_array() {
    let err = decode_snapshot(r#"{"sender":"user"}"#).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[test]
fn decode_snapshot_rejects_unknown_sender() {
    assert!(decode_snapshot(r#"[{"sender":"admin","text":"x","time":""}]"#).is_err());
}

// =============================================================
// load_history
// =============================================================

#[test]
fn load_history_missing_is_empty() {
    assert!(load_history(&MemoryStore::default()).is_empty());
    assert!(load_history(&NoopStore).is_empty());
}

#[test]
fn load_history_corrupt_is_empty() {
    let store = MemoryStore::with_raw("{not json");
    assert!(load_history(&store).is_empty());
}

#[test]
fn load_history_failing_store_is_empty() {
    assert!(load_history(&BrokenStore).is_empty());
}

#[test]
fn load_history_reads_saved_messages() {
    let store = MemoryStore::default();
    let messages = vec![Message::at(Sender::User, "q", "01:00"), Message::at(Sender::Bot, "a", "01:01")];
    save_history(&store, &messages);
    assert_eq!(load_history(&store), messages);
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_history_failure_is_swallowed() {
    save_history(&BrokenStore, &[Message::at(Sender::User, "q", "")]);
    clear_history(&BrokenStore);
}

#[test]
fn clear_history_removes_snapshot() {
    let store = MemoryStore::with_raw("[]");
    clear_history(&store);
    assert_eq!(store.raw(), None);
}
