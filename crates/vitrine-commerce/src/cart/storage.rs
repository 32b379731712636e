//! Cart persistence backends.
//!
//! The cart occupies a single named slot holding one JSON payload, the same
//! contract browser local storage gives a web storefront. Backends only move
//! raw strings; (de)serialization lives in the store.

use crate::error::StorageError;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

/// Name of the persistence slot the cart occupies.
pub const CART_SLOT: &str = "vitrine_cart";

/// A single-slot string store for the serialized cart.
pub trait CartStorage {
    /// Read the slot. `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot.
    fn save(&mut self, payload: &str) -> Result<(), StorageError>;

    /// Empty the slot.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// File-backed storage: the slot is a JSON file under the given directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at `dir`; the slot file is `<dir>/vitrine_cart.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{CART_SLOT}.json")),
        }
    }

    /// Path of the slot file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err)),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }
        fs::write(&self.path, payload).map_err(StorageError::Write)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write(err)),
        }
    }
}

/// In-memory storage for tests and ephemeral carts.
///
/// Clones share the same slot, so a test can keep a handle while the store
/// owns another, and inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    payload: Option<String>,
    writes: u64,
}

impl MemoryStorage {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a payload, as if a previous session wrote it.
    pub fn seeded(payload: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.inner.borrow_mut().payload = Some(payload.into());
        storage
    }

    /// Current slot content.
    pub fn payload(&self) -> Option<String> {
        self.inner.borrow().payload.clone()
    }

    /// How many times the slot has been rewritten (saves and clears).
    pub fn write_count(&self) -> u64 {
        self.inner.borrow().writes
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().payload.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self.inner.borrow_mut();
        slot.payload = Some(payload.to_string());
        slot.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        let mut slot = self.inner.borrow_mut();
        slot.payload = None;
        slot.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);

        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_memory_storage_clones_share_slot() {
        let handle = MemoryStorage::new();
        let mut owned = handle.clone();
        owned.save("payload").unwrap();
        assert_eq!(handle.payload().as_deref(), Some("payload"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path());

        assert_eq!(storage.load().unwrap(), None);
        storage.save(r#"[{"quantity":1}]"#).unwrap();
        assert_eq!(
            storage.load().unwrap().as_deref(),
            Some(r#"[{"quantity":1}]"#)
        );

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("nested/data"));
        storage.save("[]").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_file_storage_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path());
        storage.clear().unwrap();
        storage.clear().unwrap();
    }
}
