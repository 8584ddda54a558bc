//! Storage port for session persistence
//!
//! The session store only needs `get / set / remove` on string keys. The
//! browser adapter is `ui::browser::BrowserStorage`, which also stands in
//! during server-side rendering with no storage behind it. `MemoryStorage`
//! backs the tests.

use std::collections::HashMap;

/// Key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Key holding the serialized session envelope
pub const SESSION_KEY: &str = "auth-storage";

/// Storage port error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage rejected write to `{key}`")]
    WriteRejected { key: String },

    #[error("Storage rejected removal of `{key}`")]
    RemoveRejected { key: String },
}

/// Durable key/value slots surviving a page reload
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_string()));
        assert!(storage.contains(TOKEN_KEY));

        storage.set(TOKEN_KEY, "def").unwrap();
        assert_eq!(storage.get(TOKEN_KEY), Some("def".to_string()));
        assert_eq!(storage.len(), 1);

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_memory_storage_remove_missing_key_is_ok() {
        let mut storage = MemoryStorage::new();
        assert!(storage.remove(SESSION_KEY).is_ok());
    }
}
