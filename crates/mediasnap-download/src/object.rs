//! Temporary object handles and the save trigger

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::Result;

/// Revocable reference to fetched bytes, shaped like a blob URL.
///
/// A handle is only meaningful to the store that minted it, and only
/// until revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle(String);

impl ObjectHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Temporary-handle capability: wraps bytes into a revocable reference
/// the save trigger can target.
pub trait ObjectStore: Send + Sync {
    fn create(&self, bytes: Vec<u8>) -> ObjectHandle;
    fn revoke(&self, handle: &ObjectHandle);
}

/// Save-trigger capability: points the host's save-as machinery at a
/// handle under the given filename.
pub trait SaveSink: Send + Sync {
    fn save(&self, handle: &ObjectHandle, file_name: &str) -> Result<()>;
}

/// In-memory store for headless hosts and tests.
pub struct MemoryObjectStore {
    entries: RwLock<HashMap<ObjectHandle, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Handles created but not yet revoked.
    pub fn live_handles(&self) -> usize {
        self.entries.read().len()
    }

    pub fn bytes(&self, handle: &ObjectHandle) -> Option<Vec<u8>> {
        self.entries.read().get(handle).cloned()
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for MemoryObjectStore {
    fn create(&self, bytes: Vec<u8>) -> ObjectHandle {
        let handle = ObjectHandle(format!("blob:{}", Uuid::new_v4()));
        self.entries.write().insert(handle.clone(), bytes);
        handle
    }

    fn revoke(&self, handle: &ObjectHandle) {
        self.entries.write().remove(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_revoke() {
        let store = MemoryObjectStore::new();

        let handle = store.create(vec![1, 2, 3]);
        assert!(handle.as_str().starts_with("blob:"));
        assert_eq!(handle.to_string(), handle.as_str());
        assert_eq!(store.live_handles(), 1);
        assert_eq!(store.bytes(&handle), Some(vec![1, 2, 3]));

        store.revoke(&handle);
        assert_eq!(store.live_handles(), 0);
        assert_eq!(store.bytes(&handle), None);

        // Revoking twice is harmless.
        store.revoke(&handle);
        assert_eq!(store.live_handles(), 0);
    }

    #[test]
    fn test_handles_are_distinct() {
        let store = MemoryObjectStore::new();

        let a = store.create(vec![0]);
        let b = store.create(vec![0]);
        assert_ne!(a, b);
        assert_eq!(store.live_handles(), 2);
    }
}
