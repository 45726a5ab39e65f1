//! KvBackend — the narrow raw I/O trait the durable client store exposes.
//!
//! String keys, string values, `get`/`set` only. No transactions, no delete,
//! no isolation: two handles writing the same key is last-writer-wins with
//! total loss of the loser's value. That contract is deliberate and callers
//! must not assume anything stronger.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::error::{Result, StorageError};

/// Low-level key-value backend.
///
/// Implementors must be `Send + Sync` so a store handle can be shared.
pub trait KvBackend: Send + Sync {
    /// Fetch the value for a key. `None` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for a key.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory backend. Useful for tests and for callers that only need
/// process-lifetime storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// FileBackend
// ============================================================================

/// Durable backend: one file per key under a directory.
///
/// Whole-value overwrite on `set`, no locking across processes.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
