//! Key-value byte storage adapters.
//!
//! [`KeyValueStore`] is the platform-storage contract the repository builds
//! on. [`FileStore`] is the durable implementation (one file per key under a
//! data directory); [`MemoryStore`] backs tests and can be switched into a
//! failing state to exercise the fail-soft/fail-loud paths.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Durable key-value byte storage: get/set/remove by string key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> io::Result<()>;

    /// Remove `key` outright. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// File-per-key store rooted at a data directory.
///
/// Each key maps to `<root>/<key>.json`. Writes go through a temp file and
/// rename so a crash mid-write never leaves a half-written value behind.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;

        // Write atomically (temp file + rename)
        let path = self.key_path(key);
        let temp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store with injectable read/write failures (test use).
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `get` calls fail with an I/O error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `set`/`remove` calls fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Overwrite a key without going through `set` (for corruption tests).
    pub fn inject(&self, key: &str, value: Vec<u8>) {
        self.entries.lock().expect("store lock poisoned").insert(key.to_string(), value);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(io::Error::other("simulated read failure"));
        }
        Ok(self.entries.lock().expect("store lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("simulated write failure"));
        }
        self.entries.lock().expect("store lock poisoned").insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("simulated write failure"));
        }
        self.entries.lock().expect("store lock poisoned").remove(key);
        Ok(())
    }
}
