use std::error::Error;
use std::fmt;

use log::warn;

/// Durable string-keyed storage behind the persistent value store.
///
/// The port is injected into [`PersistentValue::new`] so the store can run
/// against an on-disk file in the shell and an in-memory double in tests.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Failure reported by a storage port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.message)
    }
}

impl Error for StorageError {}

/// An in-memory string mirrored into a durable key-value store.
///
/// Construction seeds the value by reading `key` from the store, falling
/// back to the caller-supplied initial value. The seed read is never written
/// back; only later [`set_value`](Self::set_value) and
/// [`rebind_key`](Self::rebind_key) calls touch the store.
///
/// Writes are best-effort: a failing port is logged and the in-memory value
/// stays authoritative.
#[derive(Debug)]
pub struct PersistentValue<S: StoragePort> {
    store: S,
    key: String,
    value: String,
}

impl<S: StoragePort> PersistentValue<S> {
    pub fn new(store: S, key: impl Into<String>, initial: impl Into<String>) -> Self {
        let key = key.into();
        let value = store.get(&key).unwrap_or_else(|| initial.into());
        Self { store, key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Updates the value synchronously and writes it through to the store.
    /// Setting the current value again is a no-op.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        self.write_through();
    }

    /// Rebinds the store key; subsequent writes target the new key, and the
    /// current value is written under it immediately.
    pub fn rebind_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key == self.key {
            return;
        }
        self.key = key;
        self.write_through();
    }

    fn write_through(&mut self) {
        if let Err(err) = self.store.set(&self.key, &self.value) {
            warn!("Write-through of key {:?} failed: {}", self.key, err);
        }
    }
}
