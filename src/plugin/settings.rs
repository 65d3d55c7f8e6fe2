//! Persisted user settings.

use std::future::Future;

use futures_util::future::ready;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::host::{HostError, HostResult};

/// Key of the remembered corner radius
pub const CORNER_RADIUS_KEY: &str = "cornerRadius";

/// Asynchronous key-value store provided by the host.
pub trait SettingsStore {
    /// Read a value; `None` if never written
    fn get(&self, key: &str) -> impl Future<Output = HostResult<Option<Value>>>;

    /// Write a value
    fn set(&self, key: &str, value: Value) -> impl Future<Output = HostResult<()>>;
}

/// In-memory settings.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<FxHashMap<String, Value>>,
    read_only: bool,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every write
    pub fn read_only() -> Self {
        Self {
            values: RwLock::default(),
            read_only: true,
        }
    }

    /// Pre-populate a value
    pub fn with(self, key: impl Into<String>, value: Value) -> Self {
        self.values.write().insert(key.into(), value);
        self
    }

    /// Current value, bypassing the async interface
    pub fn peek(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> impl Future<Output = HostResult<Option<Value>>> {
        ready(Ok(self.peek(key)))
    }

    fn set(&self, key: &str, value: Value) -> impl Future<Output = HostResult<()>> {
        if self.read_only {
            return ready(Err(HostError::Rejected(format!("settings are read-only ({key})"))));
        }
        self.values.write().insert(key.to_owned(), value);
        ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_settings_round_trip() {
        let store = MemorySettings::new();
        assert_eq!(store.get(CORNER_RADIUS_KEY).await.unwrap(), None);
        store.set(CORNER_RADIUS_KEY, json!(8)).await.unwrap();
        assert_eq!(store.get(CORNER_RADIUS_KEY).await.unwrap(), Some(json!(8)));
    }

    #[tokio::test]
    async fn test_read_only_rejects_writes() {
        let store = MemorySettings::read_only();
        assert!(store.set(CORNER_RADIUS_KEY, json!(8)).await.is_err());
        assert_eq!(store.peek(CORNER_RADIUS_KEY), None);
    }
}
