use std::cell::RefCell;
use std::collections::HashMap;

/// Failure modes of a key-value backend. Callers treat every variant as
/// best-effort and carry on with in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available in this context")]
    Unavailable,
    #[error("storage rejected write to `{key}`: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("could not encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string key-value surface, shaped after browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Serialize `value` as JSON and write it under `key`.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Read and decode a JSON value. Missing keys and malformed payloads both
/// come back as `None`; the latter is logged.
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[store] discarding malformed `{}`: {}", key, e);
            None
        }
    }
}

/// In-memory store used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
