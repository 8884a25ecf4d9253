//! Client-side key-value persistence.
//!
//! `LocalStorage` reads and writes `window.localStorage` and requires a
//! browser environment. Outside the `csr` build every call reports
//! [`StorageError::Unavailable`], which callers treat the same way as a
//! browser that denies storage access.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Failure modes for a key-value store. None of them are fatal to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, access denied, native build).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected a read.
    #[error("storage read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    /// The backend rejected a write (quota, private mode, ...).
    #[error("storage write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Minimal string key-value contract used by the stores in `state`.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` adapter.
///
/// Holds no browser handle so it stays `Send + Sync` and can live inside
/// a reactive signal; the storage object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

impl KeyValueStore for LocalStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
