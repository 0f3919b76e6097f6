//! String key-value persistence, the local equivalent of a browser's
//! `localStorage`. Values are opaque strings; callers own the encoding.

#[cfg(test)]
mod memory;
mod schema;
mod sqlite;

#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub(crate) use sqlite::SqliteStore;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to prepare storage at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any prior value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests;
