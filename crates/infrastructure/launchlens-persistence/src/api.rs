pub const CURRENT_SCHEMA: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbState {
    Missing,
    Valid,
    Busy,
    Corrupt,
    NewerSchema { found: u32, supported: u32 },
}

/// Flat byte-valued storage addressed by string keys.
///
/// `get` returns `None` for keys that were never written; `set` replaces the
/// whole value.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, crate::StorageError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), crate::StorageError>;
}
