#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("favorites database is invalid or corrupt")]
    Corrupt,
    #[error("favorites database was written by a newer LaunchLens (schema {found}, this build reads {supported})")]
    NewerSchema { found: u32, supported: u32 },
    #[error("favorites database is locked by another process")]
    DatabaseAlreadyOpen,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("favorites encoding error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage task failed: {0}")]
    TaskJoin(String),
    #[error("redb: {0}")]
    Redb(Box<redb::Error>),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Corrupt,
    NewerSchema,
    Busy,
    InvalidPath,
    Io,
    Codec,
    Backend,
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::Corrupt => StorageErrorKind::Corrupt,
            StorageError::NewerSchema { .. } => StorageErrorKind::NewerSchema,
            StorageError::DatabaseAlreadyOpen => StorageErrorKind::Busy,
            StorageError::Io(_) => StorageErrorKind::Io,
            StorageError::Serde(_) => StorageErrorKind::Codec,
            StorageError::InvalidPath(_) => StorageErrorKind::InvalidPath,
            StorageError::TaskJoin(_) | StorageError::Redb(_) => StorageErrorKind::Backend,
        }
    }
}

impl From<redb::DatabaseError> for StorageError {
    fn from(value: redb::DatabaseError) -> Self {
        match value {
            redb::DatabaseError::DatabaseAlreadyOpen => Self::DatabaseAlreadyOpen,
            other => Self::Redb(Box::new(other.into())),
        }
    }
}

// Every other redb failure collapses into the single backend variant.
macro_rules! redb_backend_error {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for StorageError {
            fn from(value: $ty) -> Self {
                Self::Redb(Box::new(value.into()))
            }
        }
    )*};
}

redb_backend_error!(
    redb::Error,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

impl From<tokio::task::JoinError> for StorageError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::TaskJoin(value.to_string())
    }
}
