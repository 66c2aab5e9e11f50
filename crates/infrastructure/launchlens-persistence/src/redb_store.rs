use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};

use crate::api::{DbState, CURRENT_SCHEMA};
use crate::maintenance::quarantine_corrupt_file;
use crate::{KeyValueStore, StorageError};

const META: TableDefinition<&str, &str> = TableDefinition::new("meta");
const KV: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

const META_FORMAT_KEY: &str = "format";
const META_FORMAT_VALUE: &str = "launchlens-redb";
const META_SCHEMA_VERSION: &str = "schema_version";
const META_CREATED_AT: &str = "created_at";

const QUALIFIER: &str = "com";
const ORG: &str = "launchlens";
const APP: &str = "launchlens";

/// On-device key-value store backed by a single redb file under `root`.
///
/// Handles are shared per path for the whole process because redb refuses a
/// second open of the same file.
#[derive(Debug, Clone)]
pub struct RedbKeyValueStore {
    root: Utf8PathBuf,
}

type DbCache = Mutex<HashMap<Utf8PathBuf, Arc<Database>>>;

impl RedbKeyValueStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(Self::default_data_dir()?))
    }

    pub fn default_data_dir() -> Result<Utf8PathBuf, StorageError> {
        let dirs = ProjectDirs::from(QUALIFIER, ORG, APP).ok_or_else(|| {
            StorageError::InvalidPath("could not determine data directory".into())
        })?;
        Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf())
            .map_err(|p| StorageError::InvalidPath(p.to_string_lossy().into_owned()))
    }

    pub fn path_for_root(root: &Utf8Path) -> Utf8PathBuf {
        root.join(launchlens_config::DATA_FILENAME)
    }

    /// True when redb rejected the file itself rather than the environment.
    fn is_corrupt_open_error(err: &redb::DatabaseError) -> bool {
        let redb::DatabaseError::Storage(storage) = err else {
            return false;
        };
        match storage {
            redb::StorageError::Corrupted(_) => true,
            redb::StorageError::Io(ioe) => matches!(
                ioe.kind(),
                std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }

    fn db_cache() -> MutexGuard<'static, HashMap<Utf8PathBuf, Arc<Database>>> {
        static CACHE: OnceLock<DbCache> = OnceLock::new();
        CACHE
            .get_or_init(Mutex::default)
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Cached handle for `path`, dropping entries whose file was removed underneath.
    fn cached(cache: &mut HashMap<Utf8PathBuf, Arc<Database>>, path: &Utf8Path) -> Option<Arc<Database>> {
        if !path.exists() {
            cache.remove(path);
            return None;
        }
        cache.get(path).cloned()
    }

    /// Open (or create) the file at `path` and check its meta table. Corrupt
    /// files are quarantined before the error is returned.
    fn open_checked(path: &Utf8Path, create: bool) -> Result<Database, StorageError> {
        let opened = if create && !path.exists() {
            Database::create(path.as_std_path())
        } else {
            Database::open(path.as_std_path())
        };
        let db = match opened {
            Ok(db) => db,
            Err(e) if Self::is_corrupt_open_error(&e) => {
                let _ = quarantine_corrupt_file(path);
                return Err(StorageError::Corrupt);
            }
            Err(e) => return Err(e.into()),
        };

        match Self::ensure_schema(&db) {
            Ok(()) => Ok(db),
            Err(StorageError::Corrupt) => {
                drop(db);
                let _ = quarantine_corrupt_file(path);
                Err(StorageError::Corrupt)
            }
            Err(e) => Err(e),
        }
    }

    /// Inspect the database file without creating it.
    pub fn validate(&self) -> Result<DbState, StorageError> {
        let path = Self::path_for_root(&self.root);
        if !path.exists() {
            return Ok(DbState::Missing);
        }
        if Self::cached(&mut Self::db_cache(), &path).is_some() {
            return Ok(DbState::Valid);
        }

        match Self::open_checked(&path, false) {
            Ok(_) => Ok(DbState::Valid),
            Err(StorageError::Corrupt) => Ok(DbState::Corrupt),
            Err(StorageError::DatabaseAlreadyOpen) => Ok(DbState::Busy),
            Err(StorageError::NewerSchema { found, supported }) => {
                Ok(DbState::NewerSchema { found, supported })
            }
            Err(e) => Err(e),
        }
    }

    fn open_or_create(&self) -> Result<Arc<Database>, StorageError> {
        let path = Self::path_for_root(&self.root);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut cache = Self::db_cache();
        if let Some(db) = Self::cached(&mut cache, &path) {
            return Ok(db);
        }
        let db = Arc::new(Self::open_checked(&path, true)?);
        cache.insert(path, db.clone());
        Ok(db)
    }

    fn ensure_schema(db: &Database) -> Result<(), StorageError> {
        let write_tx = db.begin_write()?;
        {
            let mut meta = write_tx.open_table(META)?;
            let format = meta.get(META_FORMAT_KEY)?.map(|g| g.value().to_string());
            match format.as_deref() {
                None => {
                    meta.insert(META_FORMAT_KEY, META_FORMAT_VALUE)?;
                    meta.insert(META_SCHEMA_VERSION, CURRENT_SCHEMA.to_string().as_str())?;
                    meta.insert(META_CREATED_AT, Utc::now().to_rfc3339().as_str())?;
                }
                Some(META_FORMAT_VALUE) => {}
                Some(_) => return Err(StorageError::Corrupt),
            }
            write_tx.open_table(KV)?;
        }
        write_tx.commit()?;

        let read_tx = db.begin_read()?;
        let meta = read_tx.open_table(META)?;
        let found = meta
            .get(META_SCHEMA_VERSION)?
            .and_then(|g| g.value().parse::<u32>().ok());
        match found {
            Some(CURRENT_SCHEMA) => Ok(()),
            Some(found) if found > CURRENT_SCHEMA => Err(StorageError::NewerSchema {
                found,
                supported: CURRENT_SCHEMA,
            }),
            _ => Err(StorageError::Corrupt),
        }
    }

    pub fn get_blocking(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let db = self.open_or_create()?;
        let read_tx = db.begin_read()?;
        let table = read_tx.open_table(KV)?;
        let value = table.get(key)?.map(|g| g.value().to_vec());
        Ok(value)
    }

    pub fn set_blocking(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let db = self.open_or_create()?;
        let write_tx = db.begin_write()?;
        {
            let mut table = write_tx.open_table(KV)?;
            table.insert(key, value)?;
        }
        write_tx.commit()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedbKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let store = self.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || store.get_blocking(&key)).await?
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let store = self.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || store.set_blocking(&key, &value)).await?
    }
}
