#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use launchlens_core::{Launch, LaunchPage};
use launchlens_infra::{LaunchSource, SourceError};
use launchlens_persistence::{KeyValueStore, StorageError};

pub fn launch(id: &str, name: &str) -> Launch {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "status": { "name": "Go for Launch", "abbrev": "Go" },
        "net": "2030-01-01T00:00:00Z",
        "launch_service_provider": { "name": "SpaceX" },
        "rocket": { "configuration": { "name": "Falcon 9", "full_name": "Falcon 9 Block 5" } },
        "pad": { "name": "SLC-40", "location": { "name": "Cape Canaveral" } }
    }))
    .unwrap()
}

pub fn page(launches: Vec<Launch>) -> LaunchPage {
    LaunchPage {
        count: launches.len() as u64,
        results: launches,
        ..LaunchPage::default()
    }
}

pub enum Reply {
    Page(LaunchPage),
    Status(u16),
}

struct Scripted {
    delay: Duration,
    reply: Reply,
}

/// Scripted in-process source. Replies are queued per label (`"upcoming"` or
/// `"search:<query>"`); an unscripted call answers with an empty page.
#[derive(Default)]
pub struct FakeSource {
    calls: Mutex<Vec<String>>,
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    by_id: Mutex<HashMap<String, (Duration, Launch)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, label: &str, delay: Duration, reply: Reply) {
        self.script
            .lock()
            .unwrap()
            .entry(label.to_string())
            .or_default()
            .push_back(Scripted { delay, reply });
    }

    pub fn insert(&self, launch: Launch, delay: Duration) {
        self.by_id
            .lock()
            .unwrap()
            .insert(launch.id.to_string(), (delay, launch));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, label: String) -> Result<LaunchPage, SourceError> {
        self.calls.lock().unwrap().push(label.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(&label)
            .and_then(|q| q.pop_front());
        let Some(Scripted { delay, reply }) = next else {
            return Ok(LaunchPage::default());
        };
        tokio::time::sleep(delay).await;
        match reply {
            Reply::Page(page) => Ok(page),
            Reply::Status(status) => Err(SourceError::Status { status }),
        }
    }
}

#[async_trait::async_trait]
impl LaunchSource for FakeSource {
    async fn list_upcoming(&self, _limit: u32, _offset: u32) -> Result<LaunchPage, SourceError> {
        self.answer("upcoming".into()).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Launch, SourceError> {
        self.calls.lock().unwrap().push(format!("get:{id}"));
        let found = self.by_id.lock().unwrap().get(id).cloned();
        match found {
            Some((delay, launch)) => {
                tokio::time::sleep(delay).await;
                Ok(launch)
            }
            None => Err(SourceError::Status { status: 404 }),
        }
    }

    async fn search(&self, query: &str, _limit: u32) -> Result<LaunchPage, SourceError> {
        self.answer(format!("search:{query}")).await
    }
}

/// Backend whose every call fails.
pub struct BrokenStore;

#[async_trait::async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk unplugged")))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk unplugged")))
    }
}

/// In-memory backend whose reads take `read_delay`.
pub struct SlowStore {
    inner: launchlens_persistence::MemoryKeyValueStore,
    read_delay: Duration,
}

impl SlowStore {
    pub fn new(read_delay: Duration) -> Self {
        Self {
            inner: launchlens_persistence::MemoryKeyValueStore::new(),
            read_delay,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        tokio::time::sleep(self.read_delay).await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.inner.set(key, value).await
    }
}
