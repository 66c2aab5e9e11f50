use std::sync::Arc;

use launchlens_core::Launch;
use launchlens_persistence::{FavoritesStore, KeyValueStore, MemoryKeyValueStore};

fn launch(id: &str, name: &str) -> Launch {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "status": {"id": 2, "name": "To Be Determined", "abbrev": "TBD"},
        "net": "2031-05-01T12:00:00Z",
        "launch_service_provider": {"name": "Rocket Lab"},
        "rocket": {"configuration": {"name": "Electron", "full_name": "Electron"}},
        "pad": {"name": "LC-1A", "location": {"name": "Mahia Peninsula"}}
    }))
    .unwrap()
}

fn store() -> FavoritesStore<MemoryKeyValueStore> {
    FavoritesStore::new(Arc::new(MemoryKeyValueStore::new()))
}

#[tokio::test]
async fn empty_until_first_write() {
    let favorites = store();
    assert!(favorites.list().await.unwrap().is_empty());
    assert!(!favorites.contains("anything").await.unwrap());
    assert!(favorites
        .backend()
        .get(launchlens_config::FAVORITES_KEY)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn add_is_idempotent_and_keeps_insertion_order() {
    let favorites = store();
    let a = launch("a", "Alpha");
    let b = launch("b", "Bravo");

    assert!(favorites.add(&a).await.unwrap());
    assert!(favorites.add(&b).await.unwrap());
    let once = favorites.list().await.unwrap();

    assert!(!favorites.add(&a).await.unwrap());
    let twice = favorites.list().await.unwrap();

    assert_eq!(once, twice);
    let ids: Vec<&str> = twice.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn add_then_remove_round_trips_membership() {
    let favorites = store();
    let l = launch("f9-1", "Falcon 9 | Demo");

    favorites.add(&l).await.unwrap();
    assert!(favorites.list().await.unwrap().iter().any(|f| f.id == l.id));
    assert!(favorites.contains("f9-1").await.unwrap());

    assert!(favorites.remove("f9-1").await.unwrap());
    assert!(!favorites.list().await.unwrap().iter().any(|f| f.id == l.id));
    assert!(!favorites.contains("f9-1").await.unwrap());
}

#[tokio::test]
async fn removing_unknown_id_leaves_the_set_unchanged() {
    let favorites = store();
    favorites.add(&launch("keep", "Keep")).await.unwrap();

    assert!(!favorites.remove("missing").await.unwrap());
    assert!(!favorites.contains("missing").await.unwrap());
    assert_eq!(favorites.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unparseable_blob_reads_as_empty() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    backend
        .set(launchlens_config::FAVORITES_KEY, b"{not json".to_vec())
        .await
        .unwrap();
    let favorites = FavoritesStore::new(backend.clone());

    assert!(favorites.list().await.unwrap().is_empty());
    assert!(!favorites.contains("a").await.unwrap());

    // The next write replaces the unreadable value.
    favorites.add(&launch("a", "Alpha")).await.unwrap();
    assert_eq!(favorites.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn wrong_shape_reads_as_empty() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    backend
        .set(
            launchlens_config::FAVORITES_KEY,
            br#"[{"id": "a", "name": "missing everything else"}]"#.to_vec(),
        )
        .await
        .unwrap();

    let favorites = FavoritesStore::new(backend);
    assert!(favorites.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_drops_every_entry_with_the_id() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let dup = vec![launch("x", "One"), launch("y", "Other"), launch("x", "Two")];
    backend
        .set(
            launchlens_config::FAVORITES_KEY,
            serde_json::to_vec(&dup).unwrap(),
        )
        .await
        .unwrap();
    let favorites = FavoritesStore::new(backend);

    assert!(favorites.remove("x").await.unwrap());
    let left = favorites.list().await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, "y");
}

#[tokio::test]
async fn separate_keys_do_not_share_entries() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let main = FavoritesStore::new(backend.clone());
    let other = FavoritesStore::with_key(backend, "other_favorites");

    main.add(&launch("a", "Alpha")).await.unwrap();
    assert!(other.list().await.unwrap().is_empty());
}
