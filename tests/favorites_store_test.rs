//! FavoritesStore persistence across process restarts

use cinefinder_lib::modules::catalog::MovieSummary;
use cinefinder_lib::modules::favorites::{
    FavoritesStorage, FavoritesStore, FileFavoritesStorage, InMemoryFavoritesStorage,
    FAVORITES_KEY,
};
use std::sync::Arc;

fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary::new(id, title)
        .with_release_date("2010-07-15")
        .with_poster_path("/poster.jpg")
        .with_vote_average(8.4)
}

fn ids(store: &FavoritesStore) -> Vec<u64> {
    store.list().into_iter().map(|entry| entry.id).collect()
}

#[test]
fn favorites_survive_restart_in_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = Arc::new(FileFavoritesStorage::new(dir.path()).unwrap());
        let mut store = FavoritesStore::open(storage);
        store.add(&movie(1, "A"));
        store.add(&movie(2, "B"));
        store.remove(1);
        store.add(&movie(1, "A"));
    }

    let storage = Arc::new(FileFavoritesStorage::new(dir.path()).unwrap());
    let store = FavoritesStore::open(storage);
    assert_eq!(ids(&store), vec![2, 1]);

    let entry = &store.list()[1];
    assert_eq!(entry.title, "A");
    assert_eq!(entry.poster_path.as_deref(), Some("/poster.jpg"));
    assert_eq!(entry.vote_average, Some(8.4));
}

#[test]
fn persisted_format_is_plain_json_array() {
    let storage = InMemoryFavoritesStorage::new();
    let mut store = FavoritesStore::open(Arc::new(storage.clone()));
    store.add(&MovieSummary::new(27205, "Inception"));

    let payload = storage.read(FAVORITES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 27205,
            "title": "Inception",
            "release_date": null,
            "poster_path": null,
            "vote_average": null
        }])
    );
}

#[test]
fn reads_payload_written_by_earlier_versions() {
    let storage = InMemoryFavoritesStorage::new();
    storage.insert_raw(
        FAVORITES_KEY,
        r#"[{"id":603,"title":"The Matrix","release_date":"1999-03-30","poster_path":"/m.jpg","vote_average":8.2}]"#,
    );

    let store = FavoritesStore::open(Arc::new(storage));
    assert!(store.contains(603));
    assert_eq!(store.list()[0].to_summary().release_year(), Some("1999"));
}

#[test]
fn corrupt_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", FAVORITES_KEY)),
        "this is not json",
    )
    .unwrap();

    let storage = Arc::new(FileFavoritesStorage::new(dir.path()).unwrap());
    let mut store = FavoritesStore::open(storage.clone());
    assert!(store.is_empty());

    // The next mutation overwrites the corrupt blob
    store.add(&movie(5, "E"));
    let reopened = FavoritesStore::open(storage);
    assert_eq!(ids(&reopened), vec![5]);
}

#[test]
fn reload_picks_up_external_writes() {
    let storage = InMemoryFavoritesStorage::new();
    let mut store = FavoritesStore::open(Arc::new(storage.clone()));
    store.add(&movie(1, "A"));

    storage.insert_raw(FAVORITES_KEY, r#"[{"id":9,"title":"Z"}]"#);
    store.reload();
    assert_eq!(ids(&store), vec![9]);
}
