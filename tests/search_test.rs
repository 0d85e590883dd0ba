use berth::store::{Server, ServerStore};
use tempfile::TempDir;

fn seeded_store() -> (TempDir, ServerStore) {
    let tmp = TempDir::new().unwrap();
    let store = ServerStore::new(tmp.path().join("servers.db"));
    (tmp, store)
}

#[test]
fn search_returns_matches_in_scan_order() {
    let (_tmp, store) = seeded_store();
    store.put(&Server::new("a", "h1")).unwrap();
    store.put(&Server::new("b", "h1-test")).unwrap();

    let aliases: Vec<String> = store
        .search("h1")
        .unwrap()
        .into_iter()
        .map(|s| s.alias)
        .collect();
    assert_eq!(aliases, ["a", "b"]);
}

#[test]
fn empty_query_returns_every_record() {
    let (_tmp, store) = seeded_store();
    store.put(&Server::new("a", "h1")).unwrap();
    store.put(&Server::new("b", "h2")).unwrap();
    assert_eq!(store.search("").unwrap().len(), 2);
}

#[test]
fn zero_matches_is_empty_not_an_error() {
    let (_tmp, store) = seeded_store();
    store.put(&Server::new("a", "h1")).unwrap();
    assert!(store.search("zz").unwrap().is_empty());
}

#[test]
fn search_is_case_insensitive_end_to_end() {
    let (_tmp, store) = seeded_store();
    store.put(&Server::new("Edge", "EU.example.com")).unwrap();

    assert_eq!(store.search("edge").unwrap().len(), 1);
    assert_eq!(store.search("eu.EXAMPLE").unwrap().len(), 1);
}

#[test]
fn search_covers_notes() {
    let (_tmp, store) = seeded_store();
    let mut server = Server::new("a", "h1");
    server.notes = "behind the office VPN".into();
    store.put(&server).unwrap();

    assert_eq!(store.search("office vpn").unwrap().len(), 1);
}
