//! Backing-document behavior: reopen, normalization, load policy.

use cinedb::{Catalog, CatalogError, DeleteSelector, Movie, StoreConfig};
use tempfile::TempDir;

use crate::test_utils::{draft, init_tracing, open_seeded};

#[test]
fn mutations_survive_reopen() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");

    {
        let catalog = Catalog::open(StoreConfig::at(&path)).unwrap();
        catalog.create(draft("A")).unwrap();
        catalog.create(draft("B")).unwrap();
        catalog.delete(&DeleteSelector::by_title("A")).unwrap();
    }

    let reopened = Catalog::open(StoreConfig::at(&path)).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.movies(None, None)[0].title, "B");
}

#[test]
fn joined_strings_are_normalized_and_written_back_as_lists() {
    let (dir, catalog) = open_seeded(
        r#"[{"id":1,"title":"X","genre":"Action, Drama","actors":"A, B ,"}]"#,
    );

    let record = catalog.movie(1).unwrap();
    assert_eq!(record.genre, vec!["Action", "Drama"]);
    assert_eq!(record.actors, vec!["A", "B"]);

    // Any mutation rewrites the document with list-shaped fields.
    catalog.create(draft("Y")).unwrap();
    let raw = std::fs::read(dir.path().join("catalog.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(doc[0]["genre"], serde_json::json!(["Action", "Drama"]));
    assert_eq!(doc[0]["actors"], serde_json::json!(["A", "B"]));
}

#[test]
fn fail_open_hides_a_malformed_document() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "]]garbage[[").unwrap();

    let catalog = Catalog::open(StoreConfig::at(&path)).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn strict_policy_surfaces_a_malformed_document() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "]]garbage[[").unwrap();

    let err = Catalog::open(StoreConfig::at(&path).strict()).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[test]
fn every_mutation_rewrites_the_whole_document() {
    // Persistence is a full overwrite in place: after each mutation the
    // document on disk equals the entire live collection, nothing appended
    // or journaled. A crash mid-write corrupting the file is out of scope;
    // this pins the overwrite semantics.
    let (dir, catalog) = open_seeded(r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#);
    catalog.delete(&DeleteSelector::by_id(1)).unwrap();

    let raw = std::fs::read(dir.path().join("catalog.json")).unwrap();
    let doc: Vec<Movie> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc[0].id, 2);
}
