//! Record lifecycle: create, update, delete, and id assignment.

use cinedb::{DeleteSelector, MoviePatch, MutationStatus};

use crate::test_utils::{draft, ids, open_empty, open_seeded};

#[test]
fn scenario_search_create_delete() {
    // Seeded collection: two records, ids 1 and 2.
    let (_dir, catalog) = open_seeded(
        r#"[
            {"id":1,"title":"A","year":2000,"rating":7.0},
            {"id":2,"title":"B","year":2008,"rating":9.0}
        ]"#,
    );

    // search(minRating: 8.0) -> only B
    let hits = catalog.search(&cinedb::SearchFilter::new().min_rating(8.0), None);
    assert_eq!(ids(&hits), vec![2]);

    // create -> assigns id 3
    let created = catalog.create(draft("C")).unwrap();
    assert_eq!(created.movie.unwrap().id, 3);

    // delete(id: 2) -> id 2 is not the max, so the next id stays 4
    let deleted = catalog.delete(&DeleteSelector::by_id(2)).unwrap();
    assert!(deleted.succeeded());
    assert_eq!(catalog.next_id(), 4);
}

#[test]
fn next_id_reuses_released_max() {
    let (_dir, catalog) = open_seeded(
        r#"[{"id":1,"title":"A"},{"id":3,"title":"B"},{"id":5,"title":"C"}]"#,
    );
    assert_eq!(catalog.next_id(), 6);

    catalog.delete(&DeleteSelector::by_id(5)).unwrap();
    assert_eq!(catalog.next_id(), 5);

    let replacement = catalog.create(draft("D")).unwrap();
    assert_eq!(replacement.movie.unwrap().id, 5);
}

#[test]
fn next_id_on_empty_catalog_is_one() {
    let (_dir, catalog) = open_empty();
    assert_eq!(catalog.next_id(), 1);
}

#[test]
fn create_appends_at_the_end() {
    let (_dir, catalog) = open_seeded(r#"[{"id":9,"title":"Last"}]"#);
    catalog.create(draft("Newer")).unwrap();

    let all = catalog.movies(None, None);
    assert_eq!(all.last().unwrap().title, "Newer");
    assert_eq!(all.last().unwrap().id, 10);
}

#[test]
fn update_changes_only_supplied_fields() {
    let (_dir, catalog) = open_empty();
    catalog.create(draft("A")).unwrap();

    let patch = MoviePatch {
        rating: Some(9.5),
        votes: Some(1000),
        ..MoviePatch::default()
    };
    let outcome = catalog.update(1, &patch).unwrap();
    assert!(outcome.succeeded());

    let record = catalog.movie(1).unwrap();
    assert_eq!(record.rating, 9.5);
    assert_eq!(record.votes, 1000);
    assert_eq!(record.title, "A");
    assert_eq!(record.genre, vec!["Drama"]);
    assert_eq!(record.director, "Someone");
}

#[test]
fn update_absent_record_reports_not_found() {
    let (_dir, catalog) = open_empty();
    let outcome = catalog.update(1, &MoviePatch::default()).unwrap();
    assert_eq!(outcome.status, MutationStatus::NotFound);
    assert!(outcome.movie.is_none());
    assert!(!outcome.message.is_empty());
}

#[test]
fn delete_by_title_is_exact_and_case_insensitive() {
    let (_dir, catalog) = open_empty();
    catalog.create(draft("The Dark Knight")).unwrap();
    catalog.create(draft("The Dark Knight Rises")).unwrap();

    let outcome = catalog
        .delete(&DeleteSelector::by_title("the dark knight"))
        .unwrap();
    assert_eq!(outcome.movie.unwrap().title, "The Dark Knight");

    // The non-exact sibling survives.
    assert!(catalog.movie_by_title("The Dark Knight Rises").is_some());
}

#[test]
fn delete_without_identifier_does_not_mutate() {
    let (_dir, catalog) = open_empty();
    catalog.create(draft("A")).unwrap();

    let outcome = catalog.delete(&DeleteSelector::default()).unwrap();
    assert_eq!(outcome.status, MutationStatus::MissingIdentifier);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn clones_share_the_same_collection() {
    let (_dir, catalog) = open_empty();
    let other = catalog.clone();

    catalog.create(draft("Shared")).unwrap();
    assert_eq!(other.len(), 1);
    assert!(other.movie_by_title("Shared").is_some());
}
