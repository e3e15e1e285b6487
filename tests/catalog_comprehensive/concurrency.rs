//! Concurrency: mutations serialize, readers see atomic transitions.

use std::collections::HashSet;
use std::thread;

use cinedb::DeleteSelector;

use crate::test_utils::{draft, open_empty};

#[test]
fn concurrent_creates_assign_unique_ids() {
    let (_dir, catalog) = open_empty();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    catalog.create(draft(&format!("movie-{t}-{i}"))).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let all = catalog.movies(None, None);
    assert_eq!(all.len(), 40);
    let ids: HashSet<u64> = all.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 40);
    assert_eq!(catalog.next_id(), 41);
}

#[test]
fn readers_never_observe_a_half_applied_mutation() {
    let (_dir, catalog) = open_empty();
    for i in 0..20 {
        catalog.create(draft(&format!("seed-{i}"))).unwrap();
    }

    let writer = {
        let catalog = catalog.clone();
        thread::spawn(move || {
            for i in 0..20 {
                catalog.create(draft(&format!("extra-{i}"))).unwrap();
                catalog
                    .delete(&DeleteSelector::by_title(format!("extra-{i}")))
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = catalog.movies(None, None);
                    // Each create/delete pair is atomic: a snapshot holds
                    // either 20 or 21 records, never a duplicate id.
                    assert!(snapshot.len() == 20 || snapshot.len() == 21);
                    let ids: HashSet<u64> = snapshot.iter().map(|m| m.id).collect();
                    assert_eq!(ids.len(), snapshot.len());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(catalog.len(), 20);
}
