use super::common::*;
use crate::receipts::domain::ReceiptId;
use crate::receipts::repository::{InMemoryReceiptRepository, ReceiptRepository};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn put_assigns_an_id_and_get_returns_the_record() {
    let repository = InMemoryReceiptRepository::new();
    assert!(repository.is_empty().expect("len available"));

    let id = repository
        .put(target_receipt(), 28)
        .expect("insert succeeds");
    assert!(!id.as_str().is_empty());

    let record = repository
        .get(&id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(record.id, id);
    assert_eq!(record.points, 28);
    assert_eq!(record.receipt, target_receipt());
    assert_eq!(repository.len().expect("len available"), 1);
}

#[test]
fn repeated_lookups_return_the_same_points() {
    let repository = InMemoryReceiptRepository::new();
    let id = repository
        .put(corner_market_receipt(), 109)
        .expect("insert succeeds");

    for _ in 0..5 {
        let record = repository
            .get(&id)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(record.points, 109);
    }
}

#[test]
fn sequential_puts_never_reuse_ids() {
    let repository = InMemoryReceiptRepository::new();

    let ids: HashSet<ReceiptId> = (0..200)
        .map(|_| repository.put(neutral_receipt(), 0).expect("insert succeeds"))
        .collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(repository.len().expect("len available"), 200);
}

#[test]
fn concurrent_puts_yield_distinct_ids() {
    let repository = Arc::new(InMemoryReceiptRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let repository = Arc::clone(&repository);
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        repository
                            .put(morning_receipt(), worker)
                            .expect("insert succeeds")
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("worker finished") {
            assert!(ids.insert(id), "duplicate id issued");
        }
    }

    assert_eq!(ids.len(), 400);
    assert_eq!(repository.len().expect("len available"), 400);
}

#[test]
fn unknown_and_malformed_ids_are_misses() {
    let repository = InMemoryReceiptRepository::new();
    repository
        .put(target_receipt(), 28)
        .expect("insert succeeds");

    let unknown = ReceiptId("7fb1377b-b223-49d9-a31a-5a02701dd310".to_string());
    assert!(repository.get(&unknown).expect("fetch succeeds").is_none());

    let malformed = ReceiptId("not an id".to_string());
    assert!(repository.get(&malformed).expect("fetch succeeds").is_none());
}

#[test]
fn clones_share_the_same_map() {
    let repository = InMemoryReceiptRepository::new();
    let handle = repository.clone();

    let id = handle.put(target_receipt(), 28).expect("insert succeeds");

    assert!(repository.get(&id).expect("fetch succeeds").is_some());
}
