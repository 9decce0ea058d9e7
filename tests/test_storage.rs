//! Cart persistence: round-trips through storage and fallback on bad data.

mod common;

use storefront_sdk::storage::{CartStorage, FileStorage, MemoryStorage};
use storefront_sdk::CartEngine;

// ---------------------------------------------------------------------------
// round-trip
// ---------------------------------------------------------------------------

#[test]
fn cart_round_trips_through_file_storage() {
    let tmp = tempfile::tempdir().unwrap();

    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let mut cart = CartEngine::load(Box::new(storage));
    cart.add_to_cart(&common::widget());
    cart.add_to_cart(&common::widget());
    cart.add_to_cart(&common::gadget());

    // A second engine over the same file sees the same cart.
    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let reloaded = CartEngine::load(Box::new(storage));

    assert_eq!(reloaded.cart_count(), 3);
    assert_eq!(reloaded.cart_total(), 500 * 2 + 2_450);
    assert_eq!(reloaded.items(), cart.items());
}

#[test]
fn every_mutation_is_persisted() {
    let tmp = tempfile::tempdir().unwrap();

    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let mut cart = CartEngine::load(Box::new(storage));
    cart.add_to_cart(&common::widget());
    cart.add_to_cart(&common::gadget());
    cart.update_quantity("p1", 4);
    cart.remove_from_cart("p2");

    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let reloaded = CartEngine::load(Box::new(storage));

    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].id, "p1");
    assert_eq!(reloaded.items()[0].quantity, 4);
}

#[test]
fn clear_cart_persists_the_empty_state() {
    let tmp = tempfile::tempdir().unwrap();

    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let mut cart = CartEngine::load(Box::new(storage));
    cart.add_to_cart(&common::widget());
    cart.clear_cart();

    let storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    let reloaded = CartEngine::load(Box::new(storage));
    assert!(reloaded.is_empty());
}

// ---------------------------------------------------------------------------
// fallback on missing or malformed data
// ---------------------------------------------------------------------------

#[test]
fn missing_storage_yields_an_empty_cart() {
    let cart = CartEngine::load(Box::new(MemoryStorage::new()));
    assert!(cart.is_empty());
    assert_eq!(cart.cart_total(), 0);
}

#[test]
fn malformed_json_yields_an_empty_cart() {
    let cart = CartEngine::load(Box::new(MemoryStorage::with_document("{not json")));
    assert!(cart.is_empty());
}

#[test]
fn wrong_shape_yields_an_empty_cart() {
    // Valid JSON, but not an array of cart items.
    let cart = CartEngine::load(Box::new(MemoryStorage::with_document(
        r#"{"cart": "nope"}"#,
    )));
    assert!(cart.is_empty());
}

#[test]
fn stored_items_with_nonpositive_quantity_are_dropped() {
    let document = r#"[
        {"id":"p1","name":"Widget","image":"/img/widget.png","price":500,"quantity":2},
        {"id":"p2","name":"Gadget","image":"/img/gadget.png","price":2450,"quantity":0}
    ]"#;
    let cart = CartEngine::load(Box::new(MemoryStorage::with_document(document)));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].id, "p1");
}

// ---------------------------------------------------------------------------
// storage backends
// ---------------------------------------------------------------------------

#[test]
fn file_storage_reports_missing_document_as_none() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();
    assert!(storage.read().unwrap().is_none());
}

#[test]
fn file_storage_clear_removes_the_document() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(Some(tmp.path().to_path_buf()), "cart").unwrap();

    storage.write("[]").unwrap();
    assert!(storage.read().unwrap().is_some());

    storage.clear().unwrap();
    assert!(storage.read().unwrap().is_none());
}

#[test]
fn file_storage_keys_do_not_collide() {
    let tmp = tempfile::tempdir().unwrap();
    let mut a = FileStorage::new(Some(tmp.path().to_path_buf()), "cart-a").unwrap();
    let mut b = FileStorage::new(Some(tmp.path().to_path_buf()), "cart-b").unwrap();

    a.write("[1]").unwrap();
    b.write("[2]").unwrap();

    assert_eq!(a.read().unwrap().unwrap(), "[1]");
    assert_eq!(b.read().unwrap().unwrap(), "[2]");
}
