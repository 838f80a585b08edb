use std::sync::Arc;

use cart_store::prelude::*;
use serde_json::json;

#[test]
fn test_arc_store_is_shared_between_handles() {
    let store = Arc::new(MemoryStore::new());
    let writer = Arc::clone(&store);

    writer.put("phpcart_cart", json!([{"id": 1}])).unwrap();

    assert_eq!(store.get("phpcart_cart").unwrap(), Some(json!([{"id": 1}])));
}

#[test]
fn test_session_over_arc_store() {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(SessionId::new("checkout"), Arc::clone(&store));

    session.put("wishlist_cart", json!([])).unwrap();

    assert!(session.has("wishlist_cart").unwrap());
    assert!(store.has("session:checkout:wishlist_cart").unwrap());
    assert!(!store.has("wishlist_cart").unwrap());
}

#[test]
fn test_dyn_store() {
    let store: Box<dyn SessionStore> = Box::new(MemoryStore::new());
    let by_ref: &dyn SessionStore = store.as_ref();

    by_ref.put("k", json!("v")).unwrap();
    assert_eq!(by_ref.get_or("k", json!(null)).unwrap(), json!("v"));
}
