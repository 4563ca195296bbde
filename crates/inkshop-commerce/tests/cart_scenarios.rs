//! End-to-end cart scenarios driven through command dispatch.

use std::cell::Cell;
use std::rc::Rc;

use inkshop_cache::{KvStore, MemoryStore};
use inkshop_commerce::prelude::*;

fn sleeve() -> Product {
    Product::new("a", "Sleeve", 5000, "🖊")
}

#[test]
fn adding_the_same_product_twice_bumps_quantity() {
    let mut cart = CartManager::load(MemoryStore::new(), ShopConfig::default());

    cart.dispatch(CartCommand::Add(sleeve()));
    cart.dispatch(CartCommand::Add(sleeve()));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].id.as_str(), "a");
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.compute_total(), 10000);
    assert_eq!(cart.compute_count(), 2);
}

#[test]
fn decrementing_the_last_unit_empties_the_cart() {
    let store = MemoryStore::new();
    {
        let mut cart = CartManager::load(store.clone(), ShopConfig::default());
        cart.dispatch(CartCommand::Add(Product::new("a", "Sleeve", 3000, "🖊")));
    }

    let mut cart = CartManager::load(store, ShopConfig::default());
    assert_eq!(cart.items()[0].quantity, 1);

    cart.dispatch(CartCommand::Decrement("a".into()));

    assert!(cart.cart().is_empty());
    assert_eq!(cart.compute_total(), 0);
    assert!(!cart.view().checkout_enabled);
}

#[test]
fn checkout_hands_off_without_clearing() {
    let notifier = RecordingNotifier::new();
    let mut cart = CartManager::load(MemoryStore::new(), ShopConfig::default())
        .with_notifier(notifier.clone());
    cart.dispatch(CartCommand::Add(sleeve()));
    cart.dispatch(CartCommand::Increment("a".into()));

    let transition = cart.dispatch(CartCommand::Checkout);

    let link = transition.open_link.expect("non-empty cart yields a link");
    assert!(link.message().contains("Sleeve x2 - 10000"));
    assert!(link.message().contains("Ukupno: 10000"));
    assert!(link.url().starts_with("https://wa.me/381601234567?text="));
    assert_eq!(CheckoutLink::TARGET, "_blank");
    assert!(!transition.cart_changed);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);

    let last = notifier.notifications().pop().unwrap();
    assert_eq!(last.message, "Preusmjeravamo vas na WhatsApp...");
}

#[test]
fn cart_survives_reload() {
    let store = MemoryStore::new();
    let mut cart = CartManager::load(store.clone(), ShopConfig::default());
    cart.dispatch(CartCommand::Add(Product::new("b", "Flash", 3000, "⚡")));
    cart.dispatch(CartCommand::Add(sleeve()));
    cart.dispatch(CartCommand::Add(Product::new("b", "Flash", 3000, "⚡")));
    cart.dispatch(CartCommand::Add(Product::new("c", "Aftercare", 900, "🧴")));
    cart.dispatch(CartCommand::Remove("c".into()));

    let reloaded = CartManager::load(store, ShopConfig::default());

    assert_eq!(reloaded.cart(), cart.cart());
    let ids: Vec<&str> = reloaded.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(!reloaded.is_open());
}

#[test]
fn missing_or_corrupt_storage_yields_empty_cart() {
    let cart = CartManager::load(MemoryStore::new(), ShopConfig::default());
    assert!(cart.cart().is_empty());

    for payload in ["", "{", "null", r#"{"items": []}"#, r#"[{"id": "a", "price": "free"}]"#] {
        let store = MemoryStore::new();
        store.set_raw("tattoo-cart", payload).unwrap();
        let cart = CartManager::load(store, ShopConfig::default());
        assert!(cart.cart().is_empty(), "payload {payload:?} should load empty");
    }
}

#[test]
fn legacy_payload_loads() {
    let store = MemoryStore::new();
    store
        .set_raw(
            "tattoo-cart",
            r#"[{"id":"2","name":"Mini tattoo","price":4000,"icon":"✒️","quantity":3}]"#,
        )
        .unwrap();

    let cart = CartManager::load(store, ShopConfig::default());
    let view = cart.view();

    assert_eq!(cart.compute_total(), 12000);
    assert_eq!(view.rows[0].name, "Mini tattoo");
    assert_eq!(view.total_display, "12.000 RSD");
    assert_eq!(view.badge.count, 3);
}

#[test]
fn malformed_product_is_accepted() {
    let mut cart = CartManager::load(MemoryStore::new(), ShopConfig::default());

    cart.dispatch(CartCommand::Add(Product::default()));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].name, "");
    assert_eq!(cart.compute_count(), 1);
}

#[test]
fn every_render_matches_state() {
    let renders = Rc::new(Cell::new(0));
    let counter = Rc::clone(&renders);

    let mut cart = CartManager::load(MemoryStore::new(), ShopConfig::default());
    cart.subscribe(move |view| {
        counter.set(counter.get() + 1);
        let total: i64 = view
            .rows
            .iter()
            .map(|row| row.quantity)
            .sum();
        assert_eq!(view.badge.count, total);
        assert_eq!(view.badge.visible, total > 0);
        assert_eq!(view.checkout_enabled, !view.rows.is_empty());
    });

    cart.dispatch(CartCommand::Add(sleeve()));
    cart.dispatch(CartCommand::Add(Product::new("b", "Flash", 3000, "⚡")));
    cart.dispatch(CartCommand::UpdateQuantity { id: "a".into(), delta: 3 });
    cart.dispatch(CartCommand::Remove("b".into()));
    cart.dispatch(CartCommand::UpdateQuantity { id: "a".into(), delta: -10 });

    assert_eq!(renders.get(), 5);
}
