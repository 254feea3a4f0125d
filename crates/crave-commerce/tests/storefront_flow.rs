//! End-to-end storefront scenarios over the built-in menu.

use std::sync::Arc;

use crave_commerce::prelude::*;

fn store() -> Storefront<RecordingNotifier> {
    Storefront::new(Arc::new(Catalog::builtin().unwrap()), RecordingNotifier::new())
}

#[test]
fn flavored_meal_scenario() {
    let mut store = store();

    let outcome = store.request_add(&ProductId::new("m1")).unwrap();
    assert_eq!(outcome, AddOutcome::FlavorRequired);
    assert!(store.view().panels.flavor);

    store.confirm_flavor("Garlic").unwrap();
    let view = store.view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].price, Money::new(100));
    assert_eq!(view.items[0].quantity, 1);
    assert_eq!(view.items[0].flavor.as_deref(), Some("Garlic"));

    store.request_add(&ProductId::new("m1")).unwrap();
    store.confirm_flavor("Garlic").unwrap();
    let view = store.view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.subtotal, Money::new(200));
}

#[test]
fn same_product_different_flavors() {
    let mut store = store();
    for flavor in ["Original", "Garlic", "24 Cheddar"] {
        store.request_add(&ProductId::new("m2")).unwrap();
        store.confirm_flavor(flavor).unwrap();
    }

    let view = store.view();
    let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["m2-Original", "m2-Garlic", "m2-24 Cheddar"]);
    assert_eq!(view.subtotal, Money::new(130 + 135 + 140));
}

#[test]
fn quantity_never_drops_below_one() {
    let mut store = store();
    store.request_add(&ProductId::new("c5")).unwrap();
    let id = CartItemId::new("c5");

    for delta in [-1, -10, i64::MIN, 3, -2] {
        store.update_quantity(&id, delta);
        let qty = store.cart().get(&id).unwrap().quantity;
        assert!(qty >= 1, "quantity {qty} after delta {delta}");
    }
    assert_eq!(store.cart().get(&id).unwrap().quantity, 2);
}

#[test]
fn remove_twice_is_harmless() {
    let mut store = store();
    store.request_add(&ProductId::new("nc2")).unwrap();
    let id = CartItemId::new("nc2");

    assert!(store.remove(&id));
    assert!(!store.remove(&id));
    assert_eq!(store.item_count(), 0);
}

#[test]
fn subtotal_matches_lines_after_each_step() {
    let mut store = store();
    let script = "\
add c1
add c1
add m3
flavor Snow Cheese
add nc6
qty c1 +4
qty nc6 -9
remove m3-Snow Cheese
add m4
flavor Original
";
    for intent in Intent::parse_script(script).unwrap() {
        store.dispatch(intent).unwrap();
        let expected: Money = store.items().iter().map(|i| i.price * i.quantity).sum();
        assert_eq!(store.subtotal(), expected);
        let count: i64 = store.items().iter().map(|i| i.quantity).sum();
        assert_eq!(store.item_count(), count);
    }
    assert_eq!(store.subtotal(), Money::new(39 * 6 + 39 + 170));
}

#[test]
fn meal_filter_lists_four_meals() {
    let mut store = store();
    store.set_category("meal".parse().unwrap());
    store.set_search_query("");

    let view = store.view();
    assert_eq!(view.products.len(), 4);
    assert!(view.products.iter().all(|p| p.category == Category::Meal));
}

#[test]
fn matcha_search_crosses_categories() {
    let mut store = store();
    store.set_search_query("matcha");

    let view = store.view();
    let categories: std::collections::HashSet<Category> =
        view.products.iter().map(|p| p.category).collect();
    assert!(categories.contains(&Category::WithCoffee));
    assert!(categories.contains(&Category::NoCoffee));
    for product in &view.products {
        let text = format!("{} {}", product.name, product.description).to_lowercase();
        assert!(text.contains("matcha"), "{}", product.id);
    }
}

#[test]
fn checkout_confirm_empties_cart() {
    let mut store = store();
    store.request_add(&ProductId::new("c3")).unwrap();
    store.request_add(&ProductId::new("m1")).unwrap();
    store.confirm_flavor("Jack Daniels").unwrap();

    assert!(store.checkout());
    let summary = store.confirm_order().unwrap();
    assert_eq!(summary.subtotal, Money::new(39 + 100));
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.notifier().orders(), vec![summary]);

    // Nothing left to confirm.
    assert!(!store.checkout());
    assert!(store.confirm_order().is_none());
    assert_eq!(store.notifier().count(), 1);
}

#[test]
fn view_serializes_to_json() {
    let mut store = store();
    store.request_add(&ProductId::new("m1")).unwrap();

    let json = store.view().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pending_product"]["id"], "m1");
    assert_eq!(value["category"], "all");
    assert_eq!(value["panels"]["flavor"], true);
    assert_eq!(value["lines"].as_array().unwrap().len(), 0);
}

#[test]
fn view_lines_follow_cart_order() {
    let mut store = store();
    store.request_add(&ProductId::new("c4")).unwrap();
    store.request_add(&ProductId::new("m2")).unwrap();
    store.confirm_flavor("Dark Truffle").unwrap();
    store.update_quantity(&CartItemId::new("c4"), 2);

    let view = store.view();
    let totals: Vec<(&str, i64, Money)> = view
        .lines
        .iter()
        .map(|l| (l.item_id.as_str(), l.quantity, l.total))
        .collect();
    assert_eq!(
        totals,
        vec![("c4", 3, Money::new(117)), ("m2-Dark Truffle", 1, Money::new(140))]
    );
    assert_eq!(view.subtotal, Money::new(257));
}

#[test]
fn emptying_cart_during_checkout_closes_it() {
    let mut store = store();
    let script = "\
add m1
flavor Garlic
add m1
flavor Garlic
checkout
remove m1-Garlic
confirm
";
    for intent in Intent::parse_script(script).unwrap() {
        store.dispatch(intent).unwrap();
    }

    let view = store.view();
    assert_eq!(view.item_count, 0);
    assert_eq!(view.panels, Panels::default());
    assert_eq!(store.notifier().count(), 0);
}
