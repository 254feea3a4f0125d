//! Cart ledger and line item types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::{Flavor, Product};
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Composite key: product id, plus flavor name if any.
    pub id: CartItemId,
    /// Product this line was created from.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price including the flavor delta, fixed when the line was created.
    pub price: Money,
    /// Flavor name, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product, flavor: Option<&Flavor>) -> Self {
        let flavor_price = flavor.map(|f| f.price).unwrap_or_default();
        Self {
            id: CartItemId::compose(&product.id, flavor.map(|f| f.name.as_str())),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price + flavor_price,
            flavor: flavor.map(|f| f.name.clone()),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The cart: an insertion-ordered mapping from cart key to line.
///
/// Every operation is total. Unknown keys are ignored, and quantities never
/// drop below 1; a line only leaves the cart through [`CartLedger::remove`]
/// or [`CartLedger::clear`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, optionally with a flavor.
    ///
    /// Bumps the quantity if the cart key already has a line, otherwise
    /// appends a new line priced at product price plus flavor price.
    pub fn add_or_increment(&mut self, product: &Product, flavor: Option<&Flavor>) -> CartItemId {
        let key = CartItemId::compose(&product.id, flavor.map(|f| f.name.as_str()));

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == key) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(item = %key, quantity = existing.quantity, "Cart line incremented");
            return key;
        }

        let item = CartItem::new(product, flavor);
        tracing::debug!(item = %key, price = item.price.amount(), "Cart line added");
        self.items.push(item);
        key
    }

    /// Change a line's quantity by `delta`, clamping at 1.
    ///
    /// Returns the new quantity, or `None` if no line has that key.
    pub fn update_quantity(&mut self, item_id: &CartItemId, delta: i64) -> Option<i64> {
        let item = self.items.iter_mut().find(|i| &i.id == item_id)?;
        item.quantity = item.quantity.saturating_add(delta).max(1);
        tracing::debug!(item = %item_id, delta, quantity = item.quantity, "Cart quantity updated");
        Some(item.quantity)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, item_id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != item_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(item = %item_id, "Cart line removed");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("Cart cleared");
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by key.
    pub fn get(&self, item_id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Per-line and overall totals.
    pub fn totals(&self) -> CartTotals {
        let lines = self
            .items
            .iter()
            .map(|item| LineTotal {
                item_id: item.id.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        CartTotals {
            lines,
            subtotal: self.subtotal(),
            item_count: self.item_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn latte() -> Product {
        Product::new("c8", "Brown Spanish Latte", "Brown sugar", Money::new(39), Category::WithCoffee)
    }

    fn rm2() -> Product {
        Product::new("m1", "RM2: 2pcs Boneless Chicken", "Chicken", Money::new(95), Category::Meal)
            .flavored()
    }

    fn garlic() -> Flavor {
        Flavor::new("Garlic", Money::new(5))
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartLedger::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = CartLedger::new();
        let id = cart.add_or_increment(&latte(), None);

        assert_eq!(id, CartItemId::new("c8"));
        let item = cart.get(&id).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Money::new(39));
        assert_eq!(item.flavor, None);
        assert_eq!(item.product_id, ProductId::new("c8"));
    }

    #[test]
    fn test_repeated_adds_collapse_into_one_line() {
        let mut cart = CartLedger::new();
        for _ in 0..5 {
            cart.add_or_increment(&rm2(), Some(&garlic()));
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_different_flavors_are_distinct_lines() {
        let mut cart = CartLedger::new();
        let a = cart.add_or_increment(&rm2(), Some(&garlic()));
        let b = cart.add_or_increment(&rm2(), Some(&Flavor::new("Original", Money::zero())));

        assert_ne!(a, b);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.get(&a).unwrap().price, Money::new(100));
        assert_eq!(cart.get(&b).unwrap().price, Money::new(95));
    }

    #[test]
    fn test_price_is_captured_at_insertion() {
        let mut cart = CartLedger::new();
        let mut product = latte();
        cart.add_or_increment(&product, None);

        product.price = Money::new(99);
        cart.add_or_increment(&product, None);

        let item = &cart.items()[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, Money::new(39));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartLedger::new();
        cart.add_or_increment(&latte(), None);
        cart.add_or_increment(&rm2(), Some(&garlic()));
        cart.add_or_increment(&latte(), None);

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c8", "m1-Garlic"]);
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let mut cart = CartLedger::new();
        let id = cart.add_or_increment(&latte(), None);

        assert_eq!(cart.update_quantity(&id, 4), Some(5));
        assert_eq!(cart.update_quantity(&id, -100), Some(1));
        assert_eq!(cart.update_quantity(&id, i64::MIN), Some(1));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_unknown_item_is_noop() {
        let mut cart = CartLedger::new();
        cart.add_or_increment(&latte(), None);
        let before = cart.clone();

        assert_eq!(cart.update_quantity(&CartItemId::new("nope"), 3), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartLedger::new();
        let id = cart.add_or_increment(&latte(), None);

        assert!(cart.remove(&id));
        assert!(!cart.remove(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_follow_every_mutation() {
        let mut cart = CartLedger::new();
        let latte_id = cart.add_or_increment(&latte(), None);
        let meal_id = cart.add_or_increment(&rm2(), Some(&garlic()));
        assert_eq!(cart.subtotal(), Money::new(139));

        cart.update_quantity(&latte_id, 2);
        assert_eq!(cart.subtotal(), Money::new(39 * 3 + 100));
        assert_eq!(cart.item_count(), 4);

        cart.remove(&meal_id);
        assert_eq!(cart.subtotal(), Money::new(117));

        let totals = cart.totals();
        assert_eq!(totals.subtotal, cart.subtotal());
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.lines[0].total, Money::new(117));

        cart.clear();
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }
}
