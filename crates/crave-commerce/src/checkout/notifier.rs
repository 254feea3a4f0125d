//! Order summaries and the "order placed" collaborator.

use std::cell::RefCell;

use crate::cart::{CartItem, CartLedger, LineTotal};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Read-only summary of the cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Lines in cart order.
    pub items: Vec<CartItem>,
    /// Price breakdown, one entry per line.
    pub lines: Vec<LineTotal>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Sum of quantities.
    pub item_count: i64,
}

impl OrderSummary {
    /// Snapshot the current cart.
    pub fn from_cart(cart: &CartLedger) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().to_vec(),
            lines: totals.lines,
            subtotal: totals.subtotal,
            item_count: totals.item_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Receives one call per confirmed order.
pub trait OrderNotifier {
    fn order_placed(&self, summary: &OrderSummary);
}

impl<F> OrderNotifier for F
where
    F: Fn(&OrderSummary),
{
    fn order_placed(&self, summary: &OrderSummary) {
        self(summary)
    }
}

/// Ignores notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl OrderNotifier for NoopNotifier {
    fn order_placed(&self, _summary: &OrderSummary) {}
}

/// Keeps every notification it receives. Useful in tests and replays.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    orders: RefCell<Vec<OrderSummary>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders received so far.
    pub fn orders(&self) -> Vec<OrderSummary> {
        self.orders.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.orders.borrow().len()
    }
}

impl OrderNotifier for RecordingNotifier {
    fn order_placed(&self, summary: &OrderSummary) {
        self.orders.borrow_mut().push(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use std::cell::Cell;

    #[test]
    fn test_summary_from_cart() {
        let catalog = Catalog::builtin().unwrap();
        let mut cart = CartLedger::new();
        let latte = catalog.product(&ProductId::new("c8")).unwrap();
        cart.add_or_increment(latte, None);
        cart.add_or_increment(latte, None);

        let summary = OrderSummary::from_cart(&cart);
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.subtotal, Money::new(78));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].unit_price, Money::new(39));
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.lines[0].total, Money::new(78));
    }

    #[test]
    fn test_closure_notifier() {
        let calls = Cell::new(0);
        let notifier = |_: &OrderSummary| calls.set(calls.get() + 1);
        let summary = OrderSummary::from_cart(&CartLedger::new());

        notifier.order_placed(&summary);
        notifier.order_placed(&summary);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.order_placed(&OrderSummary::from_cart(&CartLedger::new()));
        assert_eq!(notifier.count(), 1);
        assert!(notifier.orders()[0].is_empty());
    }
}
