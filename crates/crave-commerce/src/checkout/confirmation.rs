//! Checkout confirmation step.

use crate::cart::CartLedger;
use crate::checkout::{OrderNotifier, OrderSummary};
use serde::{Deserialize, Serialize};

/// Whether the confirmation step is showing.
///
/// Confirming is the only way an order leaves the storefront: it notifies
/// the collaborator once, then empties the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfirmation {
    open: bool,
}

impl CheckoutConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the confirmation step. Refused for an empty cart.
    pub fn open(&mut self, cart: &CartLedger) -> bool {
        if cart.is_empty() {
            return false;
        }
        self.open = true;
        true
    }

    /// Summary to show while the step is open.
    pub fn summary(&self, cart: &CartLedger) -> Option<OrderSummary> {
        self.open.then(|| OrderSummary::from_cart(cart))
    }

    /// Close the step if the cart it was opened for has been emptied.
    pub fn close_if_empty(&mut self, cart: &CartLedger) {
        if self.open && cart.is_empty() {
            tracing::debug!("Cart emptied, closing checkout");
            self.open = false;
        }
    }

    /// Place the order.
    ///
    /// Requires the step to be open and the cart to be non-empty; otherwise
    /// nothing is placed and `None` is returned. An open step over an empty
    /// cart is closed.
    pub fn confirm<N: OrderNotifier + ?Sized>(
        &mut self,
        cart: &mut CartLedger,
        notifier: &N,
    ) -> Option<OrderSummary> {
        self.close_if_empty(cart);
        if !self.open {
            return None;
        }

        let summary = OrderSummary::from_cart(cart);
        notifier.order_placed(&summary);
        tracing::info!(
            lines = summary.items.len(),
            items = summary.item_count,
            subtotal = summary.subtotal.amount(),
            "Order placed"
        );

        cart.clear();
        self.open = false;
        Some(summary)
    }

    /// Close the step without touching the cart.
    pub fn cancel(&mut self) {
        self.open = false;
    }
}
