//! Product-to-cart selection state machine.

use crate::cart::CartLedger;
use crate::catalog::{Flavor, Product, ProductKind};
use crate::ids::CartItemId;
use serde::{Deserialize, Serialize};

/// Where the selection flow currently is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "product", rename_all = "snake_case")]
pub enum SelectionState {
    /// Nothing pending.
    #[default]
    Idle,
    /// A flavored product waits for its flavor.
    AwaitingFlavor(Product),
}

/// What happened to an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product went into the cart; the cart should be shown.
    Added(CartItemId),
    /// The product needs a flavor first; the flavor picker should be shown.
    FlavorRequired,
}

/// Decides whether an add goes straight to the cart or through the
/// flavor picker. At most one product waits for a flavor at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionFlow {
    state: SelectionState,
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The product waiting for a flavor, if any.
    pub fn pending(&self) -> Option<&Product> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::AwaitingFlavor(product) => Some(product),
        }
    }

    /// Ask to add a product.
    ///
    /// Simple products are added at once. Flavored products become the
    /// pending product without touching the cart; a request made while
    /// another product is pending replaces it.
    pub fn request_add(&mut self, product: &Product, cart: &mut CartLedger) -> AddOutcome {
        match product.kind {
            ProductKind::Simple => AddOutcome::Added(cart.add_or_increment(product, None)),
            ProductKind::Flavored => {
                if let Some(previous) = self.pending() {
                    tracing::warn!(
                        previous = %previous.id,
                        product = %product.id,
                        "Replacing product awaiting a flavor"
                    );
                }
                tracing::debug!(product = %product.id, "Awaiting flavor");
                self.state = SelectionState::AwaitingFlavor(product.clone());
                AddOutcome::FlavorRequired
            }
        }
    }

    /// Add the pending product with the chosen flavor and return to idle.
    ///
    /// Does nothing and returns `None` when no product is pending.
    pub fn confirm_flavor(&mut self, flavor: &Flavor, cart: &mut CartLedger) -> Option<CartItemId> {
        match std::mem::take(&mut self.state) {
            SelectionState::Idle => None,
            SelectionState::AwaitingFlavor(product) => {
                tracing::debug!(product = %product.id, flavor = %flavor.name, "Flavor confirmed");
                Some(cart.add_or_increment(&product, Some(flavor)))
            }
        }
    }

    /// Drop the pending product without touching the cart.
    pub fn cancel(&mut self) {
        if let Some(product) = self.pending() {
            tracing::debug!(product = %product.id, "Flavor selection cancelled");
        }
        self.state = SelectionState::Idle;
    }
}
