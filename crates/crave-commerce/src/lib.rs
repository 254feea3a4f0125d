//! Storefront domain types and logic for Cave Crave.
//!
//! This crate holds everything the storefront does apart from rendering:
//!
//! - **Catalog**: Products, flavors, categories, and load-time validation
//! - **Cart**: The cart ledger with composite-key line items and totals
//! - **Selection**: The product-to-cart pipeline with its flavor step
//! - **Search**: Category filter and free-text search over the catalog
//! - **Checkout**: Order confirmation and the "order placed" notifier
//! - **Storefront**: Owned state, intents, and read-only views
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use crave_commerce::prelude::*;
//!
//! let catalog = Arc::new(Catalog::builtin().unwrap());
//! let mut store = Storefront::new(catalog, NoopNotifier);
//!
//! // A meal needs a flavor before it lands in the cart.
//! store.request_add(&ProductId::new("m1")).unwrap();
//! assert!(store.view().pending_product.is_some());
//!
//! store.confirm_flavor("Garlic").unwrap();
//! let view = store.view();
//! assert_eq!(view.item_count, 1);
//! assert_eq!(view.subtotal, Money::new(100));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod selection;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogData, Category, Flavor, Product, ProductKind};

    // Cart
    pub use crate::cart::{CartItem, CartLedger, CartTotals, LineTotal};

    // Selection
    pub use crate::selection::{AddOutcome, SelectionFlow, SelectionState};

    // Search
    pub use crate::search::{CatalogFilter, CategoryFilter};

    // Checkout
    pub use crate::checkout::{
        CheckoutConfirmation, NoopNotifier, OrderNotifier, OrderSummary, RecordingNotifier,
    };

    // Storefront
    pub use crate::storefront::{Intent, Panels, Storefront, StorefrontView};
}
