//! Storefront module.
//!
//! Ties the catalog, cart, selection flow, filter, and checkout together
//! behind explicit intents and read-only views.

mod intent;
mod state;
mod view;

pub use intent::Intent;
pub use state::Storefront;
pub use view::{Panels, StorefrontView};
