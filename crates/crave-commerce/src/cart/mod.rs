//! Shopping cart module.
//!
//! Contains the cart ledger, its line items, and totals.

mod ledger;
mod pricing;

pub use ledger::{CartItem, CartLedger};
pub use pricing::{CartTotals, LineTotal};
