//! Cart totals.

use crate::ids::CartItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotal>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Sum of quantities.
    pub item_count: i64,
}

/// Totals for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub item_id: CartItemId,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price * quantity
    pub total: Money,
}
