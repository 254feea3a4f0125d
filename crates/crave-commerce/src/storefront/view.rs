//! Read-only snapshots handed to presentation surfaces.

use crate::cart::{CartItem, LineTotal};
use crate::error::CommerceError;
use crate::catalog::Product;
use crate::money::Money;
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Which panels are showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panels {
    pub cart: bool,
    pub flavor: bool,
    pub checkout: bool,
}

/// Everything a surface needs to render the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontView {
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,
    /// Price breakdown matching `items`.
    pub lines: Vec<LineTotal>,
    pub subtotal: Money,
    pub item_count: i64,
    /// Products passing the current filter, in catalog order.
    pub products: Vec<Product>,
    /// Product waiting for a flavor choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_product: Option<Product>,
    pub category: CategoryFilter,
    pub query: String,
    pub panels: Panels,
}

impl StorefrontView {
    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
