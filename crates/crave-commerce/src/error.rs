//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and selection operations never fail. These errors come from
/// catalog validation at load time and from resolving ids at the intent
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Flavor not found in the catalog.
    #[error("Flavor not found: {0}")]
    FlavorNotFound(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two flavors share a name.
    #[error("Duplicate flavor: {0}")]
    DuplicateFlavor(String),

    /// A price below zero.
    #[error("Negative price for {item}: {amount}")]
    NegativePrice { item: String, amount: i64 },

    /// A required text field is empty.
    #[error("Empty {field} in {item}")]
    EmptyField { item: String, field: &'static str },

    /// Two different product/flavor combinations map to the same cart key.
    #[error("Cart key {key} is shared by {first} and {second}")]
    KeyCollision {
        key: String,
        first: String,
        second: String,
    },

    /// The catalog has flavored products but no flavors to pick from.
    #[error("Product {0} requires a flavor but the catalog has none")]
    MissingFlavors(String),

    /// A product record whose `kind` and `hasFlavors` disagree.
    #[error("Product {0} sets both kind and hasFlavors, and they disagree")]
    ConflictingKind(String),

    /// Unknown category slug.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// An intent line that could not be parsed.
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
