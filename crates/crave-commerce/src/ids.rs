//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up a product id with the
//! composite key of a cart line, which often look alike.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between product id and flavor name in a cart key.
pub const KEY_SEPARATOR: char = '-';

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog product.
    ProductId
);
define_id!(
    /// Composite key of a cart line: product id, plus flavor name if any.
    CartItemId
);

impl CartItemId {
    /// Build the cart key for a product and optional flavor.
    ///
    /// ```
    /// use crave_commerce::ids::{CartItemId, ProductId};
    /// let plain = CartItemId::compose(&ProductId::new("c1"), None);
    /// assert_eq!(plain.as_str(), "c1");
    /// let flavored = CartItemId::compose(&ProductId::new("m1"), Some("Garlic"));
    /// assert_eq!(flavored.as_str(), "m1-Garlic");
    /// ```
    pub fn compose(product_id: &ProductId, flavor: Option<&str>) -> Self {
        match flavor {
            Some(flavor) => Self(format!("{}{}{}", product_id, KEY_SEPARATOR, flavor)),
            None => Self(product_id.as_str().to_string()),
        }
    }
}
