//! Product and flavor types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Whether adding a product needs a flavor choice first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Goes straight into the cart.
    #[default]
    Simple,
    /// Needs a flavor before it can be added.
    Flavored,
}

impl ProductKind {
    /// Kind for a `hasFlavors` flag.
    pub fn from_flag(has_flavors: bool) -> Self {
        if has_flavors {
            ProductKind::Flavored
        } else {
            ProductKind::Simple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Simple => "simple",
            ProductKind::Flavored => "flavored",
        }
    }
}

/// A product on the menu.
///
/// Catalog files may mark flavored products with `kind = "flavored"` or
/// with a `hasFlavors` flag. Unknown fields are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Base unit price.
    pub price: Money,
    /// Menu category.
    pub category: Category,
    /// Simple or flavored.
    pub kind: ProductKind,
    /// Image reference (presentation only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Gradient token (presentation only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

impl Product {
    /// Create a simple product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category,
            kind: ProductKind::Simple,
            image: None,
            gradient: None,
        }
    }

    /// Mark the product as needing a flavor.
    pub fn flavored(mut self) -> Self {
        self.kind = ProductKind::Flavored;
        self
    }

    /// Attach presentation attributes.
    pub fn with_presentation(mut self, image: impl Into<String>, gradient: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self.gradient = Some(gradient.into());
        self
    }

    pub fn has_flavors(&self) -> bool {
        self.kind == ProductKind::Flavored
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductRecord {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    category: Category,
    #[serde(default)]
    kind: Option<ProductKind>,
    #[serde(default, rename = "hasFlavors")]
    has_flavors: Option<bool>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    gradient: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let kind = match (record.kind, record.has_flavors.map(ProductKind::from_flag)) {
            (Some(kind), Some(flag)) if kind != flag => {
                return Err(CommerceError::ConflictingKind(record.id.into_inner()));
            }
            (Some(kind), _) | (None, Some(kind)) => kind,
            (None, None) => ProductKind::Simple,
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            kind,
            image: record.image,
            gradient: record.gradient,
        })
    }
}

/// A flavor option for flavored products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Flavor {
    /// Flavor name (unique).
    pub name: String,
    /// Amount added to the product's base price.
    #[serde(default)]
    pub price: Money,
}

impl Flavor {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
