//! The validated, read-only catalog.

use std::collections::{HashMap, HashSet};

use crate::catalog::{menu, Flavor, Product};
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use serde::{Deserialize, Serialize};

/// Raw catalog records, as loaded from a data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub flavors: Vec<Flavor>,
}

/// Products and flavors on offer.
///
/// A `Catalog` can only be built through validation, so every instance
/// upholds: unique product ids, unique flavor names, non-negative prices,
/// non-empty ids and names, and one owner per cart key.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    flavors: Vec<Flavor>,
}

impl Catalog {
    /// Validate and build a catalog.
    pub fn new(products: Vec<Product>, flavors: Vec<Flavor>) -> Result<Self, CommerceError> {
        validate(&products, &flavors)?;
        tracing::debug!(
            products = products.len(),
            flavors = flavors.len(),
            "Catalog loaded"
        );
        Ok(Self { products, flavors })
    }

    /// Validate and build a catalog from raw records.
    pub fn from_data(data: CatalogData) -> Result<Self, CommerceError> {
        Self::new(data.products, data.flavors)
    }

    /// The built-in Cave Crave menu, validated like any other source.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::new(menu::products(), menu::flavors())
    }

    /// Convert back to raw records (e.g., for export).
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            products: self.products.clone(),
            flavors: self.flavors.clone(),
        }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Flavors in display order.
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a flavor by exact name.
    pub fn flavor(&self, name: &str) -> Option<&Flavor> {
        self.flavors.iter().find(|f| f.name == name)
    }
}

fn validate(products: &[Product], flavors: &[Flavor]) -> Result<(), CommerceError> {
    let mut ids = HashSet::new();
    for product in products {
        if product.id.as_str().is_empty() {
            return Err(CommerceError::EmptyField {
                item: format!("product {:?}", product.name),
                field: "id",
            });
        }
        if product.name.trim().is_empty() {
            return Err(CommerceError::EmptyField {
                item: format!("product {}", product.id),
                field: "name",
            });
        }
        if product.price.is_negative() {
            return Err(CommerceError::NegativePrice {
                item: format!("product {}", product.id),
                amount: product.price.amount(),
            });
        }
        if !ids.insert(product.id.as_str()) {
            return Err(CommerceError::DuplicateProductId(product.id.to_string()));
        }
    }

    let mut names = HashSet::new();
    for flavor in flavors {
        if flavor.name.trim().is_empty() {
            return Err(CommerceError::EmptyField {
                item: "flavor".to_string(),
                field: "name",
            });
        }
        if flavor.price.is_negative() {
            return Err(CommerceError::NegativePrice {
                item: format!("flavor {}", flavor.name),
                amount: flavor.price.amount(),
            });
        }
        if !names.insert(flavor.name.as_str()) {
            return Err(CommerceError::DuplicateFlavor(flavor.name.clone()));
        }
    }

    if flavors.is_empty() {
        if let Some(product) = products.iter().find(|p| p.has_flavors()) {
            return Err(CommerceError::MissingFlavors(product.id.to_string()));
        }
    }

    check_cart_keys(products, flavors)
}

/// Every cart key the catalog can produce must belong to exactly one
/// product/flavor combination.
fn check_cart_keys(products: &[Product], flavors: &[Flavor]) -> Result<(), CommerceError> {
    let mut owners: HashMap<CartItemId, String> = HashMap::new();
    let mut claim = |key: CartItemId, owner: String| match owners.get(&key) {
        Some(first) => Err(CommerceError::KeyCollision {
            key: key.into_inner(),
            first: first.clone(),
            second: owner,
        }),
        None => {
            owners.insert(key, owner);
            Ok(())
        }
    };

    for product in products {
        if product.has_flavors() {
            for flavor in flavors {
                let key = CartItemId::compose(&product.id, Some(&flavor.name));
                claim(key, format!("{} with {}", product.id, flavor.name))?;
            }
        } else {
            claim(CartItemId::compose(&product.id, None), product.id.to_string())?;
        }
    }
    Ok(())
}
