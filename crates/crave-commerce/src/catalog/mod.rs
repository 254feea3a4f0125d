//! Product catalog module.
//!
//! Contains types for products, flavors, categories, and the validated catalog.

mod catalog;
mod category;
pub mod menu;
mod product;

pub use catalog::{Catalog, CatalogData};
pub use category::Category;
pub use product::{Flavor, Product, ProductKind};
