//! Search module.
//!
//! Contains the category filter and free-text search over the catalog.

mod filter;

pub use filter::{CatalogFilter, CategoryFilter};
