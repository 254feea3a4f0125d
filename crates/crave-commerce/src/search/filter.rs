//! Category filter and text search over the catalog.

use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which categories to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// One category.
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "The Whole Cave",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Whether a category passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CommerceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active category and search text.
///
/// The visible product list is always derived from the catalog on demand;
/// nothing is cached between changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Set the search text. It is matched as typed, without trimming.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether a product passes both the category and the text filter.
    ///
    /// The text matches as a case-insensitive substring of the name or the
    /// description. An empty query matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.admits(product.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// Visible products, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.products().iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let catalog = Catalog::builtin().unwrap();
        let filter = CatalogFilter::default();
        assert_eq!(filter.apply(&catalog).len(), catalog.products().len());
    }

    #[test]
    fn test_meal_category() {
        let catalog = Catalog::builtin().unwrap();
        let filter = CatalogFilter::new(CategoryFilter::Only(Category::Meal), "");
        assert_eq!(ids(&filter.apply(&catalog)), vec!["m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_matcha_search_spans_categories() {
        let catalog = Catalog::builtin().unwrap();
        let filter = CatalogFilter::new(CategoryFilter::All, "matcha");
        let found = ids(&filter.apply(&catalog));

        let expected: Vec<String> = catalog
            .products()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains("matcha")
                    || p.description.to_lowercase().contains("matcha")
            })
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(found, expected);
        // c2 only mentions matcha in its description.
        assert!(found.contains(&"c2".to_string()));
        assert!(found.contains(&"nc1".to_string()));
        assert!(!found.contains(&"m1".to_string()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let lower = CatalogFilter::new(CategoryFilter::All, "oreo").apply(&catalog);
        let upper = CatalogFilter::new(CategoryFilter::All, "OREO").apply(&catalog);
        assert_eq!(ids(&lower), vec!["c7", "nc6"]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn test_category_and_query_combine() {
        let catalog = Catalog::builtin().unwrap();
        let filter = CatalogFilter::new(Category::NoCoffee.into(), "berry");
        assert_eq!(ids(&filter.apply(&catalog)), vec!["nc2", "nc4"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        let filter = CatalogFilter::new(Category::Meal.into(), "latte");
        assert!(filter.apply(&catalog).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = Catalog::builtin().unwrap();
        let padded = CatalogFilter::new(CategoryFilter::All, "oreo  ");
        assert!(padded.apply(&catalog).is_empty());
        let inner = CatalogFilter::new(CategoryFilter::All, "kimchi rice");
        assert_eq!(inner.apply(&catalog).len(), 2);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "no-coffee".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::NoCoffee)
        );
        assert!("snacks".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_serde() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Meal)).unwrap();
        assert_eq!(json, "\"meal\"");
        let back: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, CategoryFilter::All);
    }

    #[test]
    fn test_filter_display_names() {
        assert_eq!(CategoryFilter::All.display_name(), "The Whole Cave");
        assert_eq!(CategoryFilter::Only(Category::Meal).display_name(), "Feasts");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
