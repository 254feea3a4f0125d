//! Menu categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Drinks with espresso.
    WithCoffee,
    /// Drinks without espresso.
    NoCoffee,
    /// Rice meals.
    Meal,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 3] = [Category::WithCoffee, Category::NoCoffee, Category::Meal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WithCoffee => "with-coffee",
            Category::NoCoffee => "no-coffee",
            Category::Meal => "meal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::WithCoffee => "Brews",
            Category::NoCoffee => "No Buzz",
            Category::Meal => "Feasts",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "with-coffee" => Ok(Category::WithCoffee),
            "no-coffee" => Ok(Category::NoCoffee),
            "meal" => Ok(Category::Meal),
            _ => Err(CommerceError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
