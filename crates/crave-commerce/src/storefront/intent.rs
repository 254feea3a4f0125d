//! User intents and their one-line text form.

use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete user command applied to a [`Storefront`](crate::storefront::Storefront).
///
/// Text form, one intent per line:
///
/// | Text                      | Intent                  |
/// |---------------------------|-------------------------|
/// | `add <product-id>`        | `RequestAdd`            |
/// | `flavor <name>`           | `ConfirmFlavor`         |
/// | `cancel-flavor`           | `CancelFlavorSelection` |
/// | `qty <item-id> <delta>`   | `UpdateQuantity`        |
/// | `remove <item-id>`        | `Remove`                |
/// | `category <all\|slug>`    | `SetCategory`           |
/// | `search [text]`           | `SetSearchQuery`        |
/// | `open-cart`, `close-cart` | `OpenCart`, `CloseCart` |
/// | `checkout`                | `Checkout`              |
/// | `cancel-checkout`         | `CancelCheckout`        |
/// | `confirm`                 | `ConfirmOrder`          |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    RequestAdd { product_id: ProductId },
    ConfirmFlavor { flavor: String },
    CancelFlavorSelection,
    UpdateQuantity { item_id: CartItemId, delta: i64 },
    Remove { item_id: CartItemId },
    SetCategory { category: CategoryFilter },
    SetSearchQuery { query: String },
    OpenCart,
    CloseCart,
    Checkout,
    CancelCheckout,
    ConfirmOrder,
}

impl Intent {
    /// Parse a script of text intents.
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors name the
    /// 1-based line number.
    pub fn parse_script(script: &str) -> Result<Vec<Intent>, CommerceError> {
        script
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(idx, line)| {
                line.parse::<Intent>().map_err(|e| match e {
                    CommerceError::InvalidIntent(msg) => {
                        CommerceError::InvalidIntent(format!("line {}: {}", idx + 1, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Parse a JSON array of intents.
    pub fn list_from_json(json: &str) -> Result<Vec<Intent>, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromStr for Intent {
    type Err = CommerceError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Only the leading whitespace is insignificant; search text keeps
        // its own spacing.
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        let required = |what: &str| -> Result<String, CommerceError> {
            let value = rest.trim();
            if value.is_empty() {
                Err(CommerceError::InvalidIntent(format!("`{verb}` needs {what}")))
            } else {
                Ok(value.to_string())
            }
        };

        let intent = match verb.to_lowercase().as_str() {
            "add" => Intent::RequestAdd {
                product_id: ProductId::new(required("a product id")?),
            },
            "flavor" => Intent::ConfirmFlavor {
                flavor: required("a flavor name")?,
            },
            "cancel-flavor" => Intent::CancelFlavorSelection,
            "qty" => {
                let args = required("an item id and a delta")?;
                let (item, delta) = args.rsplit_once(' ').ok_or_else(|| {
                    CommerceError::InvalidIntent("`qty` needs an item id and a delta".to_string())
                })?;
                let delta = delta.parse::<i64>().map_err(|_| {
                    CommerceError::InvalidIntent(format!("invalid quantity delta: {delta}"))
                })?;
                Intent::UpdateQuantity {
                    item_id: CartItemId::new(item.trim_end()),
                    delta,
                }
            }
            "remove" => Intent::Remove {
                item_id: CartItemId::new(required("an item id")?),
            },
            "category" => Intent::SetCategory {
                category: required("a category")?.parse()?,
            },
            "search" => Intent::SetSearchQuery {
                query: rest.to_string(),
            },
            "open-cart" => Intent::OpenCart,
            "close-cart" => Intent::CloseCart,
            "checkout" => Intent::Checkout,
            "cancel-checkout" => Intent::CancelCheckout,
            "confirm" => Intent::ConfirmOrder,
            "" => return Err(CommerceError::InvalidIntent("empty line".to_string())),
            other => {
                return Err(CommerceError::InvalidIntent(format!("unknown command `{other}`")))
            }
        };
        Ok(intent)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::RequestAdd { product_id } => write!(f, "add {product_id}"),
            Intent::ConfirmFlavor { flavor } => write!(f, "flavor {flavor}"),
            Intent::CancelFlavorSelection => f.write_str("cancel-flavor"),
            Intent::UpdateQuantity { item_id, delta } => write!(f, "qty {item_id} {delta:+}"),
            Intent::Remove { item_id } => write!(f, "remove {item_id}"),
            Intent::SetCategory { category } => write!(f, "category {category}"),
            Intent::SetSearchQuery { query } if query.is_empty() => f.write_str("search"),
            Intent::SetSearchQuery { query } => write!(f, "search {query}"),
            Intent::OpenCart => f.write_str("open-cart"),
            Intent::CloseCart => f.write_str("close-cart"),
            Intent::Checkout => f.write_str("checkout"),
            Intent::CancelCheckout => f.write_str("cancel-checkout"),
            Intent::ConfirmOrder => f.write_str("confirm"),
        }
    }
}
