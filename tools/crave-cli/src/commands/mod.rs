//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod menu;
pub mod order;
pub mod shell;

use clap::{Args, Subcommand};
use crave_commerce::storefront::StorefrontView;

use crate::context::Context;
use crate::output::{panel_badge, truncate};

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Category to show (all, with-coffee, no-coffee, meal).
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text to look for in names and descriptions.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Validate the configured catalog (or a given file).
    Validate {
        /// Catalog file to check instead of the configured one.
        path: Option<String>,
    },
    /// Export the active catalog.
    Export {
        /// Output file path (.toml or .json). Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Script file with one intent per line, or a JSON array (.json).
    pub script: Option<String>,

    /// Intent to run, in text form (repeatable; runs after the script).
    #[arg(short, long = "step")]
    pub steps: Vec<String>,

    /// Print the storefront after every intent.
    #[arg(long)]
    pub trace: bool,

    /// Report failing intents and continue instead of stopping.
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Print the storefront after every intent.
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}

/// Print a storefront snapshot.
pub fn render_view(ctx: &Context, view: &StorefrontView) {
    let out = &ctx.output;
    if out.is_json() {
        out.json(view);
        return;
    }

    out.header(&format!(
        "{} · {} · search {:?}",
        ctx.config.store.name,
        view.category.display_name(),
        view.query
    ));
    if view.products.is_empty() {
        out.info("No products match.");
    }
    for product in &view.products {
        let price = ctx.price(product.price);
        let marker = if product.has_flavors() { "+flavor" } else { "" };
        out.table_row(
            &[product.id.as_str(), &truncate(&product.name, 32), &price, marker],
            &[5, 32, 8, 7],
        );
    }

    out.header("Cart");
    if view.items.is_empty() {
        out.info("Your cart is empty.");
    }
    for line in &view.lines {
        let unit = ctx.price(line.unit_price);
        let qty = format!("x{}", line.quantity);
        let total = ctx.price(line.total);
        out.table_row(&[line.item_id.as_str(), &unit, &qty, &total], &[36, 8, 5, 8]);
    }
    out.kv("items", &view.item_count.to_string());
    out.kv("subtotal", &ctx.price(view.subtotal));

    if let Some(product) = &view.pending_product {
        out.kv("choosing flavor for", &format!("{} ({})", product.name, product.id));
    }
    out.kv(
        "panels",
        &[
            panel_badge("cart", view.panels.cart),
            panel_badge("flavor", view.panels.flavor),
            panel_badge("checkout", view.panels.checkout),
        ]
        .join(" "),
    );
}
