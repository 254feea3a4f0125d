//! Menu listing commands.

use anyhow::Result;
use crave_commerce::search::{CatalogFilter, CategoryFilter};

use super::MenuArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let category: CategoryFilter = args.category.parse()?;
    let filter = CatalogFilter::new(category, args.search);
    let products = filter.apply(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} Menu · {}",
        ctx.config.store.name,
        category.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY"], &[5, 32, 8, 11]);
    for product in &products {
        let price = ctx.price(product.price);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &truncate(&product.name, 32),
                &price,
                product.category.as_str(),
            ],
            &[5, 32, 8, 11],
        );
        ctx.output.debug(&product.description);
    }
    ctx.output.info(&format!("{} product(s)", products.len()));

    Ok(())
}

/// Run the flavors command.
pub fn flavors(ctx: &Context) -> Result<()> {
    let flavors = ctx.catalog.flavors();

    if ctx.output.is_json() {
        ctx.output.json(&flavors);
        return Ok(());
    }

    ctx.output.header("Flavors");
    for flavor in flavors {
        let delta = if flavor.price.is_zero() {
            "included".to_string()
        } else {
            format!("+{}", ctx.price(flavor.price))
        };
        ctx.output.table_row(&[&flavor.name, &delta], &[24, 8]);
    }

    Ok(())
}
