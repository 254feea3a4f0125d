//! Catalog commands.

use std::fs;

use anyhow::{Context as _, Result};
use crave_commerce::catalog::Category;

use super::{CatalogArgs, CatalogCommand};
use crate::context::{load_catalog_file, Context};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::Validate { path } => validate(path.as_deref(), ctx),
        CatalogCommand::Export { output } => export(output.as_deref(), ctx),
    }
}

fn validate(path: Option<&str>, ctx: &Context) -> Result<()> {
    // The configured catalog was already validated when the context loaded.
    let catalog = match path {
        Some(path) => load_catalog_file(&ctx.resolve_path(path))?,
        None => (*ctx.catalog).clone(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": true,
            "products": catalog.products().len(),
            "flavors": catalog.flavors().len(),
        }));
        return Ok(());
    }

    ctx.output.success("Catalog is valid");
    ctx.output.kv("products", &catalog.products().len().to_string());
    ctx.output.kv("flavors", &catalog.flavors().len().to_string());
    for category in Category::ALL {
        let count = catalog
            .products()
            .iter()
            .filter(|p| p.category == category)
            .count();
        ctx.output.kv(category.display_name(), &count.to_string());
    }

    Ok(())
}

fn export(output: Option<&str>, ctx: &Context) -> Result<()> {
    let data = ctx.catalog.to_data();

    let Some(path) = output else {
        if ctx.output.is_json() {
            ctx.output.json(&data);
        } else {
            print!("{}", toml::to_string_pretty(&data)?);
        }
        return Ok(());
    };

    let content = if path.ends_with(".json") {
        serde_json::to_string_pretty(&data)?
    } else {
        toml::to_string_pretty(&data)?
    };
    let target = ctx.resolve_path(path);
    fs::write(&target, content)
        .with_context(|| format!("Failed to write catalog file: {}", target.display()))?;

    ctx.output.success(&format!("Exported catalog to {}", target.display()));
    Ok(())
}
