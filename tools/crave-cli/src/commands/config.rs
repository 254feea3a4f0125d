//! Configuration commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
        ConfigCommand::Validate => validate(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv("store.name", &ctx.config.store.name);
    ctx.output
        .kv("store.currency_symbol", &ctx.config.store.currency_symbol);
    ctx.output.kv(
        "catalog.path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in menu)"),
    );
    ctx.output.kv("logging.level", &ctx.config.logging.level);

    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("crave.toml");

    if config_path.exists() && !force {
        bail!("crave.toml already exists. Use --force to overwrite.");
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Cave Crave");

    std::fs::write(&config_path, generate_default_config(name))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}

fn validate(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": true,
            "config": ctx.config_path.as_ref().map(|p| p.display().to_string()),
            "products": catalog.products().len(),
            "flavors": catalog.flavors().len(),
        }));
        return Ok(());
    }

    if ctx.config_path.is_none() {
        ctx.output.warn("No config file found; using defaults");
    }
    ctx.output.success("Configuration is valid");
    ctx.output.kv(
        "catalog",
        &format!(
            "{} products, {} flavors",
            catalog.products().len(),
            catalog.flavors().len()
        ),
    );

    Ok(())
}
