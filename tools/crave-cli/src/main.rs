//! Crave CLI - Terminal storefront for the Cave Crave menu.
//!
//! Commands:
//! - `crave menu` - List the menu, filtered by category and search text
//! - `crave flavors` - List flavor options
//! - `crave catalog` - Validate or export the catalog
//! - `crave order` - Run a script of intents against a fresh storefront
//! - `crave shell` - Interactive ordering session
//! - `crave config` - Manage configuration

mod commands;
mod config;
mod context;
mod notifier;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, MenuArgs, OrderArgs, ShellArgs};

/// Crave CLI - Browse the menu and place orders from the terminal
#[derive(Parser)]
#[command(name = "crave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu products
    Menu(MenuArgs),

    /// List flavor options
    Flavors,

    /// Validate or export the catalog
    Catalog(CatalogArgs),

    /// Run a script of intents
    Order(OrderArgs),

    /// Start an interactive ordering session
    Shell(ShellArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, output.clone()) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: output::Output) -> Result<()> {
    let mut ctx = context::Context::load(cli.config.as_deref(), output)?;
    init_tracing(&ctx.config.logging.level, cli.verbose);

    // Config commands must work even when the catalog is broken.
    if !matches!(cli.command, Commands::Config(_)) {
        ctx.catalog = Arc::new(ctx.load_catalog()?);
    }

    match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx),
        Commands::Flavors => commands::menu::flavors(&ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Shell(args) => commands::shell::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    }
}

/// Install the log subscriber. `RUST_LOG` wins over config and flags.
fn init_tracing(level: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
