//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use crave_commerce::catalog::{Catalog, CatalogData};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["crave.toml", ".crave.toml", "crave.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Validated catalog shared with every storefront.
    pub catalog: Arc<Catalog>,
}

impl Context {
    /// Load config, starting from the built-in catalog.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some(path) => {
                    let config = CliConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Arc::new(Catalog::builtin().context("Built-in menu is invalid")?),
        })
    }

    /// Load the catalog named in config, or the built-in menu.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.config.catalog.path else {
            return Catalog::builtin().context("Built-in menu is invalid");
        };

        let path = self.resolve_path(path);
        self.output.debug(&format!("Loading catalog from {}", path.display()));
        load_catalog_file(&path)
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = PathBuf::from(path);
        if candidate.is_absolute() {
            return candidate;
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(candidate),
            _ => self.cwd.join(candidate),
        }
    }

    /// Format a price with the configured symbol.
    pub fn price(&self, amount: crave_commerce::Money) -> String {
        amount.display_with(&self.config.store.currency_symbol)
    }
}

/// Read and validate a TOML or JSON catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let data: CatalogData = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
    };

    let catalog = Catalog::from_data(data)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        products = catalog.products().len(),
        flavors = catalog.flavors().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
