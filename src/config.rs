//! Pricing file loading
//!
//! The catalog ships compiled in, but the whole table can be swapped out
//! with a TOML pricing file: `--pricing <path>`, `./costctl-pricing.toml`,
//! or `~/.config/costctl/pricing.toml`, first hit wins. A missing file
//! falls back to the builtin table with a warning; a file that exists but
//! does not parse or validate is an error.

use crate::catalog::PriceCatalog;
use crate::error::{ConfigError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name searched in the current directory.
pub const LOCAL_PRICING_FILE: &str = "costctl-pricing.toml";

/// Resolve the pricing file path: explicit path, then local file, then the
/// user config directory. `None` means "use the builtin table".
pub fn resolve_pricing_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let local = PathBuf::from(LOCAL_PRICING_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|d| d.join("costctl").join("pricing.toml"))
        .filter(|p| p.exists())
}

/// Load the price catalog, preferring an external pricing file when one is
/// configured or present.
pub fn load(explicit: Option<&Path>) -> Result<PriceCatalog> {
    let Some(path) = resolve_pricing_path(explicit) else {
        debug!("No pricing file configured, using builtin catalog");
        return Ok(PriceCatalog::builtin());
    };

    if !path.exists() {
        warn!(
            path = %path.display(),
            "Pricing file not found, using builtin catalog"
        );
        return Ok(PriceCatalog::builtin());
    }

    let content = std::fs::read_to_string(&path)?;
    let catalog: PriceCatalog = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("{}: {}", path.display(), e))
    })?;
    catalog.validate()?;
    debug!(
        path = %path.display(),
        categories = catalog.categories().len(),
        "Loaded pricing file"
    );
    Ok(catalog)
}

/// Write the builtin catalog as a pricing file, as a starting point for
/// customization.
pub fn init_pricing(output: &Path) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(&PriceCatalog::builtin())
        .context("Failed to serialize builtin catalog")?;
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write pricing file: {}", output.display()))?;
    println!("Created pricing file: {}", output.display());
    Ok(())
}
