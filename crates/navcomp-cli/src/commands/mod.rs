// Subcommand handlers. main.rs parses arguments and dispatches here.

pub mod heading;
pub mod nearby;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use navcomp_lib::{resolve_catalog_path, Catalog};

use crate::output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub catalog: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    pub format: OutputFormat,
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Load the catalog from the flag, `NAVCOMP_CATALOG` or `./atsdata.json`.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = resolve_catalog_path(self.catalog.as_deref());
        load_catalog_from(&path)
    }
}

fn load_catalog_from(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))?;
    debug!(bodies = catalog.len(), "catalog ready");
    Ok(catalog)
}

/// Reject NaN, infinities and, when `positive`, values not above zero.
pub(crate) fn ensure_number(name: &str, value: f64, positive: bool) -> Result<()> {
    if !value.is_finite() {
        anyhow::bail!("--{name} must be a finite number, got {value}");
    }
    if positive && value <= 0.0 {
        anyhow::bail!("--{name} must be greater than zero, got {value}");
    }
    Ok(())
}
