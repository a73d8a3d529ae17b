//! Resolution of the catalog and route cache locations.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV_VAR: &str = "NAVCOMP_CATALOG";

/// Environment variable overriding the route cache location.
pub const CACHE_ENV_VAR: &str = "NAVCOMP_ROUTE_CACHE";

/// Catalog file used when nothing else is configured.
const DEFAULT_CATALOG_FILENAME: &str = "atsdata.json";

/// Route cache file name inside the platform data directory.
const CACHE_FILENAME: &str = "routecache.json";

/// Pick the catalog path: explicit argument, then environment, then
/// `./atsdata.json`.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env::var_os(CATALOG_ENV_VAR) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CATALOG_FILENAME),
    }
}

/// Pick the route cache path: explicit argument, then environment, then the
/// platform data directory.
pub fn resolve_cache_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match env::var_os(CACHE_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_cache_path(),
    }
}

/// Resolve the default cache location using platform-specific project directories.
pub fn default_cache_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "navcomp", "navcomp").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CACHE_FILENAME))
}
