//! Memoizing route cache with hit/miss accounting and JSON persistence.
//!
//! Entries are keyed by the direction-sensitive route name, so `A to B` and
//! `B to A` are cached separately. A lookup that misses stores a direct
//! route; composite routes only enter the cache through [`RouteCache::store`].
//! Entries are never invalidated.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Body;
use crate::error::{Error, Result};
use crate::route::{route_name, Route};

/// Schema tag written alongside persisted caches.
pub const CACHE_SCHEMA_VERSION: &str = "1";

/// Memoized routes plus hit and miss counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCache {
    version: String,
    routes: HashMap<String, Route>,
    hits: u64,
    misses: u64,
}

impl Default for RouteCache {
    fn default() -> Self {
        Self {
            version: CACHE_SCHEMA_VERSION.to_string(),
            routes: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached route for `source` to `target`, computing and
    /// storing a direct route on a miss.
    pub fn get(&mut self, source: &Body, target: &Body) -> Route {
        let name = route_name(source, target);
        if let Some(route) = self.routes.get(&name) {
            self.hits += 1;
            return route.clone();
        }
        let route = Route::direct(source, target);
        self.routes.insert(name, route.clone());
        self.misses += 1;
        route
    }

    /// Insert or overwrite the entry stored under the route's own name.
    pub fn store(&mut self, route: Route) {
        self.routes.insert(route.name.clone(), route);
    }

    /// Peek at a cached entry without touching the counters.
    pub fn lookup(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Load a persisted cache; a missing file yields an empty cache.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "route cache not found, starting empty");
                return Ok(Self::new());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let cache: RouteCache =
            serde_json::from_slice(&bytes).map_err(|source| Error::CacheParse {
                path: path.to_path_buf(),
                source,
            })?;

        if cache.version != CACHE_SCHEMA_VERSION {
            warn!(
                path = %path.display(),
                found = %cache.version,
                expected = CACHE_SCHEMA_VERSION,
                "discarding route cache with unsupported schema version"
            );
            return Ok(Self::new());
        }

        debug!(
            path = %path.display(),
            routes = cache.routes.len(),
            hits = cache.hits,
            misses = cache.misses,
            "loaded route cache"
        );
        Ok(cache)
    }

    /// Persist the whole cache, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = serde_json::to_vec_pretty(self)?;
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &encoded)
        };
        write().map_err(|source| Error::CacheWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), routes = self.routes.len(), "saved route cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn pair() -> (Body, Body) {
        (
            Body::new("A", Point::ORIGIN, 0.0),
            Body::new("B", Point::new(3.0, 4.0, 0.0), 0.0),
        )
    }

    #[test]
    fn first_lookup_misses_then_hits() {
        let (a, b) = pair();
        let mut cache = RouteCache::new();

        let first = cache.get(&a, &b);
        assert_eq!((cache.hits(), cache.misses()), (0, 1));
        assert!(first.is_direct);
        assert!((first.distance - 5.0).abs() < 1e-9);

        let second = cache.get(&a, &b);
        let third = cache.get(&a, &b);
        assert_eq!((cache.hits(), cache.misses()), (2, 1));
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn direction_matters() {
        let (a, b) = pair();
        let mut cache = RouteCache::new();
        cache.get(&a, &b);
        cache.get(&b, &a);
        assert_eq!(cache.misses(), 2);
        assert!(cache.lookup("A to B").is_some());
        assert!(cache.lookup("B to A").is_some());
    }

    #[test]
    fn stored_composite_replaces_same_name() {
        let (a, b) = pair();
        let hub = Body::new("H", Point::new(1.0, 0.0, 0.0), 0.0);
        let mut cache = RouteCache::new();
        cache.get(&a, &b);

        let composite = Route::composite(Route::direct(&a, &hub), Route::direct(&hub, &b));
        assert_eq!(composite.name, "A to B");
        cache.store(composite.clone());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&a, &b), composite);
        assert_eq!(cache.hits(), 1);
    }
}
