use tracing::debug;

use crate::catalog::{Body, Catalog};

/// Gate bodies used as routing waypoints when present in the catalog.
pub const DEFAULT_HUB_NAMES: &[&str] = &[
    "Transwarp Gate U-02",
    "Transwarp Gate T-08",
    "Zausta VI",
    "Boreth",
    "Latinum Galleria",
    "Elosian City",
    "Clispau IX",
    "Kildare XI",
];

/// Immutable set of hub bodies resolved once against a catalog.
///
/// Hub names are matched exactly. Names without a catalog entry are left out
/// of the set, so every member is a real body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HubSet {
    hubs: Vec<Body>,
}

impl HubSet {
    /// Resolve the default gate list.
    pub fn resolve_default(catalog: &Catalog) -> Self {
        Self::resolve(catalog, DEFAULT_HUB_NAMES.iter().copied())
    }

    /// Resolve `names` in order, skipping any that are not in the catalog.
    pub fn resolve<'a, I>(catalog: &Catalog, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hubs: Vec<Body> = Vec::new();
        for name in names {
            if hubs.iter().any(|hub| hub.name == name) {
                continue;
            }
            match catalog.body_by_exact_name(name) {
                Some(body) => hubs.push(body.clone()),
                None => debug!(hub = name, "hub not present in catalog"),
            }
        }
        Self { hubs }
    }

    /// Build a hub set from already-resolved bodies.
    pub fn from_bodies(hubs: Vec<Body>) -> Self {
        Self { hubs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.hubs.iter()
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hubs.iter().any(|hub| hub.name == name)
    }
}
