//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use navcomp_lib::{Catalog, HubSet};

/// Path to the checked-in fixture catalog.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/navcomp_minimal.json")
}

/// Load the fixture catalog together with its default hub set.
#[allow(dead_code)]
pub fn fixture() -> (Catalog, HubSet) {
    let catalog = Catalog::from_path(&fixture_path()).expect("fixture loads");
    let hubs = HubSet::resolve_default(&catalog);
    (catalog, hubs)
}
