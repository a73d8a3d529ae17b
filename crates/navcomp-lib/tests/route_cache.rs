use std::fs;

use navcomp_lib::{plan_route, Error, RouteCache, RouteRequest, CACHE_SCHEMA_VERSION};
use tempfile::tempdir;

mod common;

use common::fixture;

#[test]
fn missing_cache_file_starts_empty() {
    let dir = tempdir().expect("temp dir");
    let cache = RouteCache::load(&dir.path().join("absent.json")).expect("empty cache");
    assert!(cache.is_empty());
    assert_eq!((cache.hits(), cache.misses()), (0, 0));
    assert_eq!(cache.version(), CACHE_SCHEMA_VERSION);
}

#[test]
fn counters_track_fresh_and_repeated_lookups() {
    let (catalog, _) = fixture();
    let earth = catalog.find_body("Earth").unwrap();
    let vulcan = catalog.find_body("Vulcan").unwrap();
    let mut cache = RouteCache::new();

    cache.get(earth, vulcan);
    assert_eq!((cache.hits(), cache.misses()), (0, 1));
    for expected_hits in 1..=3 {
        cache.get(earth, vulcan);
        assert_eq!((cache.hits(), cache.misses()), (expected_hits, 1));
    }
}

#[test]
fn cache_round_trips_through_disk() {
    let (catalog, hubs) = fixture();
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("routecache.json");

    let mut cache = RouteCache::new();
    let plan = plan_route(
        &catalog,
        &hubs,
        &mut cache,
        &RouteRequest::new("Earth", "Qo'noS", 1.0),
    )
    .expect("route");
    cache.save(&path).expect("save");

    let mut restored = RouteCache::load(&path).expect("load");
    assert_eq!(restored.len(), cache.len());
    assert_eq!(restored.hits(), cache.hits());
    assert_eq!(restored.misses(), cache.misses());

    let stored = restored.lookup(&plan.route.name).expect("composite persisted");
    assert!(!stored.is_direct);
    assert_eq!(stored.stops.len(), 2);
    assert!((stored.distance - plan.route.distance).abs() < 1e-9);

    let replanned = plan_route(
        &catalog,
        &hubs,
        &mut restored,
        &RouteRequest::new("Earth", "Qo'noS", 1.0),
    )
    .expect("route");
    assert_eq!(replanned.route.name, plan.route.name);
    assert_eq!(restored.misses(), cache.misses());
}

#[test]
fn corrupt_cache_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("routecache.json");
    fs::write(&path, "not json").expect("write");
    let err = RouteCache::load(&path).expect_err("corrupt");
    assert!(matches!(err, Error::CacheParse { .. }));
}

#[test]
fn foreign_schema_version_is_discarded() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("routecache.json");
    fs::write(
        &path,
        r#"{"version": "0", "routes": {}, "hits": 4, "misses": 9}"#,
    )
    .expect("write");
    let cache = RouteCache::load(&path).expect("discarded");
    assert_eq!((cache.hits(), cache.misses()), (0, 0));
}
