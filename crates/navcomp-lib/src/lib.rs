//! navcomp library entry points.
//!
//! This crate loads a body catalog, answers best-route questions through a
//! memoizing route cache and a fixed set of gate hubs, and runs the two
//! spatial searches: bodies along a projected heading and bodies within a
//! radius of a reference body. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cache;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod heading;
pub mod hubs;
pub mod nearby;
pub mod output;
pub mod paths;
pub mod route;
pub mod router;
pub mod travel;

pub use cache::{RouteCache, CACHE_SCHEMA_VERSION};
pub use catalog::{Body, Catalog, Empire, Region, GLOBAL_FRAME};
pub use error::{Error, Result};
pub use geometry::{distance, line_intersects_sphere, project, Heading, Point};
pub use heading::{find_along_line, HeadingResult, LineQuery, LineSearch};
pub use hubs::{HubSet, DEFAULT_HUB_NAMES};
pub use nearby::{nearby_objects, RankedList, RankedRow};
pub use output::{
    format_duration, HeadingSummary, NearbySummary, RenderMode, RouteLeg, RouteSummary,
};
pub use paths::{resolve_cache_path, resolve_catalog_path};
pub use route::{route_name, Route};
pub use router::{plan_route, RoutePlan, RouteRequest, Router};
pub use travel::{travel_time, AVG_COCHRANE_DENSITY, LIGHTSPEED, PARSEC};
