//! `route` subcommand: best route between two named bodies.

use anyhow::{Context, Result};
use tracing::debug;

use navcomp_lib::{plan_route, resolve_cache_path, HubSet, RouteCache, RouteRequest, RouteSummary};

use super::{ensure_number, GlobalOptions};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    /// Warp factor.
    pub speed: f64,
}

pub fn handle_route(options: &GlobalOptions, args: &RouteCommandArgs) -> Result<()> {
    print!("{}", route_output(options, args)?);
    Ok(())
}

/// Plan the route and return the formatted result.
///
/// The route cache is loaded first and written back afterwards unless
/// `--no-cache` was given.
pub fn route_output(options: &GlobalOptions, args: &RouteCommandArgs) -> Result<String> {
    ensure_number("speed", args.speed, true)?;

    let catalog = options.load_catalog()?;
    let hubs = HubSet::resolve_default(&catalog);
    debug!(hubs = hubs.len(), "resolved gate hubs");

    let cache_path = if options.no_cache {
        None
    } else {
        Some(resolve_cache_path(options.cache.as_deref()).context("failed to locate route cache")?)
    };
    let mut cache = match &cache_path {
        Some(path) => RouteCache::load(path)
            .with_context(|| format!("failed to load route cache from {}", path.display()))?,
        None => RouteCache::new(),
    };

    let request = RouteRequest::new(args.from.as_str(), args.to.as_str(), args.speed);
    let plan = plan_route(&catalog, &hubs, &mut cache, &request)
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;

    if let Some(path) = &cache_path {
        cache
            .save(path)
            .with_context(|| format!("failed to save route cache to {}", path.display()))?;
    }
    debug!(
        hits = cache.hits(),
        misses = cache.misses(),
        routes = cache.len(),
        "route cache statistics"
    );

    let summary = RouteSummary::from_plan(&plan);
    options
        .format
        .format(&summary, |summary, mode| summary.render(mode))
}
