//! Best-route heuristic over the route cache and the hub set.
//!
//! There is no explicit edge list. A pair of bodies is either travelled
//! directly or via the hub nearest to each endpoint, whichever is shorter.
//! Once a pair's cache entry is composite it is returned as-is; hub choices
//! are not revisited even if the hub set changes later.

use serde::Serialize;

use crate::cache::RouteCache;
use crate::catalog::{Body, Catalog};
use crate::error::{Error, Result};
use crate::hubs::HubSet;
use crate::route::Route;

/// Routes body pairs through a fixed hub set.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    hubs: &'a HubSet,
}

impl<'a> Router<'a> {
    pub fn new(hubs: &'a HubSet) -> Self {
        Self { hubs }
    }

    /// Shortest cached route from `body` to any hub.
    ///
    /// The earliest hub wins ties. A running minimum of zero (a leg onto a
    /// co-located hub) is replaced by the next hub considered.
    pub fn shortest_route_to_hubs(&self, cache: &mut RouteCache, body: &Body) -> Result<Route> {
        let mut best: Option<Route> = None;
        for hub in self.hubs.iter() {
            let route = cache.get(body, hub);
            if !route.distance.is_finite() {
                continue;
            }
            let replace = match &best {
                None => true,
                Some(current) => current.distance <= 0.0 || route.distance < current.distance,
            };
            if replace {
                best = Some(route);
            }
        }
        best.ok_or_else(|| Error::NoRouteToHubs {
            body: body.name.clone(),
        })
    }

    /// Best route from `source` to `target`.
    ///
    /// Returns the cached composite entry if one exists. Otherwise compares
    /// the direct route with the two hub legs and caches the composite when
    /// it is strictly shorter. An empty hub set always yields the direct route.
    pub fn best_route(&self, cache: &mut RouteCache, source: &Body, target: &Body) -> Result<Route> {
        let direct = cache.get(source, target);
        if !direct.is_direct || self.hubs.is_empty() {
            return Ok(direct);
        }

        let first_leg = self.shortest_route_to_hubs(cache, source)?;
        let second_leg = self.shortest_route_to_hubs(cache, target)?;

        if first_leg.distance + second_leg.distance < direct.distance {
            let composite = Route::composite(first_leg, second_leg);
            cache.store(composite.clone());
            return Ok(composite);
        }

        Ok(direct)
    }
}

/// High-level routing request by body name.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub source: String,
    pub target: String,
    pub speed: f64,
}

impl RouteRequest {
    pub fn new(source: impl Into<String>, target: impl Into<String>, speed: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            speed,
        }
    }
}

/// Route selected for a request, with its elapsed time at the requested speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub route: Route,
    pub speed: f64,
    pub elapsed_seconds: f64,
}

/// Resolve both names and compute the best route between them.
pub fn plan_route(
    catalog: &Catalog,
    hubs: &HubSet,
    cache: &mut RouteCache,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    if !(request.speed.is_finite() && request.speed > 0.0) {
        return Err(Error::InvalidQuery {
            message: format!("speed must be a positive number, got {}", request.speed),
        });
    }

    let (source, target) = catalog.resolve_pair(&request.source, &request.target)?;
    let route = Router::new(hubs).best_route(cache, source, target)?;
    let elapsed_seconds = route.elapsed_seconds(request.speed);

    Ok(RoutePlan {
        route,
        speed: request.speed,
        elapsed_seconds,
    })
}
