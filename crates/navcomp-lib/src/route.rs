//! Direct and composite routes between catalog bodies.

use serde::{Deserialize, Serialize};

use crate::catalog::Body;
use crate::travel::travel_time;

/// Build the direction-sensitive cache key for a body pair.
pub fn route_name(source: &Body, target: &Body) -> String {
    format!("{} to {}", source.name, target.name)
}

/// A travelled route, either a straight line or a chain of sub-routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub source: Body,
    pub target: Body,
    pub is_direct: bool,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<Route>,
}

impl Route {
    /// Straight-line route between two bodies.
    pub fn direct(source: &Body, target: &Body) -> Self {
        Self {
            name: route_name(source, target),
            source: source.clone(),
            target: target.clone(),
            is_direct: true,
            distance: source.distance_to(target),
            stops: Vec::new(),
        }
    }

    /// Route made of two legs; the name spans the first leg's source and the
    /// second leg's target.
    pub fn composite(first: Route, second: Route) -> Self {
        Self {
            name: route_name(&first.source, &second.target),
            source: first.source.clone(),
            target: second.target.clone(),
            is_direct: false,
            distance: first.distance + second.distance,
            stops: vec![first, second],
        }
    }

    /// Seconds needed to travel the route at `speed`.
    ///
    /// Direct routes use the travel-time model on their endpoints; composite
    /// routes sum their stops at the same speed.
    pub fn elapsed_seconds(&self, speed: f64) -> f64 {
        if self.is_direct {
            travel_time(
                self.distance,
                self.source.cochranes,
                self.target.cochranes,
                speed,
            )
        } else {
            self.stops
                .iter()
                .map(|stop| stop.elapsed_seconds(speed))
                .sum()
        }
    }

    /// Direct legs of the route in travel order.
    pub fn legs(&self) -> Vec<&Route> {
        if self.is_direct {
            return vec![self];
        }
        self.stops.iter().flat_map(Route::legs).collect()
    }
}
