//! Line-of-sight search along a projected heading.
//!
//! A ray is projected from the observer and every catalog body is tested
//! against a tube of growing radius around it. The first radius that yields
//! any body ends the search, trading precision for recall so near misses
//! caused by rounded coordinates still surface.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Body, Catalog, GLOBAL_FRAME};
use crate::error::{Error, Result};
use crate::geometry::{line_intersects_sphere, project, Heading, Point};
use crate::travel::{travel_time, AVG_COCHRANE_DENSITY};

/// Increment between successive search radii.
pub const RADIUS_STEP: f64 = 2.0;

/// Exclusive upper bound of the radius ladder.
pub const MAX_SEARCH_RADIUS: f64 = 12.0;

/// Search radii tried in order: 0, 2, ..., 10.
pub fn radius_ladder() -> impl Iterator<Item = f64> {
    (0..)
        .map(|step| f64::from(step) * RADIUS_STEP)
        .take_while(|radius| *radius < MAX_SEARCH_RADIUS)
}

/// A body found by a spatial search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingResult {
    pub distance: f64,
    /// Seconds to reach the body, when the search computes one.
    pub time: Option<f64>,
    pub containing_radius: f64,
    pub body: Body,
}

/// Parameters of a line-of-sight search.
#[derive(Debug, Clone, PartialEq)]
pub struct LineQuery {
    pub origin: Point,
    pub heading: Heading,
    pub speed: f64,
    /// Projection length; the speed is used when unset.
    pub line_length: Option<f64>,
    /// Bodies this close to the origin are treated as the observer itself.
    pub same_body_distance: f64,
    pub frame: String,
}

impl LineQuery {
    pub fn new(origin: Point, heading: Heading, speed: f64) -> Self {
        Self {
            origin,
            heading,
            speed,
            line_length: None,
            same_body_distance: 0.0,
            frame: GLOBAL_FRAME.to_string(),
        }
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = frame.into();
        self
    }

    pub fn with_same_body_distance(mut self, distance: f64) -> Self {
        self.same_body_distance = distance;
        self
    }

    pub fn with_line_length(mut self, length: f64) -> Self {
        self.line_length = Some(length);
        self
    }

    fn projection_length(&self) -> f64 {
        self.line_length.unwrap_or(self.speed)
    }

    fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() || !self.heading.yaw.is_finite() || !self.heading.pitch.is_finite()
        {
            return Err(Error::InvalidQuery {
                message: "origin and heading must be finite numbers".to_string(),
            });
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::InvalidQuery {
                message: format!("speed must be a positive number, got {}", self.speed),
            });
        }
        if let Some(length) = self.line_length {
            if !(length.is_finite() && length > 0.0) {
                return Err(Error::InvalidQuery {
                    message: format!("line length must be a positive number, got {length}"),
                });
            }
        }
        Ok(())
    }
}

/// Outcome of a line-of-sight search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSearch {
    /// Observer position in galactic coordinates.
    pub origin: Point,
    /// Far end of the projected line.
    pub projected: Point,
    /// Radius at which the bodies were found.
    pub radius: f64,
    /// Matches ordered by distance from the origin.
    pub results: Vec<HeadingResult>,
}

/// Bodies along the line from `origin` through `projected`, widening the
/// tube until something matches.
///
/// Returns the radius used together with the matches in encounter order.
pub fn bodies_along_line<'c>(
    catalog: &'c Catalog,
    origin: &Point,
    projected: &Point,
    same_body_distance: f64,
) -> Option<(f64, Vec<&'c Body>)> {
    radius_ladder().find_map(|radius| {
        let matches = catalog.filter_bodies(|body| {
            line_intersects_sphere(origin, projected, &body.position, radius)
                && body.distance_to_point(origin) > same_body_distance
        });
        if matches.is_empty() {
            None
        } else {
            Some((radius, matches))
        }
    })
}

/// Find bodies along the heading described by `query`.
pub fn find_along_line(catalog: &Catalog, query: &LineQuery) -> Result<LineSearch> {
    query.validate()?;

    let origin = catalog.translate_frame(&query.origin, &query.frame)?;
    let projected = project(&origin, query.heading, query.projection_length());

    let (radius, bodies) = bodies_along_line(catalog, &origin, &projected, query.same_body_distance)
        .ok_or(Error::NoBodiesFound)?;

    let results = order_by_distance(&origin, bodies, query.speed, radius);
    Ok(LineSearch {
        origin,
        projected,
        radius,
        results,
    })
}

/// Attach distance and travel time to each body and sort by distance.
///
/// The sort is stable, so exact ties keep encounter order.
pub fn order_by_distance(
    origin: &Point,
    bodies: Vec<&Body>,
    speed: f64,
    radius: f64,
) -> Vec<HeadingResult> {
    let mut results: Vec<HeadingResult> = bodies
        .into_iter()
        .map(|body| {
            let distance = body.distance_to_point(origin);
            HeadingResult {
                distance,
                time: Some(travel_time(
                    distance,
                    AVG_COCHRANE_DENSITY,
                    body.cochranes,
                    speed,
                )),
                containing_radius: radius,
                body: body.clone(),
            }
        })
        .collect();
    results.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    results
}
