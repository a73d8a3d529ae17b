//! Radius search with an order-preserving, tie-merging ranking.

use serde::Serialize;

use crate::catalog::{Body, Catalog};
use crate::error::{Error, Result};
use crate::heading::HeadingResult;

/// One row of a ranked list: every body sharing an exact distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub distance: f64,
    pub time: Option<f64>,
    pub containing_radius: f64,
    pub bodies: Vec<Body>,
}

impl RankedRow {
    fn from_result(result: HeadingResult) -> Self {
        Self {
            distance: result.distance,
            time: result.time,
            containing_radius: result.containing_radius,
            bodies: vec![result.body],
        }
    }

    /// Display name: tied body names joined with commas, in insertion order.
    pub fn label(&self) -> String {
        self.bodies
            .iter()
            .map(|body| body.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Results kept sorted ascending by distance, equal distances merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedList {
    rows: Vec<RankedRow>,
}

impl RankedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Insert before the first row with a larger distance, merge into a row
    /// with the same distance, or append.
    pub fn insert(&mut self, result: HeadingResult) {
        let slot = self
            .rows
            .iter()
            .position(|row| result.distance <= row.distance);
        match slot {
            Some(index) if self.rows[index].distance == result.distance => {
                self.rows[index].bodies.push(result.body);
            }
            Some(index) => self.rows.insert(index, RankedRow::from_result(result)),
            None => self.rows.push(RankedRow::from_result(result)),
        }
    }

    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    /// The first `limit` rows.
    pub fn top(&self, limit: usize) -> &[RankedRow] {
        &self.rows[..limit.min(self.rows.len())]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rebuild `list` with every body within `range` of `target`.
pub fn rank_nearby(list: &mut RankedList, catalog: &Catalog, target: &Body, range: f64) {
    list.reset();
    for body in catalog.bodies() {
        let distance = target.distance_to(body);
        if distance <= range {
            list.insert(HeadingResult {
                distance,
                time: None,
                containing_radius: range,
                body: body.clone(),
            });
        }
    }
}

/// Bodies within `range` of `target`, nearest first, at most `limit` rows.
pub fn nearby_objects(
    catalog: &Catalog,
    target: &Body,
    range: f64,
    limit: usize,
) -> Result<Vec<RankedRow>> {
    if !(range.is_finite() && range >= 0.0) {
        return Err(Error::InvalidQuery {
            message: format!("range must be a non-negative number, got {range}"),
        });
    }

    let mut list = RankedList::new();
    rank_nearby(&mut list, catalog, target, range);
    Ok(list.top(limit).to_vec())
}
