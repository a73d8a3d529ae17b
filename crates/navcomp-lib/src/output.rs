use std::fmt::Write;

use serde::Serialize;

use crate::geometry::{Heading, Point};
use crate::heading::LineSearch;
use crate::nearby::RankedRow;
use crate::router::RoutePlan;

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// Format seconds as hours, minutes and seconds, dropping fractions.
///
/// Mirrors the compact `1h2m3s` style: leading zero units are omitted but
/// inner ones are kept (`1h0m5s`).
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "n/a".to_string();
    }
    let total = seconds.trunc() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{minutes}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

/// One direct leg of a route summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub elapsed_seconds: f64,
}

/// Structured representation of a best-route answer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub name: String,
    pub source: String,
    pub target: String,
    pub direct: bool,
    pub distance: f64,
    pub speed: f64,
    pub elapsed_seconds: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let legs = plan
            .route
            .legs()
            .into_iter()
            .enumerate()
            .map(|(index, leg)| RouteLeg {
                index: index + 1,
                from: leg.source.name.clone(),
                to: leg.target.name.clone(),
                distance: leg.distance,
                elapsed_seconds: leg.elapsed_seconds(plan.speed),
            })
            .collect();

        Self {
            name: plan.route.name.clone(),
            source: plan.route.source.name.clone(),
            target: plan.route.target.name.clone(),
            direct: plan.route.is_direct,
            distance: plan.route.distance,
            speed: plan.speed,
            elapsed_seconds: plan.elapsed_seconds,
            legs,
        }
    }

    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn kind_label(&self) -> &'static str {
        if self.direct {
            "direct"
        } else {
            "via gates"
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route {} ({}, warp {}): {:.2} in {}",
            self.name,
            self.kind_label(),
            self.speed,
            self.distance,
            format_duration(self.elapsed_seconds)
        );
        if !self.direct {
            for leg in &self.legs {
                let _ = writeln!(
                    buffer,
                    "{:>3}: {} -> {} [{:.2}] {}",
                    leg.index,
                    leg.from,
                    leg.to,
                    leg.distance,
                    format_duration(leg.elapsed_seconds)
                );
            }
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{}_ ({}, warp `{}`): **{:.2}** in `{}`",
            self.name,
            self.kind_label(),
            self.speed,
            self.distance,
            format_duration(self.elapsed_seconds)
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** ({:.2}, `{}`)",
                leg.index,
                leg.from,
                leg.to,
                leg.distance,
                format_duration(leg.elapsed_seconds)
            );
        }
        buffer
    }
}

/// Body found along a heading.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadingRow {
    pub index: usize,
    pub name: String,
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

/// Structured representation of a line-of-sight search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadingSummary {
    pub origin: Point,
    pub projected: Point,
    pub heading: Heading,
    pub speed: f64,
    pub radius: f64,
    pub results: Vec<HeadingRow>,
}

impl HeadingSummary {
    pub fn from_search(search: &LineSearch, heading: Heading, speed: f64) -> Self {
        let results = search
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| HeadingRow {
                index: index + 1,
                name: result.body.name.clone(),
                distance: result.distance,
                elapsed_seconds: result.time,
            })
            .collect();
        Self {
            origin: search.origin,
            projected: search.projected,
            heading,
            speed,
            radius: search.radius,
            results,
        }
    }

    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        match mode {
            RenderMode::PlainText => {
                let _ = writeln!(
                    buffer,
                    "Bodies along heading {:.1}/{:.1} from ({:.2}, {:.2}, {:.2}) within radius {}:",
                    self.heading.yaw,
                    self.heading.pitch,
                    self.origin.x,
                    self.origin.y,
                    self.origin.z,
                    self.radius
                );
                for row in &self.results {
                    let time = row.elapsed_seconds.map(format_duration).unwrap_or_default();
                    let _ = writeln!(
                        buffer,
                        "{:<20}\t{:>20}\t[{:.2}]",
                        row.name, time, row.distance
                    );
                }
            }
            RenderMode::RichText => {
                let _ = writeln!(
                    buffer,
                    "**Heading** `{:.1}/{:.1}` (radius `{}`)",
                    self.heading.yaw, self.heading.pitch, self.radius
                );
                for row in &self.results {
                    let time = row.elapsed_seconds.map(format_duration).unwrap_or_default();
                    let _ = writeln!(
                        buffer,
                        "* {:>2}. **{}** ({:.2}, `{}`)",
                        row.index, row.name, row.distance, time
                    );
                }
            }
        }
        buffer
    }
}

/// Ranked row of a radius search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NearbyRow {
    pub index: usize,
    pub name: String,
    pub distance: f64,
}

/// Structured representation of a radius search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NearbySummary {
    pub target: String,
    pub range: f64,
    pub limit: usize,
    pub rows: Vec<NearbyRow>,
}

impl NearbySummary {
    pub fn from_rows(target: &str, range: f64, limit: usize, rows: &[RankedRow]) -> Self {
        let rows = rows
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, row)| NearbyRow {
                index: index + 1,
                name: row.label(),
                distance: row.distance,
            })
            .collect();
        Self {
            target: target.to_string(),
            range,
            limit,
            rows,
        }
    }

    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        match mode {
            RenderMode::PlainText => {
                let _ = writeln!(buffer, "Objects near {}:", self.target);
                let name_width = self
                    .rows
                    .iter()
                    .map(|row| row.name.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max("Object".len());
                let _ = writeln!(
                    buffer,
                    "{:>3}  {:<width$}  {:>10}",
                    "#",
                    "Object",
                    "Distance",
                    width = name_width
                );
                for row in &self.rows {
                    let _ = writeln!(
                        buffer,
                        "{:>3}  {:<width$}  {:>10.2}",
                        row.index,
                        row.name,
                        row.distance,
                        width = name_width
                    );
                }
            }
            RenderMode::RichText => {
                let _ = writeln!(buffer, "**Objects near {}** (range `{}`)", self.target, self.range);
                for row in &self.rows {
                    let _ = writeln!(buffer, "* {:>2}. **{}** ({:.2})", row.index, row.name, row.distance);
                }
            }
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Body;
    use crate::route::Route;

    #[test]
    fn durations_truncate_to_whole_seconds() {
        assert_eq!(format_duration(0.4), "0s");
        assert_eq!(format_duration(59.9), "59s");
        assert_eq!(format_duration(61.0), "1m1s");
        assert_eq!(format_duration(3605.0), "1h0m5s");
        assert_eq!(format_duration(f64::INFINITY), "n/a");
    }

    #[test]
    fn composite_summary_lists_legs() {
        let a = Body::new("A", Point::ORIGIN, 0.0);
        let h1 = Body::new("H1", Point::new(1.0, 0.0, 0.0), 0.0);
        let b = Body::new("B", Point::new(50.0, 0.0, 0.0), 0.0);
        let h2 = Body::new("H2", Point::new(52.0, 0.0, 0.0), 0.0);
        let route = Route::composite(Route::direct(&a, &h1), Route::direct(&b, &h2));
        let plan = RoutePlan {
            elapsed_seconds: route.elapsed_seconds(2.0),
            route,
            speed: 2.0,
        };

        let summary = RouteSummary::from_plan(&plan);
        assert!(!summary.direct);
        assert_eq!(summary.legs.len(), 2);
        assert_eq!(summary.legs[1].from, "B");
        assert_eq!(summary.legs[1].to, "H2");

        let text = summary.render(RenderMode::PlainText);
        assert!(text.starts_with("Route A to H2 (via gates, warp 2): 3.00"));
        assert!(text.contains("  2: B -> H2 [2.00]"));
    }
}
