//! Body catalog loaded from a navcomp JSON document.
//!
//! The catalog is read once and never mutated afterwards. Bodies are visited
//! in encounter order: empires in document order, then each empire's planets
//! followed by its stations. Name lookups and filters both honour that order,
//! so the first partial match always wins.

use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Frame name meaning "already in galactic coordinates".
pub const GLOBAL_FRAME: &str = "grc";

/// Maximum number of suggestions attached to an unknown-name error.
const MAX_SUGGESTIONS: usize = 5;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A planet or station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    #[serde(flatten)]
    pub position: Point,
    /// Local density feeding the travel-time model; zero means unset.
    #[serde(default)]
    pub cochranes: f64,
    #[serde(default)]
    pub market: i64,
}

impl Body {
    pub fn new(name: impl Into<String>, position: Point, cochranes: f64) -> Self {
        Self {
            name: name.into(),
            position,
            cochranes,
            market: 0,
        }
    }

    /// Case-insensitive substring match on the body name.
    pub fn matches_name(&self, partial: &str) -> bool {
        self.name.to_lowercase().contains(&partial.to_lowercase())
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance_to(&other.position)
    }

    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.position.distance_to(point)
    }
}

/// A named region whose origin defines a local coordinate frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(flatten)]
    pub origin: Point,
    #[serde(default)]
    pub radius: f64,
}

/// Political grouping owning regions, planets and stations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empire {
    pub name: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(rename = "borders", default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub planets: Vec<Body>,
    #[serde(default)]
    pub stations: Vec<Body>,
}

impl Empire {
    fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.planets.iter().chain(self.stations.iter())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "ATS_Navcomp_DB")]
    database: CatalogDatabase,
}

#[derive(Debug, Deserialize)]
struct CatalogDatabase {
    #[serde(default)]
    version: f64,
    #[serde(default)]
    empires: Vec<Empire>,
}

/// In-memory body catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    version: f64,
    empires: Vec<Empire>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog directly from empires, mostly useful for tests.
    pub fn from_empires(empires: Vec<Empire>) -> Self {
        Self {
            version: 0.0,
            empires,
            source: None,
        }
    }

    /// Load the catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::CatalogNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(err),
        })?;
        let mut catalog = Self::from_reader(file).map_err(|err| match err {
            Error::Json(source) => Error::CatalogParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            version = catalog.version,
            empires = catalog.empires.len(),
            bodies = catalog.len(),
            "loaded body catalog"
        );
        Ok(catalog)
    }

    /// Load the catalog from any reader producing the JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Ok(Self {
            version: document.database.version,
            empires: document.database.empires,
            source: None,
        })
    }

    pub fn version(&self) -> f64 {
        self.version
    }

    pub fn empires(&self) -> &[Empire] {
        &self.empires
    }

    /// Path the catalog was read from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All bodies in encounter order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.empires.iter().flat_map(|empire| empire.bodies())
    }

    /// All regions in encounter order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.empires.iter().flat_map(|empire| empire.regions.iter())
    }

    pub fn len(&self) -> usize {
        self.bodies().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies().next().is_none()
    }

    /// First body whose name contains `partial`, ignoring case.
    pub fn find_body(&self, partial: &str) -> Result<&Body> {
        self.bodies()
            .find(|body| body.matches_name(partial))
            .ok_or_else(|| Error::UnknownBody {
                name: partial.to_string(),
                suggestions: self.fuzzy_matches(partial, MAX_SUGGESTIONS),
            })
    }

    /// Body whose name equals `name` exactly. When several bodies share the
    /// name, the last one in encounter order wins.
    pub fn body_by_exact_name(&self, name: &str) -> Option<&Body> {
        self.bodies().filter(|body| body.name == name).last()
    }

    /// Bodies accepted by `predicate`, in encounter order.
    pub fn filter_bodies<F>(&self, mut predicate: F) -> Vec<&Body>
    where
        F: FnMut(&Body) -> bool,
    {
        self.bodies().filter(|body| predicate(*body)).collect()
    }

    /// Resolve a source and target name, failing on the first unknown one.
    pub fn resolve_pair(&self, source: &str, target: &str) -> Result<(&Body, &Body)> {
        let source = self.find_body(source)?;
        let target = self.find_body(target)?;
        Ok((source, target))
    }

    /// First region whose name contains `frame`, ignoring case.
    pub fn find_region(&self, frame: &str) -> Option<&Region> {
        let needle = frame.to_lowercase();
        self.regions()
            .find(|region| region.name.to_lowercase().contains(&needle))
    }

    /// Convert a point expressed in a region frame into galactic coordinates.
    pub fn translate_frame(&self, point: &Point, frame: &str) -> Result<Point> {
        if frame.eq_ignore_ascii_case(GLOBAL_FRAME) {
            return Ok(*point);
        }
        let region = self.find_region(frame).ok_or_else(|| Error::FrameNotFound {
            frame: frame.to_string(),
        })?;
        Ok(point.translate(&region.origin))
    }

    /// Body names resembling `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .bodies()
            .map(|body| {
                let score = strsim::jaro_winkler(&needle, &body.name.to_lowercase());
                (score, body.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        let mut names: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if names.len() >= limit {
                break;
            }
            if !names.iter().any(|existing| existing == candidate) {
                names.push(candidate.to_string());
            }
        }
        names
    }
}
