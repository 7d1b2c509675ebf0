use serde::{Deserialize, Serialize};

/// A longitude/latitude pair, in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from a longitude/latitude pair.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A snapping bearing: heading plus allowed deviation, both in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bearing {
    /// Heading in degrees, clockwise from true north.
    pub value: u16,
    /// Allowed deviation from the heading, in degrees.
    pub range: u16,
}

/// Parameters common to every service, filled in by the base grammar.
///
/// The per-waypoint lists (`bearings`, `radiuses`, `hints`) are positional:
/// entry *i* applies to coordinate *i*, and an omitted entry is `None`.
/// Whether list lengths match the coordinate count is checked by a later
/// stage, not at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaseParameters {
    /// Waypoint coordinates, in request order.
    pub coordinates: Vec<Coordinate>,
    /// Per-waypoint snapping bearings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bearings: Vec<Option<Bearing>>,
    /// Per-waypoint snapping radiuses in meters; `None` means unlimited.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radiuses: Vec<Option<f64>>,
    /// Per-waypoint snapping hints from a previous response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Option<String>>,
    /// Whether the response should carry hints for follow-up requests.
    #[serde(default = "default_generate_hints")]
    pub generate_hints: bool,
    /// Road class names to exclude from the computation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

fn default_generate_hints() -> bool {
    true
}

impl Default for BaseParameters {
    fn default() -> Self {
        Self {
            coordinates: Vec::new(),
            bearings: Vec::new(),
            radiuses: Vec::new(),
            hints: Vec::new(),
            generate_hints: true,
            exclude: Vec::new(),
        }
    }
}
