//! Geographic helpers over segment lists.

use geo::{Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};

use crate::trail::Segment;

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Bounds of every vertex of every segment, or `None` when there are none.
    ///
    /// Segments never wrap internally, so the box is exact on a flat map; a
    /// trail that crosses the antimeridian spans the full longitude range.
    pub fn from_segments(segments: &[Segment]) -> Option<Self> {
        let mut points = segments.iter().flat_map(|s| s.points());
        let first = points.next()?;
        let init = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };

        Some(points.fold(init, |b, p| Self {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lon: b.min_lon.min(p.lon),
            max_lon: b.max_lon.max(p.lon),
        }))
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

/// Convert segments to a `geo` multi-line (x = longitude, y = latitude).
pub fn to_multi_line_string(segments: &[Segment]) -> MultiLineString<f64> {
    let lines = segments
        .iter()
        .map(|segment| {
            segment
                .points()
                .iter()
                .map(|p| Coord { x: p.lon, y: p.lat })
                .collect::<LineString<f64>>()
        })
        .collect();
    MultiLineString::new(lines)
}

/// Largest absolute longitude change between consecutive vertices.
///
/// Returns 0.0 for segments with fewer than two vertices.
pub fn max_longitude_step(segment: &Segment) -> f64 {
    segment
        .points()
        .windows(2)
        .map(|pair| (pair[1].lon - pair[0].lon).abs())
        .fold(0.0, f64::max)
}
