//! # Ground Track
//!
//! Antimeridian-aware trail geometry for satellite maps.
//!
//! This library provides:
//! - Longitude normalization into (−180°, 180°]
//! - Splitting of position histories into drawable polylines at ±180°
//! - Deterministic per-track colors from a fixed palette
//! - Per-satellite geometry assembly for map layers
//!
//! ## Features
//!
//! - **`parallel`** - Process many tracks in parallel with rayon
//! - **`synthetic`** - Synthetic orbit ground tracks for tests and benchmarks
//! - **`cli`** - The `groundtrack-cli` debug binary
//!
//! ## Quick Start
//!
//! ```rust
//! use groundtrack::{HistoryPoint, TrackId, build_trail_segments, color_for};
//!
//! // History is stored newest first.
//! let history = vec![
//!     HistoryPoint::new(10.0, -175.0),
//!     HistoryPoint::new(8.0, 178.0),
//!     HistoryPoint::new(6.0, 171.0),
//! ];
//!
//! let segments = build_trail_segments(&history).unwrap();
//! assert_eq!(segments.len(), 2);
//!
//! let color = color_for(&TrackId::from("25544"));
//! println!("{} segments in {}", segments.len(), color);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, TrailError};

// Longitude normalization and map edges
pub mod longitude;
pub use longitude::{Antimeridian, normalize_longitude, unwrap_longitude};

// Trail segmentation
pub mod trail;
#[cfg(feature = "parallel")]
pub use trail::build_trail_segments_parallel;
pub use trail::{Segment, build_trail_segments};

// Track colors
pub mod color;
pub use color::{Color, Palette, TRAIL_COLORS, TrackId, color_for};

// Process-wide configuration
pub mod config;
pub use config::MapConfig;

// Bounded per-track history
pub mod history;
pub use history::TrackHistory;

// Per-satellite geometry assembly
pub mod track;
#[cfg(feature = "parallel")]
pub use track::build_map_geometry_parallel;
pub use track::{
    MapGeometry, SatelliteStatus, SatelliteTrack, SkippedTrack, StatusSummary, TrackGeometry,
    build_map_geometry, build_track_geometry,
};

// Geographic helpers (bounds, geo conversions)
pub mod geo_utils;

// Synthetic ground tracks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A drawable map vertex. `lon` is normalized when produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One recorded position of a track.
///
/// `lon` is kept as reported and may lie outside [−180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub lat: f64,
    pub lon: f64,
    /// Sample time in unix seconds, when the feed supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
}

impl HistoryPoint {
    /// Create a history point without a timestamp.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, t: None }
    }

    /// Create a history point with a timestamp.
    pub fn with_timestamp(lat: f64, lon: f64, t: f64) -> Self {
        Self { lat, lon, t: Some(t) }
    }

    /// Validate the latitude and normalize the longitude.
    ///
    /// `index` is only used to label the error.
    pub fn to_normalized(&self, index: usize) -> Result<GeoPoint> {
        if !self.lat.is_finite() {
            return Err(TrailError::MalformedPoint {
                index,
                reason: format!("latitude {} is not finite", self.lat),
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(TrailError::MalformedPoint {
                index,
                reason: format!("latitude {} outside [-90, 90]", self.lat),
            });
        }
        Ok(GeoPoint::new(self.lat, normalize_longitude(self.lon)?))
    }
}

/// A history entry as deserialized, before its coordinates are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHistoryPoint {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
}

impl RawHistoryPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            t: None,
        }
    }

    /// Require both coordinates; `index` labels the error.
    pub fn to_history_point(&self, index: usize) -> Result<HistoryPoint> {
        Ok(HistoryPoint {
            lat: self.lat.ok_or_malformed(index, "missing lat")?,
            lon: self.lon.ok_or_malformed(index, "missing lon")?,
            t: self.t,
        })
    }
}

impl From<&HistoryPoint> for RawHistoryPoint {
    fn from(p: &HistoryPoint) -> Self {
        Self {
            lat: Some(p.lat),
            lon: Some(p.lon),
            t: p.t,
        }
    }
}
