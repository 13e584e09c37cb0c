//! Per-satellite geometry assembly.
//!
//! Joins the segmenter and the color assigner into what a map layer needs
//! for one satellite: colored trail segments, normalized history markers
//! and the live position. Presentation (line widths, icons, popups) stays
//! with the renderer.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette, TrackId};
use crate::error::Result;
use crate::trail::{Segment, build_trail_segments};
use crate::{GeoPoint, HistoryPoint, RawHistoryPoint};

/// Operational state reported by the feed.
///
/// The feed sends a bare JSON number. Any number is accepted, so one odd
/// record (`1.0`, `-1`, `0.5`) does not fail a whole batch; only exactly
/// 1 and 0 carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum SatelliteStatus {
    /// Status code 1: positions are being received.
    Active,
    /// Status code 0: the satellite stopped reporting.
    #[default]
    Decayed,
    /// Any other code.
    Unknown(f64),
}

impl From<f64> for SatelliteStatus {
    fn from(code: f64) -> Self {
        if code == 1.0 {
            SatelliteStatus::Active
        } else if code == 0.0 {
            SatelliteStatus::Decayed
        } else {
            SatelliteStatus::Unknown(code)
        }
    }
}

impl From<SatelliteStatus> for f64 {
    fn from(status: SatelliteStatus) -> Self {
        match status {
            SatelliteStatus::Active => 1.0,
            SatelliteStatus::Decayed => 0.0,
            SatelliteStatus::Unknown(code) => code,
        }
    }
}

/// One tracked satellite as handed over by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteTrack {
    #[serde(default)]
    pub id: Option<TrackId>,
    #[serde(default)]
    pub satname: Option<String>,
    #[serde(default)]
    pub status: SatelliteStatus,
    /// Current position; decayed satellites carry an out-of-range sentinel.
    #[serde(default)]
    pub location: Option<RawHistoryPoint>,
    /// Past positions, newest first.
    #[serde(default)]
    pub history: Vec<RawHistoryPoint>,
}

impl SatelliteTrack {
    pub fn is_active(&self) -> bool {
        self.status == SatelliteStatus::Active
    }

    /// Label for lists: the satellite name, else its id.
    pub fn display_name(&self) -> String {
        match (&self.satname, &self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => String::from("unknown"),
        }
    }

    /// Live position, if it is a real on-map coordinate.
    ///
    /// Unlike history samples the live position is never normalized: a
    /// longitude outside [−180, 180] means the feed has no fix.
    pub fn live_position(&self) -> Option<GeoPoint> {
        let location = self.location.as_ref()?;
        let (lat, lon) = (location.lat?, location.lon?);
        let on_map = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        on_map.then(|| GeoPoint::new(lat, lon))
    }

    /// Active and positioned on the map.
    pub fn is_visible(&self) -> bool {
        self.is_active() && self.live_position().is_some()
    }

    /// Validated history, newest first.
    pub fn history_points(&self) -> Result<Vec<HistoryPoint>> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, raw)| raw.to_history_point(i))
            .collect()
    }
}

/// Everything a renderer needs to draw one satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub id: TrackId,
    pub name: String,
    pub color: Color,
    /// Trail polylines, oldest first.
    pub segments: Vec<Segment>,
    /// One marker per history sample, normalized, newest first.
    pub markers: Vec<GeoPoint>,
    pub position: Option<GeoPoint>,
}

/// Build geometry for `track`.
///
/// `visible_index` is the track's position among visible tracks; it picks
/// the color when the track has no id of its own.
pub fn build_track_geometry(
    track: &SatelliteTrack,
    visible_index: usize,
    palette: &Palette,
) -> Result<TrackGeometry> {
    let id = fallback_id(track, visible_index);
    let history = track.history_points()?;
    let segments = build_trail_segments(&history)?;
    let markers = history
        .iter()
        .enumerate()
        .map(|(i, p)| p.to_normalized(i))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "[groundtrack] Track {}: {} segments, {} markers",
        id,
        segments.len(),
        markers.len()
    );

    Ok(TrackGeometry {
        color: palette.color_for(&id),
        name: track.display_name(),
        position: track.live_position(),
        id,
        segments,
        markers,
    })
}

/// A track left out of a [`MapGeometry`] because its data was unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTrack {
    pub id: TrackId,
    pub reason: String,
}

/// Geometry for every visible track of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapGeometry {
    pub tracks: Vec<TrackGeometry>,
    /// Visible tracks whose history could not be segmented.
    pub skipped: Vec<SkippedTrack>,
}

impl MapGeometry {
    fn collect(results: Vec<(TrackId, Result<TrackGeometry>)>) -> Self {
        let mut geometry = MapGeometry::default();
        for (id, result) in results {
            match result {
                Ok(track) => geometry.tracks.push(track),
                Err(e) => {
                    warn!("[groundtrack] Skipping track {}: {}", id, e);
                    geometry.skipped.push(SkippedTrack {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }
        geometry
    }
}

fn visible_tracks(tracks: &[SatelliteTrack]) -> Vec<&SatelliteTrack> {
    tracks.iter().filter(|t| t.is_visible()).collect()
}

/// The track's own id, or its on-screen index when the feed gave none.
fn fallback_id(track: &SatelliteTrack, visible_index: usize) -> TrackId {
    track
        .id
        .clone()
        .unwrap_or_else(|| TrackId::from(visible_index))
}

/// Build geometry for all visible tracks, skipping (and logging) bad ones.
pub fn build_map_geometry(tracks: &[SatelliteTrack], palette: &Palette) -> MapGeometry {
    let results = visible_tracks(tracks)
        .into_iter()
        .enumerate()
        .map(|(idx, track)| {
            (
                fallback_id(track, idx),
                build_track_geometry(track, idx, palette),
            )
        })
        .collect();
    MapGeometry::collect(results)
}

/// Parallel version of [`build_map_geometry`]; output order matches input order.
#[cfg(feature = "parallel")]
pub fn build_map_geometry_parallel(tracks: &[SatelliteTrack], palette: &Palette) -> MapGeometry {
    use rayon::prelude::*;

    let results = visible_tracks(tracks)
        .into_par_iter()
        .enumerate()
        .map(|(idx, track)| {
            (
                fallback_id(track, idx),
                build_track_geometry(track, idx, palette),
            )
        })
        .collect();
    MapGeometry::collect(results)
}

/// Names of active and decayed satellites, for a status panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub active: Vec<String>,
    pub decayed: Vec<String>,
}

impl StatusSummary {
    /// Tracks with an unknown status code appear in neither list.
    pub fn from_tracks(tracks: &[SatelliteTrack]) -> Self {
        let names = |status: SatelliteStatus| {
            tracks
                .iter()
                .filter(|t| t.status == status)
                .map(SatelliteTrack::display_name)
                .collect()
        };
        Self {
            active: names(SatelliteStatus::Active),
            decayed: names(SatelliteStatus::Decayed),
        }
    }
}
