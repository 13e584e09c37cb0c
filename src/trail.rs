//! Antimeridian-aware trail segmentation.
//!
//! A satellite history is a list of samples stored newest-first. Drawing it
//! as a single polyline on a flat map produces a line across the whole world
//! every time the track wraps from +180° to −180°. This module walks the
//! history oldest-first and splits it into segments at each wrap, closing the
//! old segment on the map edge and opening the next one on the opposite edge
//! at the interpolated latitude.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::longitude::{Antimeridian, FULL_TURN, normalize_longitude, unwrap_longitude};
use crate::{GeoPoint, HistoryPoint};

/// A continuous drawable polyline with no wraparound inside it.
///
/// Segments produced by [`build_trail_segments`] always hold at least two
/// vertices, ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment {
    points: Vec<GeoPoint>,
}

impl Segment {
    /// Vertices of the polyline, in draw order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Vertices as `[lat, lon]` pairs, the shape map polyline layers expect.
    pub fn to_lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.lat, p.lon]).collect()
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

/// Fold state: the segment being built plus every segment already closed.
struct TrailAccumulator {
    current: Vec<GeoPoint>,
    completed: Vec<Segment>,
}

impl TrailAccumulator {
    fn start(first: GeoPoint) -> Self {
        Self {
            current: vec![first],
            completed: Vec::new(),
        }
    }

    /// Extend the trail from `p1` (the previous sample) to `p2`.
    fn advance(mut self, p1: GeoPoint, p2: GeoPoint) -> Result<Self> {
        let lon2u = unwrap_longitude(p1.lon, p2.lon);

        // The crossing check must come first: it is what guarantees
        // lon2u != p1.lon before the fraction divides by their difference.
        let Some(edge) = Antimeridian::crossed(p1.lon, lon2u) else {
            self.current
                .push(GeoPoint::new(p2.lat, normalize_longitude(lon2u)?));
            return Ok(self);
        };

        let t = edge.fraction(p1.lon, lon2u);
        let lat_at_edge = p1.lat + t * (p2.lat - p1.lat);

        self.current.push(GeoPoint::new(lat_at_edge, edge.degrees()));
        let closed = std::mem::replace(
            &mut self.current,
            vec![GeoPoint::new(lat_at_edge, edge.mirror())],
        );
        self.completed.push(Segment { points: closed });

        let destination = normalize_longitude(lon2u - edge.sign() * FULL_TURN)?;
        self.current.push(GeoPoint::new(p2.lat, destination));
        Ok(self)
    }

    fn finish(mut self) -> Vec<Segment> {
        // A lone trailing vertex cannot be drawn as a line.
        if self.current.len() > 1 {
            self.completed.push(Segment {
                points: self.current,
            });
        }
        self.completed
    }
}

/// Split a newest-first history into drawable segments.
///
/// Histories with fewer than two samples produce no segments. Every sample
/// is validated and normalized before the scan; an invalid sample aborts
/// with an error that names its index in `history`.
///
/// # Example
/// ```
/// use groundtrack::{HistoryPoint, build_trail_segments};
///
/// // Newest first: the track moved east from 170° to −170°.
/// let history = vec![HistoryPoint::new(0.0, -170.0), HistoryPoint::new(0.0, 170.0)];
/// let segments = build_trail_segments(&history).unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].last().unwrap().lon, 180.0);
/// assert_eq!(segments[1].first().unwrap().lon, -180.0);
/// ```
pub fn build_trail_segments(history: &[HistoryPoint]) -> Result<Vec<Segment>> {
    if history.len() < 2 {
        return Ok(Vec::new());
    }

    let last_index = history.len() - 1;
    let points: Vec<GeoPoint> = history
        .iter()
        .rev()
        .enumerate()
        .map(|(i, p)| p.to_normalized(last_index - i))
        .collect::<Result<_>>()?;

    let accumulator = points.windows(2).try_fold(
        TrailAccumulator::start(points[0]),
        |acc, pair| acc.advance(pair[0], pair[1]),
    )?;
    let segments = accumulator.finish();

    debug!(
        "[groundtrack] {} history points -> {} segments",
        history.len(),
        segments.len()
    );
    Ok(segments)
}

/// Segment many histories in parallel, preserving input order.
#[cfg(feature = "parallel")]
pub fn build_trail_segments_parallel(histories: &[Vec<HistoryPoint>]) -> Vec<Result<Vec<Segment>>> {
    use rayon::prelude::*;

    histories
        .par_iter()
        .map(|history| build_trail_segments(history))
        .collect()
}
