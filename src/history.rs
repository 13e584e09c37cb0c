//! Bounded newest-first position history for a single track.

use serde::{Deserialize, Serialize};

use crate::HistoryPoint;
use crate::config::MapConfig;
use crate::error::Result;
use crate::trail::{Segment, build_trail_segments};

/// The most recent samples of one track, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackHistory {
    points: Vec<HistoryPoint>,
    capacity: usize,
}

impl TrackHistory {
    /// Empty history keeping at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Wrap existing newest-first samples, dropping the oldest beyond `capacity`.
    pub fn from_points(mut points: Vec<HistoryPoint>, capacity: usize) -> Self {
        points.truncate(capacity);
        Self { points, capacity }
    }

    /// Record a new sample as the most recent one, evicting the oldest when full.
    pub fn record(&mut self, point: HistoryPoint) {
        self.points.insert(0, point);
        self.points.truncate(self.capacity);
    }

    /// Samples, newest first.
    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.first()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drawable trail for the current samples.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        build_trail_segments(&self.points)
    }
}

impl Default for TrackHistory {
    /// Empty history sized from the process-wide configuration.
    fn default() -> Self {
        Self::with_capacity(MapConfig::global().history_capacity)
    }
}
