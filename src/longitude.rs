//! Longitude normalization and antimeridian handling.
//!
//! Canonical longitudes live in the half-open range (−180°, 180°]: the
//! antimeridian is always reported as +180, never −180.

use crate::error::{Result, TrailError};

/// Full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Half turn in degrees (the antimeridian).
pub const HALF_TURN: f64 = 180.0;

/// Reduce any finite longitude to its representative in (−180, 180].
///
/// Uses a floored modulo, so values far outside the range (accumulated
/// drift of a propagated orbit, for instance) fold back correctly.
///
/// # Example
/// ```
/// use groundtrack::normalize_longitude;
///
/// assert_eq!(normalize_longitude(190.0).unwrap(), -170.0);
/// assert_eq!(normalize_longitude(-180.0).unwrap(), 180.0);
/// assert!(normalize_longitude(f64::NAN).is_err());
/// ```
pub fn normalize_longitude(lon: f64) -> Result<f64> {
    if !lon.is_finite() {
        return Err(TrailError::InvalidLongitude { value: lon });
    }
    // Canonical values pass through untouched so normalization is exactly
    // idempotent; the modulo below can perturb the last bit.
    if lon > -HALF_TURN && lon <= HALF_TURN {
        return Ok(lon);
    }

    let x = (lon + HALF_TURN).rem_euclid(FULL_TURN) - HALF_TURN;
    if x == -HALF_TURN {
        return Ok(HALF_TURN);
    }
    Ok(x)
}

/// Shift `lon` by one full turn toward `reference` when the naive difference
/// exceeds a half turn.
///
/// Both inputs are expected to be normalized, so a single shift is enough to
/// bring the difference back into [−180, 180].
pub fn unwrap_longitude(reference: f64, lon: f64) -> f64 {
    let delta = lon - reference;
    if delta > HALF_TURN {
        lon - FULL_TURN
    } else if delta < -HALF_TURN {
        lon + FULL_TURN
    } else {
        lon
    }
}

/// One of the two edges of an equirectangular map.
///
/// There are exactly two boundaries, so [`Antimeridian::sign`] is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Antimeridian {
    /// The +180° edge, crossed while travelling east.
    East,
    /// The −180° edge, crossed while travelling west.
    West,
}

impl Antimeridian {
    /// Longitude of this edge in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Antimeridian::East => HALF_TURN,
            Antimeridian::West => -HALF_TURN,
        }
    }

    /// Longitude of the opposite edge, where the next segment restarts.
    pub fn mirror(self) -> f64 {
        -self.degrees()
    }

    /// +1 for the east edge, −1 for the west edge.
    pub fn sign(self) -> f64 {
        match self {
            Antimeridian::East => 1.0,
            Antimeridian::West => -1.0,
        }
    }

    /// Edge crossed when moving from `from_lon` to the unwrapped `to_lon`.
    ///
    /// A point sitting exactly on an edge belongs to the side it came from:
    /// the start longitude compares inclusively, the end longitude strictly.
    pub fn crossed(from_lon: f64, to_lon: f64) -> Option<Self> {
        if from_lon <= HALF_TURN && to_lon > HALF_TURN {
            Some(Antimeridian::East)
        } else if from_lon >= -HALF_TURN && to_lon < -HALF_TURN {
            Some(Antimeridian::West)
        } else {
            None
        }
    }

    /// Fraction of the way from `from_lon` to `to_lon` at which this edge lies.
    ///
    /// Only meaningful for a pair reported by [`Antimeridian::crossed`], which
    /// guarantees the two longitudes differ.
    pub fn fraction(self, from_lon: f64, to_lon: f64) -> f64 {
        debug_assert!(to_lon != from_lon);
        (self.degrees() - from_lon) / (to_lon - from_lon)
    }
}
