//! Synthetic ground track generator for stress testing and benchmarking.
//!
//! Propagates a circular orbit over a rotating Earth and samples its
//! sub-satellite point. Longitudes are left raw: they drift continuously
//! past ±180° instead of being wrapped, which is exactly the input the
//! segmenter has to cope with. The number of antimeridian crossings is
//! recorded as ground truth.
//!
//! Feature-gated behind `synthetic` — not included in production builds.
//!
//! # Example
//!
//! ```rust
//! use groundtrack::synthetic::GroundTrackScenario;
//! use groundtrack::build_trail_segments;
//!
//! let track = GroundTrackScenario::iss_like().generate();
//! let segments = build_trail_segments(&track.history).unwrap();
//! assert_eq!(segments.len(), track.antimeridian_crossings + 1);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::color::TrackId;
use crate::track::{SatelliteStatus, SatelliteTrack};
use crate::{HistoryPoint, RawHistoryPoint};

// ============================================================================
// Types
// ============================================================================

/// Orbit and sampling parameters for one synthetic track.
#[derive(Debug, Clone)]
pub struct GroundTrackScenario {
    /// Orbital inclination in degrees (above 90 is retrograde).
    pub inclination_deg: f64,
    /// Orbital period in minutes.
    pub period_minutes: f64,
    /// Longitude of the ascending node at the first sample, in degrees.
    pub ascending_node_lon: f64,
    /// Argument of latitude at the first sample, in degrees.
    pub initial_argument_deg: f64,
    /// Seconds between samples.
    pub sample_interval_seconds: f64,
    /// Number of samples to generate.
    pub samples: usize,
    /// Timestamp of the first sample (unix seconds).
    pub epoch_seconds: f64,
    /// Gaussian position noise standard deviation, in degrees.
    pub noise_sigma_deg: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

/// A generated history with its ground truth.
#[derive(Debug, Clone)]
pub struct SyntheticTrack {
    /// Samples, newest first, with raw (unwrapped) longitudes.
    pub history: Vec<HistoryPoint>,
    /// How many times consecutive samples straddle an antimeridian.
    pub antimeridian_crossings: usize,
    /// Largest absolute longitude change between consecutive samples.
    pub max_step_deg: f64,
}

// ============================================================================
// Orbit Helpers
// ============================================================================

/// Sidereal day in seconds.
const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;

/// Earth rotation rate in degrees per second.
const EARTH_ROTATION_DEG_PER_S: f64 = 360.0 / SIDEREAL_DAY_SECONDS;

/// Wrap an angle in radians into (−π, π].
fn wrap_pm_pi(angle: f64) -> f64 {
    let x = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if x == -PI { PI } else { x }
}

/// Index of the map copy a raw longitude falls in (0 for (−180, 180]).
fn map_copy(lon: f64) -> i64 {
    -((180.0 - lon) / 360.0).floor() as i64
}

fn gaussian(rng: &mut StdRng) -> f64 {
    // Box-Muller transform
    let u1: f64 = rng.gen_range(0.0001..1.0);
    let u2: f64 = rng.r#gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

// ============================================================================
// Scenario Implementation
// ============================================================================

impl GroundTrackScenario {
    /// A 51.6° low Earth orbit sampled once a minute for about two orbits.
    pub fn iss_like() -> Self {
        Self {
            inclination_deg: 51.64,
            period_minutes: 92.68,
            ascending_node_lon: 150.0,
            initial_argument_deg: 0.0,
            sample_interval_seconds: 60.0,
            samples: 200,
            epoch_seconds: 1_700_000_000.0,
            noise_sigma_deg: 0.0,
            seed: 42,
        }
    }

    /// A retrograde sun-synchronous orbit; its track crosses the map edge
    /// westbound on the ascending pass.
    pub fn polar() -> Self {
        Self {
            inclination_deg: 97.5,
            period_minutes: 95.0,
            ascending_node_lon: -120.0,
            initial_argument_deg: 30.0,
            sample_interval_seconds: 30.0,
            samples: 600,
            epoch_seconds: 1_700_000_000.0,
            noise_sigma_deg: 0.0,
            seed: 7,
        }
    }

    /// Generate the sampled ground track.
    pub fn generate(&self) -> SyntheticTrack {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let inclination = self.inclination_deg.to_radians();
        let mean_motion = 2.0 * PI / (self.period_minutes * 60.0);
        let u0 = self.initial_argument_deg.to_radians();

        // Oldest first while propagating.
        let mut points: Vec<HistoryPoint> = Vec::with_capacity(self.samples);
        let mut previous_offset: Option<f64> = None;
        let mut continuous_offset = 0.0;

        for k in 0..self.samples {
            let elapsed = k as f64 * self.sample_interval_seconds;
            let u = u0 + mean_motion * elapsed;

            let lat = (inclination.sin() * u.sin()).asin().to_degrees();
            let offset = (inclination.cos() * u.sin()).atan2(u.cos());
            continuous_offset += match previous_offset {
                Some(prev) => wrap_pm_pi(offset - prev),
                None => offset,
            };
            previous_offset = Some(offset);

            let lon = self.ascending_node_lon + continuous_offset.to_degrees()
                - EARTH_ROTATION_DEG_PER_S * elapsed;

            let (lat, lon) = if self.noise_sigma_deg > 0.0 {
                (
                    (lat + gaussian(&mut rng) * self.noise_sigma_deg).clamp(-90.0, 90.0),
                    lon + gaussian(&mut rng) * self.noise_sigma_deg,
                )
            } else {
                (lat, lon)
            };

            points.push(HistoryPoint::with_timestamp(
                lat,
                lon,
                self.epoch_seconds + elapsed,
            ));
        }

        let antimeridian_crossings = points
            .windows(2)
            .filter(|pair| map_copy(pair[0].lon) != map_copy(pair[1].lon))
            .count();
        let max_step_deg = points
            .windows(2)
            .map(|pair| (pair[1].lon - pair[0].lon).abs())
            .fold(0.0, f64::max);

        points.reverse();
        SyntheticTrack {
            history: points,
            antimeridian_crossings,
            max_step_deg,
        }
    }

    /// `count` active satellites spread evenly in ascending node, ids `SAT-<n>`.
    pub fn constellation(&self, count: usize) -> Vec<SatelliteTrack> {
        (0..count)
            .map(|n| {
                let scenario = Self {
                    ascending_node_lon: self.ascending_node_lon + 360.0 * n as f64 / count as f64,
                    seed: self.seed.wrapping_add(n as u64),
                    ..self.clone()
                };
                let track = scenario.generate();
                let location = track.history.first().map(|p| {
                    let lon = crate::normalize_longitude(p.lon).unwrap_or(p.lon);
                    RawHistoryPoint::new(p.lat, lon)
                });

                SatelliteTrack {
                    id: Some(TrackId::Key(format!("SAT-{n}"))),
                    satname: Some(format!("Synthetic {n}")),
                    status: SatelliteStatus::Active,
                    location,
                    history: track.history.iter().map(RawHistoryPoint::from).collect(),
                }
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
