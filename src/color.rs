//! Deterministic track coloring.
//!
//! Each track id maps to one entry of a fixed palette so a satellite keeps
//! the same trail color across re-renders and process restarts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TrailError};

/// A 24-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TrailError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = TrailError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Default trail palette: the ten category colors followed by six high
/// contrast extras.
pub const TRAIL_COLORS: [Color; 16] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
    Color::rgb(0x8f, 0x46, 0x39),
    Color::rgb(0x91, 0x06, 0xcd),
    Color::rgb(0xcd, 0x06, 0xa4),
    Color::rgb(0xcd, 0x06, 0x42),
    Color::rgb(0x42, 0xcd, 0x06),
    Color::rgb(0x06, 0xcd, 0x91),
];

/// Identifier used to pick a track color.
///
/// Deserializes from any JSON number or string. Integral numbers (`3`,
/// `3.0`) become indices; any other number becomes a key over its decimal
/// text, so it still lands on a palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TrackId {
    /// Positional index, e.g. the track's order on screen.
    Index(i64),
    /// Opaque key such as a NORAD id string.
    Key(String),
}

impl TrackId {
    /// Stable 32-bit string hash: `h = h * 31 + unit`, wrapping, over the
    /// UTF-16 code units of the key.
    pub fn key_hash(key: &str) -> u32 {
        key.encode_utf16()
            .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrackId {
    Integer(i64),
    Number(f64),
    Key(String),
}

impl<'de> Deserialize<'de> for TrackId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match RawTrackId::deserialize(deserializer)? {
            RawTrackId::Integer(index) => TrackId::Index(index),
            RawTrackId::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                TrackId::Index(n as i64)
            }
            RawTrackId::Number(n) => TrackId::Key(n.to_string()),
            RawTrackId::Key(key) => TrackId::Key(key),
        })
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Index(i) => write!(f, "{i}"),
            TrackId::Key(k) => f.write_str(k),
        }
    }
}

impl From<i64> for TrackId {
    fn from(index: i64) -> Self {
        TrackId::Index(index)
    }
}

impl From<usize> for TrackId {
    fn from(index: usize) -> Self {
        TrackId::Index(index as i64)
    }
}

impl From<&str> for TrackId {
    fn from(key: &str) -> Self {
        TrackId::Key(key.to_string())
    }
}

impl From<String> for TrackId {
    fn from(key: String) -> Self {
        TrackId::Key(key)
    }
}

/// An ordered, non-empty, read-only list of trail colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette, rejecting an empty color list.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(TrailError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Color assigned to `id`.
    ///
    /// Indices wrap with a non-negative modulo; keys go through
    /// [`TrackId::key_hash`].
    pub fn color_for(&self, id: &TrackId) -> Color {
        let slot = match id {
            TrackId::Index(i) => i.rem_euclid(self.colors.len() as i64) as usize,
            TrackId::Key(key) => TrackId::key_hash(key) as usize % self.colors.len(),
        };
        self.colors[slot]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: TRAIL_COLORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = TrailError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Color for `id` from the process-wide palette.
///
/// # Example
/// ```
/// use groundtrack::{TrackId, color_for};
///
/// let a = color_for(&TrackId::from("SAT-A"));
/// assert_eq!(a, color_for(&TrackId::from("SAT-A")));
/// assert_eq!(color_for(&TrackId::Index(1)).to_hex(), "#ff7f0e");
/// ```
pub fn color_for(id: &TrackId) -> Color {
    crate::config::MapConfig::global().palette.color_for(id)
}
