use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// 8-bit RGB color with an opacity in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Expected #rrggbb color, got: {hex}"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("Bad color {hex}: {e}"))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Adds `amount` to every channel, clamping to 0..=255. Opacity is kept.
    pub fn adjust(&self, amount: f64) -> Self {
        let shift = |c: u8| (c as f64 + amount).clamp(0., 255.).round() as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
            a: self.a,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// `#rrggbb` without the opacity.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS notation: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let args = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));
        let Some(args) = args else {
            return Self::from_hex(s);
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!("Bad color: {s}"));
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|e| format!("Bad color {s}: {e}"));
        let a = match parts.get(3) {
            Some(p) => p.parse::<f32>().map_err(|e| format!("Bad color {s}: {e}"))?,
            None => 1.0,
        };
        Ok(Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        if value.is_opaque() {
            value.to_hex()
        } else {
            value.to_string()
        }
    }
}

/// Source of the small per-tile brightness offsets that give tiles texture.
///
/// The offset only changes tile colors, never the tile geometry.
pub trait ColorJitter {
    /// Returns an offset within `range`.
    fn offset(&mut self, range: Range<f64>) -> f64;
}

/// Draws every tile in its base color.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl ColorJitter for NoJitter {
    fn offset(&mut self, _range: Range<f64>) -> f64 {
        0.
    }
}

/// Uniformly distributed offsets from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomJitter<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomJitter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter, the same seed gives the same tile colors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ColorJitter for RandomJitter<R> {
    fn offset(&mut self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}
