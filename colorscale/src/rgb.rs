use crate::ParseColorError;

use once_cell::sync::Lazy;
use regex::Regex;

use core::fmt;
use core::str::FromStr;

// unanchored, matching the color anywhere in the string
static RGB_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").unwrap());

/// An opaque color with 8bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = RGB_PATTERN.captures(s).ok_or(ParseColorError::NoMatch)?;

        let component = |idx: usize| -> Result<u8, ParseColorError> {
            let text = &captures[idx];
            text.parse::<u8>()
                .map_err(|_| ParseColorError::ComponentOutOfRange(text.to_owned()))
        };

        Ok(Rgb {
            r: component(1)?,
            g: component(2)?,
            b: component(3)?,
        })
    }
}
