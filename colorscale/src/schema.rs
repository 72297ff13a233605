use crate::{ParseSchemaError, Rgb};

use core::fmt;
use core::str::FromStr;

static GREEN_TO_RED: [Rgb; 5] = [
    Rgb::new(0, 104, 55),
    Rgb::new(102, 189, 99),
    Rgb::new(255, 255, 191),
    Rgb::new(244, 109, 67),
    Rgb::new(165, 0, 38),
];

static GREENS: [Rgb; 5] = [
    Rgb::new(247, 252, 245),
    Rgb::new(199, 233, 192),
    Rgb::new(116, 196, 118),
    Rgb::new(35, 139, 69),
    Rgb::new(0, 68, 27),
];

static GREYS: [Rgb; 5] = [
    Rgb::new(255, 255, 255),
    Rgb::new(217, 217, 217),
    Rgb::new(150, 150, 150),
    Rgb::new(82, 82, 82),
    Rgb::new(0, 0, 0),
];

static REDS: [Rgb; 5] = [
    Rgb::new(255, 245, 240),
    Rgb::new(252, 187, 161),
    Rgb::new(251, 106, 74),
    Rgb::new(203, 24, 29),
    Rgb::new(103, 0, 13),
];

static YELLOW_TO_RED: [Rgb; 5] = [
    Rgb::new(255, 255, 204),
    Rgb::new(254, 217, 118),
    Rgb::new(253, 141, 60),
    Rgb::new(227, 26, 28),
    Rgb::new(128, 0, 38),
];

static BLUES: [Rgb; 5] = [
    Rgb::new(247, 251, 255),
    Rgb::new(198, 219, 239),
    Rgb::new(107, 174, 214),
    Rgb::new(33, 113, 181),
    Rgb::new(8, 48, 107),
];

/// The named color ramps available for heatmap coloring. Each ramp runs from
/// the color used for a ratio of `0.0` to the color used for `1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ColorSchema {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Green to Red"))]
    GreenToRed,
    Greens,
    Greys,
    Reds,
    #[cfg_attr(feature = "serde", serde(rename = "Yellow to Red"))]
    YellowToRed,
    Blues,
}

impl ColorSchema {
    pub const ALL: [ColorSchema; 6] = [
        ColorSchema::GreenToRed,
        ColorSchema::Greens,
        ColorSchema::Greys,
        ColorSchema::Reds,
        ColorSchema::YellowToRed,
        ColorSchema::Blues,
    ];

    /// The human readable name, which is also the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GreenToRed => "Green to Red",
            Self::Greens => "Greens",
            Self::Greys => "Greys",
            Self::Reds => "Reds",
            Self::YellowToRed => "Yellow to Red",
            Self::Blues => "Blues",
        }
    }

    /// Evenly spaced color stops, first stop is the color at ratio `0.0`.
    pub(crate) fn stops(&self) -> &'static [Rgb] {
        match self {
            Self::GreenToRed => &GREEN_TO_RED,
            Self::Greens => &GREENS,
            Self::Greys => &GREYS,
            Self::Reds => &REDS,
            Self::YellowToRed => &YELLOW_TO_RED,
            Self::Blues => &BLUES,
        }
    }
}

impl fmt::Display for ColorSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSchema {
    type Err = ParseSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|schema| schema.name() == s)
            .copied()
            .ok_or_else(|| ParseSchemaError { name: s.to_owned() })
    }
}
