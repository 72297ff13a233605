use core::fmt;

const MICROS_PER_MILLI: f64 = 1_000.0;
const MICROS_PER_SECOND: f64 = 1_000_000.0;
const MICROS_PER_MINUTE: f64 = 60.0 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: f64 = 60.0 * MICROS_PER_MINUTE;

/// The units a latency can be displayed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum DurationUnit {
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl DurationUnit {
    /// Picks the unit for a value in microseconds. Larger units are only used
    /// once a value spans a comfortable multiple of them, so `90s` stays in
    /// seconds rather than becoming `1.5 min`.
    pub fn for_micros(micros: f64) -> Self {
        if micros > 10.0 * MICROS_PER_HOUR {
            Self::Hours
        } else if micros > 10.0 * MICROS_PER_MINUTE {
            Self::Minutes
        } else if micros > 10.0 * MICROS_PER_SECOND {
            Self::Seconds
        } else if micros > MICROS_PER_MILLI {
            Self::Milliseconds
        } else {
            Self::Microseconds
        }
    }

    /// The number of microseconds in one of this unit.
    pub fn micros(&self) -> f64 {
        match self {
            Self::Microseconds => 1.0,
            Self::Milliseconds => MICROS_PER_MILLI,
            Self::Seconds => MICROS_PER_SECOND,
            Self::Minutes => MICROS_PER_MINUTE,
            Self::Hours => MICROS_PER_HOUR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Microseconds => "μs",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "h",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
