//! A range is one interval of the value domain that is colored and labeled
//! as a unit.

/// The half-open interval `from..to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Range {
    pub from: f64,
    pub to: f64,
}

impl Range {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Returns true if `from <= value < to`.
    pub fn contains(&self, value: f64) -> bool {
        self.from <= value && value < self.to
    }

    /// Returns the range as a `core::ops::Range`.
    pub fn range(&self) -> core::ops::Range<f64> {
        self.from..self.to
    }
}

impl From<core::ops::Range<f64>> for Range {
    fn from(range: core::ops::Range<f64>) -> Self {
        Self::new(range.start, range.end)
    }
}
