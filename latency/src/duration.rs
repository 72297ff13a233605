use crate::number::as_decimal_or_integer;
use crate::DurationUnit;

const NOT_AVAILABLE: &str = "N/A";

/// A duration rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedDuration {
    /// The numeric part, already rendered.
    pub value: String,
    /// The unit the value is expressed in.
    pub unit: String,
    /// The value and unit together, eg: `1.5 ms`.
    pub formatted: String,
}

impl FormattedDuration {
    fn not_available() -> Self {
        Self {
            value: NOT_AVAILABLE.to_owned(),
            unit: String::new(),
            formatted: NOT_AVAILABLE.to_owned(),
        }
    }
}

/// Renders a duration given in microseconds.
pub trait DurationFormatter {
    fn format(&self, micros: f64) -> FormattedDuration;
}

/// Formats durations given in microseconds.
///
/// By default the unit is picked per value, see `DurationUnit::for_micros`.
/// A formatter built with `with_max` or `with_unit` renders every value in the
/// same unit instead, which keeps the ticks of a chart axis comparable.
///
/// Values smaller than ten (in the chosen unit) keep a single fractional
/// digit, larger values are rounded and grouped by thousands. Non-finite
/// values render as `N/A` with no unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AsDuration {
    unit: Option<DurationUnit>,
}

impl AsDuration {
    pub const fn new() -> Self {
        Self { unit: None }
    }

    /// A formatter whose unit is chosen from the largest value to be shown.
    pub fn with_max(max: f64) -> Self {
        Self {
            unit: Some(DurationUnit::for_micros(max)),
        }
    }

    pub const fn with_unit(unit: DurationUnit) -> Self {
        Self { unit: Some(unit) }
    }

    /// The fixed unit, if any.
    pub fn unit(&self) -> Option<DurationUnit> {
        self.unit
    }
}

impl DurationFormatter for AsDuration {
    fn format(&self, micros: f64) -> FormattedDuration {
        if !micros.is_finite() {
            log::trace!("duration is not finite: {micros}");
            return FormattedDuration::not_available();
        }

        let unit = self
            .unit
            .unwrap_or_else(|| DurationUnit::for_micros(micros));
        let value = as_decimal_or_integer(micros / unit.micros());
        let formatted = format!("{value} {unit}");

        FormattedDuration {
            value,
            unit: unit.as_str().to_owned(),
            formatted,
        }
    }
}
