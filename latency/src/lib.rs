//! Formatting for latency values, which are recorded as microseconds.
//!
//! `AsDuration` renders a single value with a unit chosen by its magnitude,
//! or with a unit fixed by the largest value of a series so that every value
//! on one axis is comparable. `format_selection` renders a user selected
//! latency interval, only repeating the unit if the two ends differ.

mod duration;
mod number;
mod selection;
mod unit;

pub use duration::{AsDuration, DurationFormatter, FormattedDuration};
pub use selection::{format_selection, Selection};
pub use unit::DurationUnit;
