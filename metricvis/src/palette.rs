//! Labels and colors for each bucket of a set of ranges.

use crate::Ranges;

use colorscale::{ColorScale, ColorSchema};

/// Rounds half-way cases towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rescale `bound` to a percentage of `max`, a zero `max` rescales to zero.
fn percent_of(bound: f64, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        round_half_up(100.0 * bound / max)
    }
}

/// Render a bound for a label. Whole numbers have no fractional part and
/// negative zero is shown as zero.
fn bound(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Returns a `from - to` label for each range. In percentage mode each bound is
/// shown as a whole percentage of the upper bound of the last range.
pub fn labels(ranges: &Ranges, percentage_mode: bool) -> Vec<String> {
    let max = ranges.max();

    ranges
        .iter()
        .map(|range| {
            let (from, to) = if percentage_mode {
                (percent_of(range.from, max), percent_of(range.to, max))
            } else {
                (range.from, range.to)
            };
            format!("{} - {}", bound(from), bound(to))
        })
        .collect()
}

/// Returns `count` colors spread evenly across `schema`, from the start of the
/// schema to its end. With `invert` the order is reversed.
pub fn colors(
    count: usize,
    invert: bool,
    schema: ColorSchema,
    scale: &(impl ColorScale + ?Sized),
) -> Vec<String> {
    // a single color sits at the start of the schema
    let divisor = count.saturating_sub(1).max(1) as f64;

    (0..count)
        .map(|i| {
            let ratio = i as f64 / divisor;
            let ratio = if invert { 1.0 - ratio } else { ratio };
            scale.color_for_ratio(ratio, schema)
        })
        .collect()
}

/// The label and color of every bucket of a set of ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    ranges: Ranges,
    labels: Vec<String>,
    colors: Vec<String>,
}

impl Palette {
    pub fn new(
        ranges: &Ranges,
        percentage_mode: bool,
        invert: bool,
        schema: ColorSchema,
        scale: &(impl ColorScale + ?Sized),
    ) -> Self {
        Self {
            ranges: ranges.clone(),
            labels: labels(ranges, percentage_mode),
            colors: colors(ranges.len(), invert, schema, scale),
        }
    }

    /// The number of buckets.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Label and color pairs, in bucket order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.colors.iter().map(String::as_str))
    }

    /// The color of the bucket `value` falls into.
    pub fn color_for(&self, value: f64) -> &str {
        &self.colors[self.ranges.bucket_index(value)]
    }

    /// The label of the bucket `value` falls into.
    pub fn label_for(&self, value: f64) -> &str {
        &self.labels[self.ranges.bucket_index(value)]
    }
}
