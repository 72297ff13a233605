use crate::{BuildError, Range};

/// An ordered, non-empty sequence of ranges that partitions the value domain
/// into buckets.
///
/// Ranges are expected to be sorted and non-overlapping, but this is not
/// enforced. Each range must have finite bounds with `from <= to`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Range>", into = "Vec<Range>")
)]
pub struct Ranges {
    ranges: Box<[Range]>,
}

impl Ranges {
    pub fn new(ranges: Vec<Range>) -> Result<Self, BuildError> {
        if ranges.is_empty() {
            return Err(BuildError::Empty);
        }

        for (index, range) in ranges.iter().enumerate() {
            if !range.from.is_finite() || !range.to.is_finite() {
                return Err(BuildError::NonFinite { index });
            }

            if range.from > range.to {
                return Err(BuildError::Inverted {
                    index,
                    from: range.from,
                    to: range.to,
                });
            }
        }

        Ok(Self {
            ranges: ranges.into(),
        })
    }

    /// Returns the index of the bucket for `value`.
    ///
    /// This is the first range with `from <= value < to`. Values that fall
    /// outside of every range are clamped: anything below the first range maps
    /// to the first bucket and anything else, including the upper bound of the
    /// last range and `NaN`, maps to the last bucket.
    pub fn bucket_index(&self, value: f64) -> usize {
        if let Some(index) = self.ranges.iter().position(|r| r.contains(value)) {
            return index;
        }

        if value < self.first().from {
            0
        } else {
            self.ranges.len() - 1
        }
    }

    /// The number of buckets, always at least one.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Always false, a `Ranges` holds at least one range.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &Range {
        &self.ranges[0]
    }

    pub fn last(&self) -> &Range {
        &self.ranges[self.ranges.len() - 1]
    }

    /// The lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.first().from
    }

    /// The upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.last().to
    }

    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Range> {
        self.ranges.iter()
    }
}

impl Default for Ranges {
    /// A single bucket covering `0..10000`.
    fn default() -> Self {
        Self {
            ranges: vec![Range::new(0.0, 10_000.0)].into(),
        }
    }
}

impl TryFrom<Vec<Range>> for Ranges {
    type Error = BuildError;

    fn try_from(ranges: Vec<Range>) -> Result<Self, Self::Error> {
        Self::new(ranges)
    }
}

impl From<Ranges> for Vec<Range> {
    fn from(ranges: Ranges) -> Self {
        ranges.ranges.into_vec()
    }
}

impl<'a> IntoIterator for &'a Ranges {
    type Item = &'a Range;
    type IntoIter = core::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Ranges {
    fn schema_name() -> String {
        "Ranges".to_owned()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <Vec<Range>>::json_schema(gen)
    }
}
