use crate::{BuildError, FormatSpec, Range, Ranges};

use colorscale::ColorSchema;

/// Where the bucket color of a metric is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ColorMode {
    /// Metrics are not colored.
    #[default]
    None,
    /// The metric text is colored.
    Labels,
    /// The metric background is colored, text turns light on dark colors.
    Background,
}

/// Display settings for a metric visualization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct VisParams {
    /// Show values as a percentage of the range domain.
    pub percentage_mode: bool,
    /// Reverse the direction of the color schema.
    pub invert_colors: bool,
    pub color_schema: ColorSchema,
    pub color_mode: ColorMode,
    pub ranges: Ranges,
    pub show_labels: bool,
}

impl Default for VisParams {
    fn default() -> Self {
        Self {
            percentage_mode: false,
            invert_colors: false,
            color_schema: ColorSchema::default(),
            color_mode: ColorMode::default(),
            ranges: Ranges::default(),
            show_labels: true,
        }
    }
}

impl VisParams {
    pub fn builder(ranges: Vec<Range>) -> Result<Builder, BuildError> {
        Builder::new(ranges)
    }
}

pub struct Builder {
    params: VisParams,
}

impl Builder {
    pub fn new(ranges: Vec<Range>) -> Result<Self, BuildError> {
        let ranges = Ranges::new(ranges)?;

        Ok(Self {
            params: VisParams {
                ranges,
                ..Default::default()
            },
        })
    }

    pub fn percentage_mode(mut self, enabled: bool) -> Self {
        self.params.percentage_mode = enabled;
        self
    }

    pub fn invert_colors(mut self, enabled: bool) -> Self {
        self.params.invert_colors = enabled;
        self
    }

    pub fn color_schema(mut self, schema: ColorSchema) -> Self {
        self.params.color_schema = schema;
        self
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.params.color_mode = mode;
        self
    }

    pub fn show_labels(mut self, enabled: bool) -> Self {
        self.params.show_labels = enabled;
        self
    }

    pub fn build(self) -> VisParams {
        self.params
    }
}

/// A table column and the formatter used for its cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dimension {
    pub accessor: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: FormatSpec,
}

impl Dimension {
    pub fn new(accessor: usize, format: FormatSpec) -> Self {
        Self { accessor, format }
    }
}

/// The columns a metric visualization reads. Each metric column yields one
/// metric per row. With a bucket column, every metric is titled with and can
/// filter on the bucket value of its row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Dimensions {
    MetricsOnly {
        metrics: Vec<Dimension>,
    },
    MetricsAndBucket {
        metrics: Vec<Dimension>,
        bucket: Dimension,
    },
}

impl Dimensions {
    pub fn metrics(&self) -> &[Dimension] {
        match self {
            Self::MetricsOnly { metrics } | Self::MetricsAndBucket { metrics, .. } => metrics,
        }
    }

    pub fn bucket(&self) -> Option<&Dimension> {
        match self {
            Self::MetricsOnly { .. } => None,
            Self::MetricsAndBucket { bucket, .. } => Some(bucket),
        }
    }

    /// Every column index read, metrics first.
    pub fn accessors(&self) -> impl Iterator<Item = usize> + '_ {
        self.metrics()
            .iter()
            .chain(self.bucket())
            .map(|dimension| dimension.accessor)
    }
}
