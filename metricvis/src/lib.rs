//! This crate turns tabular data into metrics ready for display, coloring
//! each value by the bucket it falls into.
//!
//! Buckets are described by `Ranges`, an ordered set of half-open intervals.
//! Looking up a bucket never fails: values below the first range belong to the
//! first bucket and values past the last range belong to the last bucket.
//!
//! * `Ranges::bucket_index` - find the bucket for a value
//! * `Palette` - a label and a heatmap color for every bucket
//! * `render` - produce a `Metric` for every metric column and row of a
//!   `Table`, formatted, titled and colored according to `VisParams`
//!
//! Formatting and coloring are delegated to collaborators passed in through
//! `Services`, see the `format` module and the `colorscale` crate.

pub mod format;
pub mod palette;
pub mod params;

mod errors;
mod range;
mod ranges;
mod render;
mod table;

pub use colorscale::ColorSchema;

pub use errors::{BuildError, Error};
pub use format::{FieldFormatter, FormatFactory, FormatSpec, OutputFormat};
pub use palette::Palette;
pub use params::{ColorMode, Dimension, Dimensions, VisParams};
pub use range::Range;
pub use ranges::Ranges;
pub use render::{render, FilterTarget, Metric, Services};
pub use table::{Column, Table, Value};
