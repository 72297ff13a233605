use thiserror::Error;

/// Errors returned when building a set of ranges.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("at least one range is required")]
    Empty,
    #[error("range {index} has a bound that is not finite")]
    NonFinite { index: usize },
    #[error("range {index} starts after it ends ({from} > {to})")]
    Inverted { index: usize, from: f64, to: f64 },
}

/// Errors returned when rendering.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("dimension refers to column {accessor} but the table has {columns} columns")]
    MissingColumn { accessor: usize, columns: usize },
}
