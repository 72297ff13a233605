use thiserror::Error;

/// Errors returned when parsing an `rgb(r,g,b)` color string.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color does not match the rgb(r,g,b) pattern")]
    NoMatch,
    #[error("color component `{0}` does not fit in 0..=255")]
    ComponentOutOfRange(String),
}

/// Returned when a color schema name is not recognized.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown color schema: `{name}`")]
pub struct ParseSchemaError {
    pub name: String,
}
