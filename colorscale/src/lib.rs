//! This crate maps ratios onto heatmap color schemas and decides whether text
//! drawn on top of a color should be light.
//!
//! The two decisions are exposed as traits so that callers can swap in their
//! own palette or contrast rules:
//!
//! * `ColorScale` - turns a ratio in `0.0..=1.0` into a color string for a
//!   given `ColorSchema`. `Heatmap` is the default implementation.
//! * `Darkness` - judges whether an RGB triple is dark. `Luminance` is the
//!   default implementation.
//!
//! Colors are exchanged as `rgb(r,g,b)` strings. Anything that does not match
//! that pattern is treated as "not dark" by `should_show_light_text`.

mod darkness;
mod errors;
mod rgb;
mod scale;
mod schema;

pub use darkness::{should_show_light_text, Darkness, Luminance};
pub use errors::{ParseColorError, ParseSchemaError};
pub use rgb::Rgb;
pub use scale::{ColorScale, Heatmap};
pub use schema::ColorSchema;
