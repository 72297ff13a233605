use crate::{ColorSchema, Rgb};

/// Maps a ratio onto a color of a schema.
pub trait ColorScale {
    /// Returns the color for `ratio` within `schema`. Ratios are expected in
    /// `0.0..=1.0`.
    fn color_for_ratio(&self, ratio: f64, schema: ColorSchema) -> String;
}

/// The default heatmap scale. Colors are linearly interpolated between the
/// evenly spaced stops of the schema. Ratios outside of `0.0..=1.0` are
/// clamped and `NaN` is treated as `0.0`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Heatmap;

impl Heatmap {
    pub fn rgb(&self, ratio: f64, schema: ColorSchema) -> Rgb {
        let stops = schema.stops();

        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };

        // position along the ramp, in units of stop-to-stop segments
        let segments = (stops.len() - 1) as f64;
        let position = ratio * segments;
        let lower = (position.floor() as usize).min(stops.len() - 2);

        stops[lower].lerp(stops[lower + 1], position - lower as f64)
    }
}

impl ColorScale for Heatmap {
    fn color_for_ratio(&self, ratio: f64, schema: ColorSchema) -> String {
        self.rgb(ratio, schema).to_string()
    }
}
