use crate::Rgb;

/// Judges whether a color is dark enough that text on top of it should be
/// light.
pub trait Darkness {
    fn is_dark(&self, r: u8, g: u8, b: u8) -> bool;
}

/// Judges darkness by relative luminance as defined by WCAG 2.0.
#[derive(Copy, Clone, Debug, Default)]
pub struct Luminance;

impl Luminance {
    /// Colors with a relative luminance at or below this are dark.
    pub const THRESHOLD: f64 = 0.179;

    /// Relative luminance of an sRGB color in `0.0..=1.0`.
    pub fn relative(r: u8, g: u8, b: u8) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }
}

impl Darkness for Luminance {
    fn is_dark(&self, r: u8, g: u8, b: u8) -> bool {
        Self::relative(r, g, b) <= Self::THRESHOLD
    }
}

/// Returns `true` if text drawn on `color` should be light. Colors that are
/// not in the `rgb(r,g,b)` form never reach the `Darkness` judgment and are
/// reported as not needing light text.
pub fn should_show_light_text(color: &str, darkness: &(impl Darkness + ?Sized)) -> bool {
    match color.parse::<Rgb>() {
        Ok(Rgb { r, g, b }) => darkness.is_dark(r, g, b),
        Err(e) => {
            log::trace!("no light text for color `{color}`: {e}");
            false
        }
    }
}
