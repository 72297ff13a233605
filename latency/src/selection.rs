use crate::DurationFormatter;

/// The endpoints, in microseconds, of a latency interval selected on a chart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Selection {
    pub from: f64,
    pub to: f64,
}

impl Selection {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Renders the selection, see `format_selection`.
    pub fn format(&self, formatter: &(impl DurationFormatter + ?Sized)) -> String {
        format_selection((self.from, self.to), formatter)
    }
}

impl From<(f64, f64)> for Selection {
    fn from((from, to): (f64, f64)) -> Self {
        Self { from, to }
    }
}

/// Renders a selected interval as `from - to`. When both ends share a unit the
/// unit is written once, after the second value (`1.2 - 1.5 ms`). Otherwise
/// each end carries its own unit (`850 μs - 1.5 ms`).
pub fn format_selection(
    selection: (f64, f64),
    formatter: &(impl DurationFormatter + ?Sized),
) -> String {
    let from = formatter.format(selection.0);
    let to = formatter.format(selection.1);

    if from.unit == to.unit {
        format!("{} - {}", from.value, to.formatted)
    } else {
        format!("{} - {}", from.formatted, to.formatted)
    }
}
