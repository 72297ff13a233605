//! Field formatters turn table cells into display text.
//!
//! Formatters are looked up through a `FormatFactory` that is handed to the
//! renderer, which keeps formatting rules swappable without any global
//! registry. `DefaultFormats` provides grouped numbers, percentages and plain
//! strings.

use crate::Value;

/// The text shown in place of a value that is not a number.
pub const PLACEHOLDER: &str = "-";

/// How converted text will be displayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Markup sensitive characters are escaped.
    Html,
}

/// Converts a cell into display text.
pub trait FieldFormatter {
    fn convert(&self, value: &Value, output: OutputFormat) -> String;
}

/// Describes which formatter a dimension uses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "id", rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum FormatSpec {
    Number {
        #[cfg_attr(feature = "serde", serde(default = "default_number_decimals"))]
        decimals: usize,
    },
    Percent {
        #[cfg_attr(feature = "serde", serde(default = "default_percent_decimals"))]
        decimals: usize,
    },
    String,
}

#[cfg(feature = "serde")]
fn default_number_decimals() -> usize {
    NumberFormat::DEFAULT_DECIMALS
}

#[cfg(feature = "serde")]
fn default_percent_decimals() -> usize {
    PercentFormat::DEFAULT_DECIMALS
}

impl FormatSpec {
    pub const fn number() -> Self {
        Self::Number {
            decimals: NumberFormat::DEFAULT_DECIMALS,
        }
    }

    pub const fn percent() -> Self {
        Self::Percent {
            decimals: PercentFormat::DEFAULT_DECIMALS,
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::number()
    }
}

/// Provides a formatter for a `FormatSpec`.
pub trait FormatFactory {
    fn formatter(&self, spec: &FormatSpec) -> Box<dyn FieldFormatter>;
}

/// Builds the formatters in this module.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFormats;

impl FormatFactory for DefaultFormats {
    fn formatter(&self, spec: &FormatSpec) -> Box<dyn FieldFormatter> {
        match spec {
            FormatSpec::Number { decimals } => Box::new(NumberFormat {
                decimals: *decimals,
            }),
            FormatSpec::Percent { decimals } => Box::new(PercentFormat {
                decimals: *decimals,
            }),
            FormatSpec::String => Box::new(StringFormat),
        }
    }
}

/// Formats `value` with `formatter`, substituting `PLACEHOLDER` for `NaN`.
pub fn format_value(
    value: f64,
    formatter: &(impl FieldFormatter + ?Sized),
    output: OutputFormat,
) -> String {
    if value.is_nan() {
        return PLACEHOLDER.to_owned();
    }

    formatter.convert(&Value::Number(value), output)
}

/// Numbers with thousands separators and up to `decimals` fractional digits,
/// trailing zeros are dropped. eg: `1,234.5`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: usize,
}

impl NumberFormat {
    pub const DEFAULT_DECIMALS: usize = 3;
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: Self::DEFAULT_DECIMALS,
        }
    }
}

impl FieldFormatter for NumberFormat {
    fn convert(&self, value: &Value, output: OutputFormat) -> String {
        match value {
            Value::Number(n) => grouped(*n, self.decimals),
            Value::Text(s) => escape(s, output),
            Value::Null => PLACEHOLDER.to_owned(),
        }
    }
}

/// Ratios shown as percentages with up to `decimals` fractional digits.
/// eg: `0.125` is shown as `12.5%`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PercentFormat {
    pub decimals: usize,
}

impl PercentFormat {
    pub const DEFAULT_DECIMALS: usize = 2;
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self {
            decimals: Self::DEFAULT_DECIMALS,
        }
    }
}

impl FieldFormatter for PercentFormat {
    fn convert(&self, value: &Value, output: OutputFormat) -> String {
        match value {
            Value::Number(n) => format!("{}%", grouped(n * 100.0, self.decimals)),
            Value::Text(s) => escape(s, output),
            Value::Null => PLACEHOLDER.to_owned(),
        }
    }
}

/// Shows text as-is and numbers in their shortest form.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StringFormat;

impl FieldFormatter for StringFormat {
    fn convert(&self, value: &Value, output: OutputFormat) -> String {
        match value {
            Value::Null => PLACEHOLDER.to_owned(),
            other => escape(&other.to_string(), output),
        }
    }
}

pub(crate) fn escape(text: &str, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => text.to_owned(),
        OutputFormat::Html => {
            let mut escaped = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    '&' => escaped.push_str("&amp;"),
                    '<' => escaped.push_str("&lt;"),
                    '>' => escaped.push_str("&gt;"),
                    '"' => escaped.push_str("&quot;"),
                    '\'' => escaped.push_str("&#39;"),
                    c => escaped.push(c),
                }
            }
            escaped
        }
    }
}

/// The most fractional digits rendered, larger requests are clamped.
pub const MAX_DECIMALS: usize = 20;

// Insert `,` between groups of three digits, `digits` must be ascii digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn grouped(value: f64, decimals: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.*}", decimals.min(MAX_DECIMALS), value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);

    // no sign for values that round to zero
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }

    out.push_str(&group_thousands(whole));

    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}
