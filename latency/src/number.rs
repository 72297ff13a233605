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

/// Whole number with thousands separators, eg: `12,345`.
pub(crate) fn as_integer(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-{}", group_thousands(&digits))
    } else {
        group_thousands(&digits)
    }
}

/// One fractional digit, eg: `1.5`.
pub(crate) fn as_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Small values keep a fractional digit, everything else is shown whole.
pub(crate) fn as_decimal_or_integer(value: f64) -> String {
    if value == 0.0 || value.abs() >= 10.0 {
        as_integer(value)
    } else {
        as_decimal(value)
    }
}
