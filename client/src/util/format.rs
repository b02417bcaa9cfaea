//! Number and date formatting for statistic cards, axes, and tooltips.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format `value` with `precision` decimals and `,` thousands separators.
/// Non-finite values render as `-`.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    let fixed = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole numbers without decimals, everything else with two.
pub fn format_auto(value: f64) -> String {
    let precision = if value.fract() == 0.0 { 0 } else { 2 };
    format_number(value, precision)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2024-01-02` → `01/02`. Values without a `-` are returned unchanged.
pub fn short_date(iso: &str) -> String {
    match iso.split_once('-') {
        Some((_, rest)) => rest.replace('-', "/"),
        None => iso.to_owned(),
    }
}

/// Sum of the finite values in `values`.
pub fn finite_sum(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| v.is_finite()).sum()
}
