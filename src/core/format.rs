//! Pure display-formatting helpers shared by the widget modules.

/// Format a USD amount with thousands separators and two decimals,
/// e.g. `1234.5` → `"$1,234.50"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Format a 24h change as a signed percentage with two decimals.
/// Non-negative values carry an explicit `+`: `0.0` → `"+0.00%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Format a byte count as kilobytes with two decimals.
#[must_use]
pub fn format_kib(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kib = bytes as f64 / 1024.0;
    format!("{kib:.2} KB")
}
