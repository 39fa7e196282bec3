//! Formatting utilities used for CLI and export outputs.

/// Hours without trailing zeros: `3`, `2.5`, `0.333`.
/// Six decimals keep entered precision and hide float noise from sums.
pub fn format_hours(hours: f64) -> String {
    let s = format!("{:.6}", hours);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `$1234.50`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
