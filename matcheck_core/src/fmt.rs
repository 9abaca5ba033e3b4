//! Display helpers shared by consumers.

/// Render a thickness for selection lists: up to four decimals, trailing
/// zeros and a dangling point trimmed.
pub fn format_thickness(value: f64) -> String {
    format!("{value:.4}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
