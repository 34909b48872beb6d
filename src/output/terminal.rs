//! Terminal output utilities.

/// Format a `label: value` line with the label right-aligned to `width`.
///
/// Labels longer than `width` are kept whole.
pub fn format_row<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:>width$} {value}", value = value.to_string())
}
