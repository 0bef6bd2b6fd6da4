//! Day-weight derivation from attendance labels.
//!
//! A worker's attendance for one day is recorded as a free-text label
//! naming the lodging they worked at. The label alone decides how much
//! attendance credit the day is worth: nothing, half a day, or a full day.

/// The label recording a half shift at an alternate location.
pub const HALF_DAY_LABEL: &str = "1/2 Lain";

/// The prefix marking any label as a half day.
pub const HALF_DAY_PREFIX: &str = "1/2";

/// Computes the attendance credit for one day from its label.
///
/// Returns a value in {0, 0.5, 1}:
/// - 0 for an empty (or whitespace-only) label;
/// - 0.5 for the exact half-day label, or for any label starting with the
///   half-day prefix at a word boundary ("1/2 Rumah B" counts, "1/2x"
///   does not);
/// - 1 for any other non-empty label.
///
/// Both the exact-label check and the prefix check are kept even though
/// the literal is itself prefix-matched.
///
/// # Example
///
/// ```
/// use wage_report_engine::calculation::calc_day_weight;
///
/// assert_eq!(calc_day_weight(""), 0.0);
/// assert_eq!(calc_day_weight("1/2 Lain"), 0.5);
/// assert_eq!(calc_day_weight("1/2 Rumah B"), 0.5);
/// assert_eq!(calc_day_weight("Rumah A"), 1.0);
/// ```
pub fn calc_day_weight(label: &str) -> f64 {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if trimmed == HALF_DAY_LABEL {
        return 0.5;
    }
    if has_half_day_prefix(trimmed) {
        return 0.5;
    }
    1.0
}

/// True if the label starts with the half-day prefix followed by the end
/// of the string or a non-word character.
fn has_half_day_prefix(label: &str) -> bool {
    let Some(rest) = label.strip_prefix(HALF_DAY_PREFIX) else {
        return false;
    };
    match rest.chars().next() {
        None => true,
        Some(next) => !(next.is_ascii_alphanumeric() || next == '_'),
    }
}
