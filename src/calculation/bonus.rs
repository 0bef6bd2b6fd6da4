//! Bonus parsing from raw currency strings.
//!
//! Bonuses are entered free-form and arrive in whatever shape the operator
//! typed: "Rp 50.000", "50,000", "50000". Stripping everything that is not
//! a digit reduces all of these to a single integer run.

/// Parses a raw bonus string into a non-negative amount.
///
/// Every non-digit character is stripped and the remaining digit run is
/// parsed. A string with no digits parses to 0, and a digit run too large
/// to represent resolves to 0 rather than propagating an overflow. Sign
/// characters are stripped with everything else, so the result is never
/// negative.
///
/// # Example
///
/// ```
/// use wage_report_engine::calculation::parse_bonus;
///
/// assert_eq!(parse_bonus("Rp 50.000"), 50000.0);
/// assert_eq!(parse_bonus("50,000"), 50000.0);
/// assert_eq!(parse_bonus(""), 0.0);
/// assert_eq!(parse_bonus("-7"), 7.0);
/// ```
pub fn parse_bonus(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0.0;
    }
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
