//! Coercion of raw text entry into calculator inputs.
//!
//! Empty or non-numeric text becomes zero so the calculators always receive a
//! defined value. Surrounding whitespace is trimmed before any emptiness check
//! or parse, so `" 180 "` counts as `180` and `"   "` counts as empty.

/// Parses an annual salary, falling back to `0.0`.
///
/// Non-finite values (`NaN`, `inf`) are treated as invalid entry.
pub fn coerce_salary(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses a contribution-month count, falling back to `0`.
pub fn coerce_months(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

/// A pension result is only worth showing once both fields have been filled in.
/// Whitespace-only text counts as not filled in.
pub fn has_both_inputs(salary_text: &str, months_text: &str) -> bool {
    !salary_text.trim().is_empty() && !months_text.trim().is_empty()
}
