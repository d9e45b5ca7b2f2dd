use crate::domain::model::YearMonth;

/// Inclusive number of months spanned by two year-months, in either order.
///
/// Both endpoints count, so a span from a month to itself is `1`.
pub fn months_between(a: YearMonth, b: YearMonth) -> i32 {
    let (earlier, later) = if a.is_before(&b) { (a, b) } else { (b, a) };

    let year_diff = later.year() - earlier.year();
    let month_diff = later.month() as i32 - earlier.month() as i32;

    year_diff * 12 + month_diff + 1
}
