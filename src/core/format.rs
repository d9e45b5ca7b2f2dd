//! Display strings for calculator results. Rounding to two decimals happens here only.

use crate::core::pension::PensionRules;
use crate::domain::model::{PensionResult, YearMonth};

pub const CURRENCY: &str = "GHS";

pub fn format_pension_pay(pension_pay: f64) -> String {
    format!("{:.2} {}", pension_pay, CURRENCY)
}

pub fn format_pension_right(pension_right: f64) -> String {
    format!("{:.2}%", pension_right)
}

pub fn months_label(months: i32) -> &'static str {
    if months == 1 {
        "month"
    } else {
        "months"
    }
}

pub fn format_months(months: i32) -> String {
    format!("{} {}", months, months_label(months))
}

pub fn not_eligible_message(rules: &PensionRules) -> String {
    format!(
        "You do not qualify for pension (min {} months required)",
        rules.eligible_months
    )
}

/// One-line summary used in reports.
pub fn pension_summary(result: &PensionResult, rules: &PensionRules) -> String {
    if result.is_eligible {
        format!(
            "{} ({} pension right)",
            format_pension_pay(result.pension_pay),
            format_pension_right(result.pension_right)
        )
    } else {
        format!("NOT ELIGIBLE: {}", not_eligible_message(rules))
    }
}

pub fn render_months(start: YearMonth, end: YearMonth, months: i32) -> String {
    format!(
        "Start: {}\nEnd:   {}\nTOTAL MONTHS: {}",
        start,
        end,
        format_months(months)
    )
}

pub fn render_pension(result: &PensionResult, rules: &PensionRules) -> String {
    if result.is_eligible {
        format!(
            "PENSION CALCULATION\nMonthly Pension Pay: {}\nPension Right: {}",
            format_pension_pay(result.pension_pay),
            format_pension_right(result.pension_right)
        )
    } else {
        format!("NOT ELIGIBLE\n{}", not_eligible_message(rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pension::calculate_pension;

    #[test]
    fn test_money_and_percent() {
        assert_eq!(format_pension_pay(375.0), "375.00 GHS");
        assert_eq!(format_pension_pay(386.254), "386.25 GHS");
        assert_eq!(format_pension_right(37.5), "37.50%");
    }

    #[test]
    fn test_months_label() {
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(12), "12 months");
    }

    #[test]
    fn test_render_pension() {
        let rules = PensionRules::default();

        let eligible = render_pension(&calculate_pension(12000.0, 180), &rules);
        assert!(eligible.contains("Monthly Pension Pay: 375.00 GHS"));
        assert!(eligible.contains("Pension Right: 37.50%"));

        let not_eligible = render_pension(&calculate_pension(12000.0, 100), &rules);
        assert_eq!(
            not_eligible,
            "NOT ELIGIBLE\nYou do not qualify for pension (min 180 months required)"
        );
    }

    #[test]
    fn test_pension_summary() {
        let rules = PensionRules::default();
        assert_eq!(
            pension_summary(&calculate_pension(12000.0, 180), &rules),
            "375.00 GHS (37.50% pension right)"
        );
        assert_eq!(
            pension_summary(&calculate_pension(12000.0, 0), &rules),
            "NOT ELIGIBLE: You do not qualify for pension (min 180 months required)"
        );
    }

    #[test]
    fn test_render_months() {
        let start = YearMonth::new(2023, 6).unwrap();
        let end = YearMonth::new(2024, 6).unwrap();
        let text = render_months(start, end, 13);
        assert!(text.contains("Start: June 2023"));
        assert!(text.contains("TOTAL MONTHS: 13 months"));
    }
}
