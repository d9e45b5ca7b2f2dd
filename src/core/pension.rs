//! SSNIT-style pension eligibility.
//!
//! A contributor qualifies after [`ELIGIBLE_MONTHS`] months and earns
//! [`BASE_PERCENTAGE`] of their monthly average salary, plus
//! [`ADDITIONAL_PERCENT_PER_MONTH`] for every extra month, capped at
//! [`MAX_PERCENTAGE`].

use crate::domain::model::PensionResult;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const ELIGIBLE_MONTHS: i32 = 180;
pub const BASE_PERCENTAGE: f64 = 37.5;
pub const ADDITIONAL_PERCENT_PER_MONTH: f64 = 1.125 / 12.0;
pub const MAX_PERCENTAGE: f64 = 60.0;

/// The parameters of the pension formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PensionRules {
    pub eligible_months: i32,
    pub base_percentage: f64,
    pub additional_percent_per_month: f64,
    pub max_percentage: f64,
}

impl Default for PensionRules {
    fn default() -> Self {
        Self {
            eligible_months: ELIGIBLE_MONTHS,
            base_percentage: BASE_PERCENTAGE,
            additional_percent_per_month: ADDITIONAL_PERCENT_PER_MONTH,
            max_percentage: MAX_PERCENTAGE,
        }
    }
}

impl PensionRules {
    /// `average_salary` is annual; the returned pay is monthly.
    pub fn calculate(&self, average_salary: f64, total_months_contributed: i32) -> PensionResult {
        // i64 避免極端輸入溢位
        let extra_months = i64::from(total_months_contributed) - i64::from(self.eligible_months);

        if extra_months < 0 {
            return PensionResult::not_eligible();
        }

        let total_percentage =
            self.base_percentage + extra_months as f64 * self.additional_percent_per_month;
        // pension right = 可領取的薪資百分比
        let pension_right = self.max_percentage.min(total_percentage);
        let pension_pay = pension_right * (average_salary / 12.0) / 100.0;

        PensionResult {
            pension_pay,
            pension_right,
            is_eligible: true,
        }
    }
}

impl Validate for PensionRules {
    fn validate(&self) -> Result<()> {
        validate_range("rules.eligible_months", self.eligible_months, 0, i32::MAX)?;
        validate_range(
            "rules.max_percentage",
            self.max_percentage,
            0.0,
            100.0,
        )?;
        validate_range(
            "rules.base_percentage",
            self.base_percentage,
            0.0,
            self.max_percentage,
        )?;
        validate_range(
            "rules.additional_percent_per_month",
            self.additional_percent_per_month,
            0.0,
            self.max_percentage,
        )?;
        Ok(())
    }
}

/// Pension under the default rules.
pub fn calculate_pension(average_best_three_years_salary: f64, total_months_contributed: i32) -> PensionResult {
    PensionRules::default().calculate(average_best_three_years_salary, total_months_contributed)
}
