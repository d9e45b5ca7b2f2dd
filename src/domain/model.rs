use crate::core::pension::PensionRules;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_month_number, validate_year};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month without a day component.
///
/// Ordering is chronological: by year, then by month. Years are limited to the
/// range `chrono::NaiveDate` supports, which keeps month arithmetic within `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let value = format!("{}-{:02}", year, month);
        validate_year(&value, year, Self::min_value().year, Self::max_value().year)?;
        validate_month_number(&value, month)?;
        Ok(Self { year, month })
    }

    /// Earliest representable month.
    pub fn min_value() -> Self {
        Self::from(NaiveDate::MIN)
    }

    /// Latest representable month.
    pub fn max_value() -> Self {
        Self::from(NaiveDate::MAX)
    }

    /// The current month in the local time zone.
    pub fn now() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    /// Parses `YYYY-MM` or `<month name> <year>` (e.g. `June 2024`, `jun 2024`).
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();

        if let Some((year, month)) = trimmed.rsplit_once('-') {
            if let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) {
                return Self::new(year, month);
            }
        }

        if let Some((name, year)) = trimmed.split_once(char::is_whitespace) {
            if let (Ok(month), Ok(year)) = (name.parse::<chrono::Month>(), year.trim().parse::<i32>()) {
                return Self::new(year, month.number_from_month());
            }
        }

        Err(CalcError::InvalidYearMonthError {
            value: trimmed.to_string(),
            reason: "expected YYYY-MM or \"<month name> <year>\"".to_string(),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn is_before(&self, other: &YearMonth) -> bool {
        self < other
    }

    /// English month name, e.g. `"June"`.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    pub fn to_iso_string(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_iso_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Outcome of a pension calculation. Percentages and amounts are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PensionResult {
    pub pension_pay: f64,
    pub pension_right: f64,
    pub is_eligible: bool,
}

impl PensionResult {
    pub const fn not_eligible() -> Self {
        Self {
            pension_pay: 0.0,
            pension_right: 0.0,
            is_eligible: false,
        }
    }
}

/// One unit of work in a batch run.
#[derive(Debug, Clone, PartialEq)]
pub enum Scenario {
    Months {
        label: String,
        start: YearMonth,
        end: YearMonth,
    },
    Pension {
        label: String,
        salary: f64,
        months: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthsRow {
    pub label: String,
    pub start: YearMonth,
    pub end: YearMonth,
    pub months: i32,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionRow {
    pub label: String,
    pub salary: f64,
    pub months_contributed: i32,
    pub is_eligible: bool,
    pub pension_right: f64,
    pub pension_pay: f64,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub generated_at: String,
    pub rules: PensionRules,
    pub months: Vec<MonthsRow>,
    pub pension: Vec<PensionRow>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.months.len() + self.pension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
