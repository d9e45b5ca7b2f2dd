use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid_value(field_name: &str, value: impl ToString, reason: impl Into<String>) -> CalcError {
    CalcError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Output directories and batch files share the same rules: non-empty, no NUL.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "Path cannot be empty"
    } else if path.contains('\0') {
        "Path contains null bytes"
    } else {
        return Ok(());
    };
    Err(invalid_value(field_name, path, reason))
}

/// A batch file path must name a `.toml` file, not a directory.
pub fn validate_batch_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;
    let is_toml = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if !is_toml {
        return Err(invalid_value(field_name, path, "Batch file must have a .toml extension"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_value(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不在任何範圍內
    if !(value >= min && value <= max) {
        return Err(invalid_value(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_month_number(value: &str, month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(CalcError::InvalidYearMonthError {
            value: value.to_string(),
            reason: format!("month must be between 1 and 12, got {}", month),
        });
    }
    Ok(())
}

pub fn validate_year(value: &str, year: i32, min_year: i32, max_year: i32) -> Result<()> {
    if year < min_year || year > max_year {
        return Err(CalcError::InvalidYearMonthError {
            value: value.to_string(),
            reason: format!("year must be between {} and {}, got {}", min_year, max_year, year),
        });
    }
    Ok(())
}

pub fn validate_allowed_values(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    for value in values {
        if !allowed.contains(&value.as_str()) {
            return Err(invalid_value(
                field_name,
                value,
                format!("Unsupported value. Valid values: {}", allowed.join(", ")),
            ));
        }
    }
    Ok(())
}
