use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid year-month '{value}': {reason}")]
    InvalidYearMonthError { value: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Report processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidYearMonthError { .. } => ErrorCategory::Input,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::CsvError(_)
            | CalcError::SerializationError(_)
            | CalcError::ProcessingError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidYearMonthError { .. } => {
                "Use the YYYY-MM format (e.g. 2024-06) or a month name followed by a year (e.g. \"June 2024\")"
            }
            CalcError::ConfigValidationError { .. } => {
                "Check that the batch file is valid TOML and matches the documented layout"
            }
            CalcError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in the batch file and run again"
            }
            CalcError::MissingConfigError { .. } => {
                "Add the missing section or field to the batch file"
            }
            CalcError::IoError(_) => "Verify the file paths exist and are readable/writable",
            CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                "Check the output directory has free space and retry"
            }
            CalcError::ProcessingError { .. } => "Retry with --verbose to see more detail",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidYearMonthError { value, .. } => {
                format!("'{}' is not a valid month and year", value)
            }
            CalcError::ConfigValidationError { field, .. } => {
                format!("The batch file could not be read ({})", field)
            }
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            CalcError::MissingConfigError { field } => {
                format!("The batch file is missing '{}'", field)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                "Could not write the report".to_string()
            }
            CalcError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
