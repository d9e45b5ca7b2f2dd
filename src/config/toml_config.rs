use crate::core::pension::PensionRules;
use crate::core::{ConfigProvider, Scenario, Storage, YearMonth};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_allowed_values, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub rules: Option<RulesConfig>,
    #[serde(default)]
    pub months: Vec<MonthsScenarioConfig>,
    #[serde(default)]
    pub pension: Vec<PensionScenarioConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

/// Partial override of the pension formula; missing fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    pub eligible_months: Option<i32>,
    pub base_percentage: Option<f64>,
    pub additional_percent_per_month: Option<f64>,
    pub max_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthsScenarioConfig {
    pub label: Option<String>,
    pub start: YearMonth,
    pub end: YearMonth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionScenarioConfig {
    pub label: Option<String>,
    pub salary: f64,
    pub months: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

impl BatchConfig {
    /// 透過 Storage 讀取批次檔並解析
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path).await?;
        let content = String::from_utf8(bytes).map_err(|e| CalcError::ConfigValidationError {
            field: path.to_string(),
            message: format!("Batch file is not valid UTF-8: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ProcessingError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(CalcError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }
        validate_allowed_values("output.formats", &self.output.formats, &SUPPORTED_FORMATS)?;

        if self.months.is_empty() && self.pension.is_empty() {
            return Err(CalcError::MissingConfigError {
                field: "[[months]] or [[pension]]".to_string(),
            });
        }

        self.pension_rules().validate()?;
        Ok(())
    }

    pub fn pension_rules(&self) -> PensionRules {
        let defaults = PensionRules::default();
        let Some(rules) = &self.rules else {
            return defaults;
        };

        PensionRules {
            eligible_months: rules.eligible_months.unwrap_or(defaults.eligible_months),
            base_percentage: rules.base_percentage.unwrap_or(defaults.base_percentage),
            additional_percent_per_month: rules
                .additional_percent_per_month
                .unwrap_or(defaults.additional_percent_per_month),
            max_percentage: rules.max_percentage.unwrap_or(defaults.max_percentage),
        }
    }

    pub fn scenario_count(&self) -> usize {
        self.months.len() + self.pension.len()
    }
}

impl ConfigProvider for BatchConfig {
    fn batch_name(&self) -> &str {
        &self.batch.name
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn rules(&self) -> PensionRules {
        self.pension_rules()
    }

    fn scenarios(&self) -> Vec<Scenario> {
        let months = self.months.iter().enumerate().map(|(i, m)| Scenario::Months {
            label: m.label.clone().unwrap_or_else(|| format!("months-{}", i + 1)),
            start: m.start,
            end: m.end,
        });

        let pension = self.pension.iter().enumerate().map(|(i, p)| Scenario::Pension {
            label: p.label.clone().unwrap_or_else(|| format!("pension-{}", i + 1)),
            salary: p.salary,
            months: p.months,
        });

        months.chain(pension).collect()
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use tempfile::TempDir;

    const BASIC: &str = r#"
[batch]
name = "team-2024"

[[months]]
label = "contract"
start = "2023-06"
end = "June 2024"

[[pension]]
label = "alice"
salary = 12000.0
months = 180

[[pension]]
salary = 9000
months = 120

[output]
path = "./output"
formats = ["csv", "json"]
"#;

    #[test]
    fn test_parse_basic_batch_config() {
        let config = BatchConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.batch.name, "team-2024");
        assert_eq!(config.months[0].start, YearMonth::new(2023, 6).unwrap());
        assert_eq!(config.months[0].end, YearMonth::new(2024, 6).unwrap());
        assert_eq!(config.pension[1].salary, 9000.0);
        assert_eq!(config.scenario_count(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_labels_and_rules() {
        let config = BatchConfig::from_toml_str(BASIC).unwrap();
        let scenarios = config.scenarios();

        assert_eq!(scenarios.len(), 3);
        assert!(matches!(
            &scenarios[2],
            Scenario::Pension { label, months: 120, .. } if label == "pension-2"
        ));
        assert_eq!(config.rules(), PensionRules::default());
    }

    #[test]
    fn test_partial_rules_override() {
        let toml_content = format!("{}\n[rules]\neligible_months = 144\n", BASIC);
        let config = BatchConfig::from_toml_str(&toml_content).unwrap();

        let rules = config.rules();
        assert_eq!(rules.eligible_months, 144);
        assert_eq!(rules.max_percentage, 60.0);
    }

    #[test]
    fn test_invalid_year_month_fails_parsing() {
        let toml_content = BASIC.replace("2023-06", "2023-13");
        let err = BatchConfig::from_toml_str(&toml_content).unwrap_err();
        assert!(matches!(err, CalcError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MONTHS_CALC_TEST_OUTPUT", "/tmp/reports");

        let toml_content = BASIC.replace("./output", "${MONTHS_CALC_TEST_OUTPUT}");
        let config = BatchConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/reports");

        std::env::remove_var("MONTHS_CALC_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = basic_with_formats(r#"formats = ["xlsx"]"#);
        assert!(BatchConfig::from_toml_str(&bad_format).unwrap().validate().is_err());

        let empty = r#"
[batch]
name = "empty"

[output]
path = "./output"
"#;
        let config = BatchConfig::from_toml_str(empty).unwrap();
        assert_eq!(config.output.formats, vec!["csv".to_string()]);
        assert!(matches!(
            config.validate(),
            Err(CalcError::MissingConfigError { .. })
        ));

        let bad_rules = format!("{}\n[rules]\nbase_percentage = 75.0\n", BASIC);
        assert!(BatchConfig::from_toml_str(&bad_rules).unwrap().validate().is_err());
    }

    fn basic_with_formats(formats_line: &str) -> String {
        BASIC.replace(r#"formats = ["csv", "json"]"#, formats_line)
    }

    #[tokio::test]
    async fn test_load_through_storage() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("batch.toml"), BASIC).unwrap();
        std::fs::write(temp_dir.path().join("binary.toml"), [0xff, 0xfe, 0x00]).unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let config = BatchConfig::load(&storage, "batch.toml").await.unwrap();
        assert_eq!(config.batch.name, "team-2024");

        assert!(matches!(
            BatchConfig::load(&storage, "missing.toml").await,
            Err(CalcError::IoError(_))
        ));
        assert!(matches!(
            BatchConfig::load(&storage, "binary.toml").await,
            Err(CalcError::ConfigValidationError { .. })
        ));
    }
}
