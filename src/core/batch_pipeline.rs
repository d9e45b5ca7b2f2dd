use crate::core::format::{format_months, pension_summary};
use crate::core::months::months_between;
use crate::core::{BatchReport, ConfigProvider, Pipeline, Scenario, Storage};
use crate::domain::model::{MonthsRow, PensionRow};
use crate::utils::error::{CalcError, Result};
use serde::Serialize;

pub const MONTHS_REPORT_FILE: &str = "months_report.csv";
pub const PENSION_REPORT_FILE: &str = "pension_report.csv";
pub const JSON_REPORT_FILE: &str = "report.json";

pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| CalcError::ProcessingError {
        message: format!("Failed to flush CSV buffer: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Scenario>> {
        let scenarios = self.config.scenarios();
        tracing::debug!(
            "Loaded {} scenarios from batch '{}'",
            scenarios.len(),
            self.config.batch_name()
        );
        Ok(scenarios)
    }

    async fn transform(&self, scenarios: Vec<Scenario>) -> Result<BatchReport> {
        let rules = self.config.rules();
        let mut months = Vec::new();
        let mut pension = Vec::new();

        for scenario in scenarios {
            match scenario {
                Scenario::Months { label, start, end } => {
                    let count = months_between(start, end);
                    tracing::debug!("{}: {} → {} = {}", label, start, end, count);
                    months.push(MonthsRow {
                        label,
                        start,
                        end,
                        months: count,
                        display: format_months(count),
                    });
                }
                Scenario::Pension {
                    label,
                    salary,
                    months: contributed,
                } => {
                    let result = rules.calculate(salary, contributed);
                    tracing::debug!(
                        "{}: salary={} months={} eligible={}",
                        label,
                        salary,
                        contributed,
                        result.is_eligible
                    );
                    pension.push(PensionRow {
                        label,
                        salary,
                        months_contributed: contributed,
                        is_eligible: result.is_eligible,
                        pension_right: result.pension_right,
                        pension_pay: result.pension_pay,
                        display: pension_summary(&result, &rules),
                    });
                }
            }
        }

        Ok(BatchReport {
            name: self.config.batch_name().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            rules,
            months,
            pension,
        })
    }

    async fn load(&self, report: BatchReport) -> Result<String> {
        if self.wants("csv") {
            if !report.months.is_empty() {
                let data = to_csv(&report.months)?;
                tracing::debug!("Writing {} ({} bytes)", MONTHS_REPORT_FILE, data.len());
                self.storage.write_file(MONTHS_REPORT_FILE, &data).await?;
            }
            if !report.pension.is_empty() {
                let data = to_csv(&report.pension)?;
                tracing::debug!("Writing {} ({} bytes)", PENSION_REPORT_FILE, data.len());
                self.storage.write_file(PENSION_REPORT_FILE, &data).await?;
            }
        }

        if self.wants("json") {
            let json_data = serde_json::to_string_pretty(&report)?;
            tracing::debug!("Writing {} ({} bytes)", JSON_REPORT_FILE, json_data.len());
            self.storage
                .write_file(JSON_REPORT_FILE, json_data.as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
