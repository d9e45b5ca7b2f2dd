//! Handlers behind the CLI subcommands. Each returns the text the binary prints.

use crate::config::cli::LocalStorage;
use crate::config::toml_config::BatchConfig;
use crate::core::batch_pipeline::BatchPipeline;
use crate::core::engine::CalcEngine;
use crate::core::format::{render_months, render_pension};
use crate::core::months::months_between;
use crate::core::pension::PensionRules;
use crate::core::YearMonth;
use crate::utils::error::Result;
use crate::utils::input::{coerce_months, coerce_salary, has_both_inputs};
use crate::utils::validation::Validate;

pub const MISSING_PENSION_INPUT: &str =
    "Enter both the average salary and the total months contributed";

/// `end` defaults to the current month.
pub fn months_command(start: YearMonth, end: Option<YearMonth>, json: bool) -> Result<String> {
    let end = end.unwrap_or_else(YearMonth::now);
    let months = months_between(start, end);
    tracing::debug!("{} → {} = {} months", start, end, months);

    if json {
        let value = serde_json::json!({
            "start": start,
            "end": end,
            "months": months,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(render_months(start, end, months))
}

/// `None` when either field is still empty; there is nothing to show yet.
pub fn pension_command(salary_text: &str, months_text: &str, json: bool) -> Result<Option<String>> {
    if !has_both_inputs(salary_text, months_text) {
        return Ok(None);
    }

    let salary = coerce_salary(salary_text);
    let months = coerce_months(months_text);
    let rules = PensionRules::default();
    let result = rules.calculate(salary, months);
    tracing::debug!("salary={} months={} → {:?}", salary, months, result);

    if json {
        return Ok(Some(serde_json::to_string_pretty(&result)?));
    }
    Ok(Some(render_pension(&result, &rules)))
}

pub async fn batch_command(path: &str, output: Option<String>, dry_run: bool) -> Result<String> {
    let (inputs, file_name) = LocalStorage::for_file(path)?;

    tracing::info!("📁 Loading batch from: {}", path);
    let mut config = BatchConfig::load(&inputs, &file_name).await?;

    if let Some(output) = output {
        tracing::info!("🔧 Output path overridden to: {}", output);
        config.output.path = output;
    }

    config.validate()?;
    tracing::info!(
        "✅ Batch '{}' loaded: {} scenarios, formats {:?}",
        config.batch.name,
        config.scenario_count(),
        config.output.formats
    );

    if dry_run {
        let mut lines = vec![format!("Batch:     {}", config.batch.name)];
        if let Some(description) = &config.batch.description {
            lines.push(format!("           {}", description));
        }
        lines.push(format!(
            "Scenarios: {} month spans, {} pensions",
            config.months.len(),
            config.pension.len()
        ));
        lines.push(format!(
            "Output:    {} ({})",
            config.output.path,
            config.output.formats.join(", ")
        ));
        lines.push(format!("Rules:     {:?}", config.pension_rules()));
        return Ok(lines.join("\n"));
    }

    let storage = LocalStorage::new(config.output.path.clone());
    let engine = CalcEngine::new(BatchPipeline::new(storage, config));
    let output_path = engine.run().await?;

    Ok(format!(
        "✅ Batch completed successfully!\n📁 Reports saved to: {}",
        output_path
    ))
}
