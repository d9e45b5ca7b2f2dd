use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct CalcEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CalcEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting batch calculation");

        let scenarios = self.pipeline.extract().await?;
        tracing::info!("Extracted {} scenarios", scenarios.len());

        let report = self.pipeline.transform(scenarios).await?;
        tracing::info!(
            "Calculated {} month spans and {} pensions",
            report.months.len(),
            report.pension.len()
        );

        let output_path = self.pipeline.load(report).await?;
        tracing::info!(
            "Reports saved to: {} ({:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pension::PensionRules;
    use crate::core::{BatchReport, Scenario};
    use crate::utils::error::CalcError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        loads: AtomicUsize,
        fail_transform: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<Scenario>> {
            Ok(vec![Scenario::Pension {
                label: "only".to_string(),
                salary: 1.0,
                months: 1,
            }])
        }

        async fn transform(&self, scenarios: Vec<Scenario>) -> Result<BatchReport> {
            if self.fail_transform {
                return Err(CalcError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            assert_eq!(scenarios.len(), 1);
            Ok(BatchReport {
                name: "counting".to_string(),
                generated_at: String::new(),
                rules: PensionRules::default(),
                months: vec![],
                pension: vec![],
            })
        }

        async fn load(&self, _report: BatchReport) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("out".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_executes_all_stages() {
        let engine = CalcEngine::new(CountingPipeline {
            loads: AtomicUsize::new(0),
            fail_transform: false,
        });

        assert_eq!(engine.run().await.unwrap(), "out");
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_stops_on_transform_error() {
        let engine = CalcEngine::new(CountingPipeline {
            loads: AtomicUsize::new(0),
            fail_transform: true,
        });

        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }
}
