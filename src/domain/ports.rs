use crate::core::pension::PensionRules;
use crate::domain::model::{BatchReport, Scenario};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn batch_name(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn rules(&self) -> PensionRules;
    fn scenarios(&self) -> Vec<Scenario>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Scenario>>;
    async fn transform(&self, scenarios: Vec<Scenario>) -> Result<BatchReport>;
    async fn load(&self, report: BatchReport) -> Result<String>;
}
