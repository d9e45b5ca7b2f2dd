pub mod batch_pipeline;
pub mod engine;
pub mod format;
pub mod months;
pub mod pension;

pub use crate::domain::model::{BatchReport, PensionResult, Scenario, YearMonth};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
