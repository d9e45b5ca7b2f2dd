pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, toml_config::BatchConfig};
pub use crate::core::{
    batch_pipeline::BatchPipeline,
    engine::CalcEngine,
    months::months_between,
    pension::{calculate_pension, PensionRules},
};
pub use domain::model::{PensionResult, YearMonth};
pub use utils::error::{CalcError, Result};
