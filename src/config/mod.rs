pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod args {
    use crate::core::YearMonth;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_batch_file, validate_path, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "months-calculator")]
    #[command(version)]
    #[command(about = "Month-span and SSNIT pension calculators")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Print results as JSON")]
        pub json: bool,

        #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
        pub log_json: bool,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Count the months between two year-months, both ends included
        Months {
            /// First month (YYYY-MM or "June 2024")
            #[arg(long)]
            start: YearMonth,

            /// Last month; defaults to the current month
            #[arg(long)]
            end: Option<YearMonth>,
        },

        /// Estimate the monthly SSNIT pension
        Pension {
            /// Average of the best three years' salary, per annum
            #[arg(long)]
            salary: String,

            /// Total months contributed
            #[arg(long)]
            months: String,
        },

        /// Evaluate every scenario in a TOML batch file and write reports
        Batch {
            /// Path to the batch file
            #[arg(short, long, default_value = "batch.toml")]
            config: String,

            /// Override the output directory from the batch file
            #[arg(short, long)]
            output: Option<String>,

            /// Show what would be calculated without writing reports
            #[arg(long)]
            dry_run: bool,
        },
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Command::Batch { config, output, .. } = &self.command {
                validate_batch_file("--config", config)?;
                if let Some(output) = output {
                    validate_path("--output", output)?;
                }
            }
            Ok(())
        }
    }

}
