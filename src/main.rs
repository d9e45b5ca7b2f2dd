use clap::Parser;
use months_calculator::app::commands::{
    batch_command, months_command, pension_command, MISSING_PENSION_INPUT,
};
use months_calculator::utils::error::CalcError;
use months_calculator::utils::logger::{self, LogFormat};
use months_calculator::utils::validation::Validate;
use months_calculator::{CliConfig, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_flag(config.log_json));
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let outcome = match config.command.clone() {
        Command::Months { start, end } => months_command(start, end, config.json).map(Some),
        Command::Pension { salary, months } => pension_command(&salary, &months, config.json),
        Command::Batch {
            config: path,
            output,
            dry_run,
        } => batch_command(&path, output, dry_run).await.map(Some),
    };

    match outcome {
        Ok(Some(text)) => println!("{}", text),
        Ok(None) => eprintln!("{}", MISSING_PENSION_INPUT),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
