use anyhow::Context;
use clap::Parser;
use joker::utils::{logger, validation::Validate};
use joker::{CliConfig, JokerError, Outcome, Settings};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(outcome) => {
            tracing::debug!("Finished with {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("joker failed: {:#}", e);
            match e.downcast_ref::<JokerError>() {
                Some(err) => {
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 {}", err.recovery_suggestion());
                    ExitCode::from(err.exit_code())
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<Outcome> {
    config.validate()?;
    let settings = Settings::from_cli(config)?;
    let mut joker = settings.build_joker();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = joker.run(&config.request(), &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(outcome)
}
