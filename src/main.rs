use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use acctsim::{
    config::{CliArgs, Config, LoggingConfig},
    scenario,
    teller::Teller,
    Account,
};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);
    init_tracing(&config.logging);

    let stdout = io::stdout();
    let mut teller = Teller::new(stdout.lock());

    let result = scenario::run(&mut teller).and_then(|accounts| {
        tracing::info!(
            savings = %accounts.savings.number(),
            current = %accounts.current.number(),
            "Scenario finished"
        );
        if config.report.summary {
            teller.show_summary(&accounts.summary())?;
        }
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write scenario output");
            ExitCode::FAILURE
        }
    }
}
