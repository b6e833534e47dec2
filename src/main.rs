mod check;
mod cli;
mod config;
mod errors;
mod models;
mod probe;
mod report;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::Cli;
use crate::config::ProbeConfig;
use crate::errors::CheckError;
use crate::models::Severity;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(Severity::Unknown.exit_code());
        }
    };

    let severity = match run(cli).await {
        Ok(severity) => severity,
        Err(e) => {
            let severity = e.severity();
            println!("{}", report::render_failure(severity, &e));
            severity
        }
    };
    ExitCode::from(severity.exit_code())
}

async fn run(cli: Cli) -> Result<Severity, CheckError> {
    let config = ProbeConfig::from_cli(cli)?;
    let result = probe::execute(&config).await?;

    if config.verbose {
        print!("{}", String::from_utf8_lossy(&result.body));
    }

    let verdict = check::evaluate(&config, &result);
    println!("{}", report::render(&verdict, &result));
    Ok(verdict.severity)
}
