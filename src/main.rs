// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, create an API client and hand
//   both to `ui::run`.
// - Any failure is printed to stderr and exits with status 1.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use ninepic_cli::{api::ApiClient, cli::Cli, ui::run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_writer(io::stderr)
        .init();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let api = ApiClient::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&api, &config, &mut out)?;
    Ok(())
}
