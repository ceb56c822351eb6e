use log::{LevelFilter, error};
use pHsolver::cli::cli_main::run_session;
use pHsolver::store_config::{CONFIG_FILE, StoreConfig};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    // stdout carries the prompts, so diagnostics go to stderr
    if let Err(e) = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialise logger: {}", e);
    }

    let config = match StoreConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(stdin.lock(), stdout.lock(), &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
