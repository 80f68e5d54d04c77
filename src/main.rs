//! Nomina CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use nomina::VERSION;
use nomina::cli::args::NominaArgs;
use nomina::cli::commands::execute_command;

/// Environment variable holding an env_logger filter that overrides `-v`/`-q`.
const LOG_ENV: &str = "NOMINA_LOG";

fn init_logger(args: &NominaArgs) {
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let args = NominaArgs::parse();
    init_logger(&args);

    log::debug!("nomina {VERSION} using {}", args.vocabulary_source());

    if let Err(e) = execute_command(args) {
        log::debug!("command failed: {e:?}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
