use std::process::ExitCode;

use boxdance::cli;
use clap::error::ErrorKind;
use log::{debug, error};

fn main() -> ExitCode {
    let config = match cli::parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let _ = err.print();
            if err.kind() == ErrorKind::ValueValidation {
                eprintln!("\n{}", cli::command().render_usage());
            }
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = simple_logger::init_with_level(config.log_level) {
        eprintln!("Could not initialize logger: {}", err);
    }
    debug!("Log level: {}", config.log_level);

    match boxdance::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Could not complete conversion, reason: {}", err);
            ExitCode::from(1)
        }
    }
}
