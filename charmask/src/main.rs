// charmask/src/main.rs
//! charmask entry point.
//!
//! Parses arguments, installs the logger and runs the substitution. Any
//! failure becomes a single `Error: ...` line on stderr and exit code 1.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;

use charmask::cli::Cli;
use charmask::logger::{self, LogConfig};
use charmask::run_charmask;
use charmask::ui::output_format;

fn main() -> ExitCode {
    // A missing .env file is the common case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(&LogConfig::from(&cli));
    log::debug!("charmask started. Version: {}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match run_charmask(&cli, &mut writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = output_format::print_error_message(
                &mut stderr.lock(),
                &output_format::render_error(&e),
                supports_color,
            );
            ExitCode::FAILURE
        }
    }
}
