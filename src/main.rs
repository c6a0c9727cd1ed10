mod cli;

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;

use crate::cli::{run, AppError, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let highlight = stdout.is_terminal();
    if !highlight {
        colored::control::set_override(false);
    }

    let mut out = stdout.lock();
    match run(cli, &mut out, highlight) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let AppError::IllegalMove(e) = &err {
                log::error!("solver broke a stacking rule: {e}");
            }
            eprintln!("[ToH]: Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
