use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use thiserror::Error;

use hanoi::{present, Board, BoardError, Mode, ParseModeError, PegError, PresentError};

#[derive(Parser, Debug)]
#[command(
    name = "toh",
    version,
    about = "Solve the Tower of Hanoi puzzle",
    disable_help_flag = true
)]
pub struct Cli {
    /// The number of disks to solve for.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub disks: Option<u32>,

    /// "instructions" or "visual".
    #[arg(long, value_name = "MODE", default_value = "instructions")]
    pub mode: String,

    /// Print help, or details about a single flag.
    #[arg(
        short,
        long,
        value_name = "FLAG",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub help: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please specify the --disks flag!")]
    MissingArgument,
    #[error("Invalid argument for flag --mode: {0}")]
    InvalidMode(#[from] ParseModeError),
    #[error(transparent)]
    CapacityExceeded(#[from] BoardError),
    #[error("illegal move during solve: {0}")]
    IllegalMove(PegError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl From<PresentError> for AppError {
    fn from(err: PresentError) -> Self {
        match err {
            PresentError::IllegalMove(e) => AppError::IllegalMove(e),
            PresentError::Io(e) => AppError::Io(e),
        }
    }
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::MissingArgument => 1,
            AppError::InvalidMode(_) => 2,
            AppError::CapacityExceeded(_) => 3,
            AppError::IllegalMove(_) => 4,
            AppError::Io(_) => 5,
        }
    }
}

fn write_help<W: Write>(flag: &str, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    cmd.build();

    let arg = cmd
        .get_arguments()
        .find(|a| !flag.is_empty() && a.get_long() == Some(flag));
    let Some(arg) = arg else {
        return write!(out, "{}", Cli::command().render_long_help());
    };

    writeln!(out, "[ToH]: Flag Info: --{flag}")?;
    match arg.get_short() {
        Some(short) => writeln!(out, "- Short flag: -{short}")?,
        None => writeln!(out, "- No short flag")?,
    }
    match arg.get_num_args() {
        Some(range) if range.takes_values() && range.min_values() == 0 => {
            writeln!(out, "- Optional argument")?
        }
        Some(range) if range.takes_values() => writeln!(out, "- Required argument")?,
        _ => {}
    }
    if let Some(names) = arg.get_value_names() {
        let names: Vec<String> = names.iter().map(|n| format!("<{n}>")).collect();
        writeln!(out, "- Argument: {}", names.join(" "))?;
    }
    if let Some(help) = arg.get_help() {
        writeln!(out, "- {help}")?;
    }
    Ok(())
}

/// Run the program for already parsed arguments, writing to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W, highlight: bool) -> Result<(), AppError> {
    if let Some(flag) = cli.help {
        write_help(&flag, out)?;
        return Ok(());
    }

    let disks = cli.disks.ok_or(AppError::MissingArgument)?;
    let mode: Mode = cli.mode.parse()?;
    let mut board = Board::with_default_capacity(disks)?;

    log::info!("running in {mode:?} mode");
    present(&mut board, mode, out, highlight)?;
    Ok(())
}
