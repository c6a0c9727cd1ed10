use std::{io::Write, str::FromStr};

use colored::Colorize;
use thiserror::Error;

use crate::{
    board::{Board, Move},
    peg::{Disk, PegError},
    solver::solve_board,
};

/// How each move is reported.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// One line of text per move.
    #[default]
    Instructions,
    /// The whole board before the first move and after every move.
    Visual,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid mode {0:?}, expected \"instructions\" or \"visual\"")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instructions" => Ok(Mode::Instructions),
            "visual" => Ok(Mode::Visual),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum PresentError {
    #[error(transparent)]
    IllegalMove(#[from] PegError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

fn draw_board(board: &Board, last: Option<Disk>, highlight: bool) -> String {
    board.render_with(|disk| {
        if highlight && Some(disk) == last {
            disk.to_string().as_str().on_red().to_string()
        } else {
            disk.to_string()
        }
    })
}

/// Solve `board` and report every move to `out` in the given `mode`.
///
/// With `highlight` set, visual mode marks the disk that just moved.
/// Returns the number of moves performed.
pub fn present<W: Write>(
    board: &mut Board,
    mode: Mode,
    out: &mut W,
    highlight: bool,
) -> Result<u64, PresentError> {
    if mode == Mode::Visual {
        write!(out, "{}", draw_board(board, None, highlight))?;
    }

    // The observer cannot fail, so keep the first write error and stop writing.
    let mut write_err: Option<std::io::Error> = None;
    let moves = solve_board(board, &mut |mv: &Move, board: &Board| {
        if write_err.is_some() {
            return;
        }
        let res = match mode {
            Mode::Instructions => writeln!(out, "{mv}"),
            Mode::Visual => write!(out, "{}", draw_board(board, Some(mv.disk), highlight)),
        };
        if let Err(e) = res {
            write_err = Some(e);
        }
    })?;

    if let Some(e) = write_err {
        return Err(e.into());
    }
    out.flush()?;
    Ok(moves)
}
