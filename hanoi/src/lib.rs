pub mod board;
pub mod peg;
pub mod present;
pub mod solver;

pub use board::{Board, BoardError, Label, Move, DEFAULT_CAPACITY};
pub use peg::{Disk, Peg, PegError};
pub use present::{present, Mode, ParseModeError, PresentError};
pub use solver::{move_count, solve, solve_board};
