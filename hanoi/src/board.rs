use std::fmt;

use thiserror::Error;

use crate::peg::{Disk, Peg, PegError};

/// Capacity of every peg on a board built with [`Board::with_default_capacity`].
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    fn index(self) -> usize {
        match self {
            Label::A => 0,
            Label::B => 1,
            Label::C => 2,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
        };
        write!(f, "{c}")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("cannot stack {disks} disks on towers of capacity {capacity}")]
    CapacityExceeded { disks: u32, capacity: usize },
}

/// A single transfer of the top disk of one peg onto another.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub disk: Disk,
    pub from: Label,
    pub to: Label,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moving disk {} from Tower {} to Tower {}",
            self.disk, self.from, self.to
        )
    }
}

/// Three pegs holding the disks `1..=n` between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pegs: [Peg; 3],
    disk_count: u32,
}

impl Board {
    /// Build a board with all `disks` stacked on peg A, largest at the bottom.
    pub fn new(disks: u32, capacity: usize) -> Result<Self, BoardError> {
        if disks as usize > capacity {
            return Err(BoardError::CapacityExceeded { disks, capacity });
        }

        let stack = (1..=disks).rev().map(Disk).collect();
        let pegs = [
            Peg::with_disks(Label::A, capacity, stack),
            Peg::new(Label::B, capacity),
            Peg::new(Label::C, capacity),
        ];

        log::debug!("created board with {disks} disks, capacity {capacity}");
        Ok(Board {
            pegs,
            disk_count: disks,
        })
    }

    pub fn with_default_capacity(disks: u32) -> Result<Self, BoardError> {
        Self::new(disks, DEFAULT_CAPACITY)
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn peg(&self, label: Label) -> &Peg {
        &self.pegs[label.index()]
    }

    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    fn pair_mut(&mut self, from: Label, to: Label) -> (&mut Peg, &mut Peg) {
        let (i, j) = (from.index(), to.index());
        debug_assert_ne!(i, j);

        if i < j {
            let (left, right) = self.pegs.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.pegs.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }

    /// Move the top disk of `from` onto `to`. Nothing changes on error.
    pub fn move_disk(&mut self, from: Label, to: Label) -> Result<Move, PegError> {
        if from == to {
            return Err(PegError::SameTower { label: from });
        }
        let (src, dst) = self.pair_mut(from, to);
        let disk = src.move_to(dst)?;
        Ok(Move { disk, from, to })
    }

    /// True if every disk sits on `target`.
    pub fn is_solved(&self, target: Label) -> bool {
        self.peg(target).len() == self.disk_count as usize
    }

    /// Banner followed by each peg, top to bottom.
    pub fn render(&self) -> String {
        self.render_with(|disk| disk.to_string())
    }

    pub fn render_with(&self, draw_disk: impl Fn(Disk) -> String) -> String {
        let mut out = String::from("---------------\nTower of Hanoi:\n\n");
        for peg in &self.pegs {
            out.push_str(&peg.render_with(&draw_disk));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::with_default_capacity(3).unwrap();

        assert_eq!(board.peg(Label::A).disks(), &[Disk(3), Disk(2), Disk(1)]);
        assert!(board.peg(Label::B).is_empty());
        assert!(board.peg(Label::C).is_empty());
        assert!(board.is_solved(Label::A));
        assert!(!board.is_solved(Label::C));
    }

    #[test]
    fn test_capacity_exceeded() {
        assert_eq!(
            Board::with_default_capacity(11),
            Err(BoardError::CapacityExceeded {
                disks: 11,
                capacity: 10
            })
        );
        assert!(Board::with_default_capacity(10).is_ok());
    }

    #[test]
    fn test_move_disk_both_directions() {
        let mut board = Board::with_default_capacity(2).unwrap();

        let mv = board.move_disk(Label::A, Label::B).unwrap();
        assert_eq!(
            mv,
            Move {
                disk: Disk(1),
                from: Label::A,
                to: Label::B
            }
        );

        let mv = board.move_disk(Label::B, Label::A).unwrap();
        assert_eq!(mv.disk, Disk(1));
        assert_eq!(board.peg(Label::A).disks(), &[Disk(2), Disk(1)]);
    }

    #[test]
    fn test_illegal_board_move() {
        let mut board = Board::with_default_capacity(2).unwrap();
        board.move_disk(Label::A, Label::C).unwrap();

        let before = board.clone();
        assert!(board.move_disk(Label::A, Label::C).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_display() {
        let mv = Move {
            disk: Disk(4),
            from: Label::A,
            to: Label::C,
        };
        assert_eq!(mv.to_string(), "Moving disk 4 from Tower A to Tower C");
    }

    #[test]
    fn test_move_onto_same_tower() {
        let mut board = Board::with_default_capacity(3).unwrap();
        let before = board.clone();

        assert_eq!(
            board.move_disk(Label::A, Label::A),
            Err(PegError::SameTower { label: Label::A })
        );
        assert_eq!(
            board.move_disk(Label::B, Label::B),
            Err(PegError::SameTower { label: Label::B })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_render() {
        let board = Board::with_default_capacity(2).unwrap();
        assert_eq!(
            board.render(),
            "---------------\nTower of Hanoi:\n\nTower A:\n1\n2\n\nTower B:\n\nTower C:\n\n"
        );
    }
}
