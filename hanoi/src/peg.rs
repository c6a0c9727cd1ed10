use std::fmt;

use thiserror::Error;

use crate::board::Label;

/// A disk, identified only by its size. Sizes are unique within a board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Disk(pub u32);

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PegError {
    #[error("tried pushing disk {disk} on full tower {label} (capacity {capacity})")]
    Overflow {
        label: Label,
        disk: Disk,
        capacity: usize,
    },
    #[error("tried pushing disk {disk} onto smaller disk {top} on tower {label}")]
    IllegalStack { label: Label, disk: Disk, top: Disk },
    #[error("tower {label} has no disk to move")]
    Empty { label: Label },
    #[error("cannot move a disk from tower {label} onto itself")]
    SameTower { label: Label },
}

/// A labelled stack of disks.
///
/// Invariant: `disks` is strictly decreasing from bottom (index 0) to top,
/// and never longer than `capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peg {
    label: Label,
    disks: Vec<Disk>,
    capacity: usize,
}

impl Peg {
    pub fn new(label: Label, capacity: usize) -> Self {
        Peg {
            label,
            disks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// A peg already holding `disks`, bottom first. The caller guarantees
    /// they are strictly decreasing and fit within `capacity`.
    pub(crate) fn with_disks(label: Label, capacity: usize, disks: Vec<Disk>) -> Self {
        debug_assert!(disks.len() <= capacity);
        let peg = Peg {
            label,
            disks,
            capacity,
        };
        debug_assert!(peg.is_ordered());
        peg
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Index of the highest occupied slot, or 0 if the peg is empty.
    pub fn top_index(&self) -> usize {
        self.disks.len().saturating_sub(1)
    }

    /// Check whether `disk` could be pushed, without touching the peg.
    pub fn check_push(&self, disk: Disk) -> Result<(), PegError> {
        if self.disks.len() >= self.capacity {
            return Err(PegError::Overflow {
                label: self.label,
                disk,
                capacity: self.capacity,
            });
        }

        match self.peek() {
            Some(top) if top < disk => Err(PegError::IllegalStack {
                label: self.label,
                disk,
                top,
            }),
            _ => Ok(()),
        }
    }

    /// Place `disk` on top. On error the peg is left unchanged.
    pub fn push(&mut self, disk: Disk) -> Result<(), PegError> {
        self.check_push(disk)?;
        self.disks.push(disk);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub fn peek(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Move the top disk onto `destination`.
    ///
    /// Both pegs are left untouched if the move would be illegal.
    pub fn move_to(&mut self, destination: &mut Peg) -> Result<Disk, PegError> {
        let disk = self.peek().ok_or(PegError::Empty { label: self.label })?;
        destination.check_push(disk)?;

        self.disks.pop();
        destination.disks.push(disk);
        Ok(disk)
    }

    /// True if sizes strictly decrease from bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0] > w[1])
    }

    /// Label line followed by the disks from top to bottom, then a blank line.
    pub fn render(&self) -> String {
        self.render_with(|disk| disk.to_string())
    }

    pub fn render_with(&self, draw_disk: impl Fn(Disk) -> String) -> String {
        let mut out = format!("Tower {}:\n", self.label);
        for &disk in self.disks.iter().rev() {
            out.push_str(&draw_disk(disk));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg_with(label: Label, capacity: usize, sizes: &[u32]) -> Peg {
        let mut peg = Peg::new(label, capacity);
        for &s in sizes {
            peg.push(Disk(s)).unwrap();
        }
        peg
    }

    #[test]
    fn test_push_pop_peek() {
        let mut peg = Peg::new(Label::A, 3);
        assert!(peg.is_empty());
        assert_eq!(peg.peek(), None);
        assert_eq!(peg.top_index(), 0);

        peg.push(Disk(3)).unwrap();
        assert_eq!(peg.top_index(), 0);
        peg.push(Disk(1)).unwrap();
        assert_eq!(peg.top_index(), 1);
        assert_eq!(peg.peek(), Some(Disk(1)));

        assert_eq!(peg.pop(), Some(Disk(1)));
        assert_eq!(peg.pop(), Some(Disk(3)));
        assert_eq!(peg.pop(), None);
    }

    #[test]
    fn test_push_on_full_peg() {
        let mut peg = peg_with(Label::B, 2, &[5, 4]);

        let err = peg.push(Disk(1)).unwrap_err();
        assert_eq!(
            err,
            PegError::Overflow {
                label: Label::B,
                disk: Disk(1),
                capacity: 2
            }
        );
        assert_eq!(peg.disks(), &[Disk(5), Disk(4)]);
    }

    #[test]
    fn test_push_larger_onto_smaller() {
        let mut peg = peg_with(Label::A, 10, &[5, 2]);

        let err = peg.push(Disk(3)).unwrap_err();
        assert_eq!(
            err,
            PegError::IllegalStack {
                label: Label::A,
                disk: Disk(3),
                top: Disk(2)
            }
        );
        assert_eq!(peg.disks(), &[Disk(5), Disk(2)]);
        assert!(peg.is_ordered());
    }

    #[test]
    fn test_move_to() {
        let mut a = peg_with(Label::A, 10, &[3, 2, 1]);
        let mut c = Peg::new(Label::C, 10);

        assert_eq!(a.move_to(&mut c), Ok(Disk(1)));
        assert_eq!(a.disks(), &[Disk(3), Disk(2)]);
        assert_eq!(c.disks(), &[Disk(1)]);
    }

    #[test]
    fn test_illegal_move_keeps_both_pegs() {
        let mut a = peg_with(Label::A, 10, &[3, 2]);
        let mut b = peg_with(Label::B, 10, &[1]);

        assert!(matches!(
            a.move_to(&mut b),
            Err(PegError::IllegalStack { .. })
        ));
        assert_eq!(a.disks(), &[Disk(3), Disk(2)]);
        assert_eq!(b.disks(), &[Disk(1)]);
    }

    #[test]
    fn test_move_from_empty_peg() {
        let mut a = Peg::new(Label::A, 10);
        let mut b = Peg::new(Label::B, 10);
        assert_eq!(a.move_to(&mut b), Err(PegError::Empty { label: Label::A }));
    }

    #[test]
    fn test_render_top_to_bottom() {
        let peg = peg_with(Label::C, 10, &[3, 2, 1]);
        assert_eq!(peg.render(), "Tower C:\n1\n2\n3\n\n");
        assert_eq!(Peg::new(Label::B, 10).render(), "Tower B:\n\n");
    }
}
