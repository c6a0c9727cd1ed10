use crate::{
    board::{Board, Label, Move},
    peg::PegError,
};

/// Number of moves needed to transfer `n` disks, saturating at `u64::MAX`.
pub fn move_count(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Move the top `n` disks of `from` onto `to`, using `helper` as scratch.
///
/// `observer` is called after every single-disk move with the move and the
/// board as it looks afterwards. Returns the number of moves performed.
///
/// The board must hold at least `n` correctly ordered disks on `from`, all
/// smaller than whatever sits on `to` and `helper`. Recursion depth is `n`.
pub fn solve<F>(
    board: &mut Board,
    n: u32,
    from: Label,
    to: Label,
    helper: Label,
    observer: &mut F,
) -> Result<u64, PegError>
where
    F: FnMut(&Move, &Board),
{
    if n == 0 {
        return Ok(0);
    }

    if n == 1 {
        let mv = board.move_disk(from, to)?;
        log::debug!("moved disk {} from {} to {}", mv.disk, mv.from, mv.to);
        observer(&mv, board);
        return Ok(1);
    }

    let mut moves = solve(board, n - 1, from, helper, to, observer)?;
    moves += solve(board, 1, from, to, helper, observer)?;
    moves += solve(board, n - 1, helper, to, from, observer)?;
    Ok(moves)
}

/// Transfer every disk on the board from tower A to tower C via tower B.
pub fn solve_board<F>(board: &mut Board, observer: &mut F) -> Result<u64, PegError>
where
    F: FnMut(&Move, &Board),
{
    let n = board.disk_count();
    log::info!("solving {n} disks, expecting {} moves", move_count(n));

    let moves = solve(board, n, Label::A, Label::C, Label::B, observer)?;

    log::info!("solved {n} disks in {moves} moves");
    Ok(moves)
}
