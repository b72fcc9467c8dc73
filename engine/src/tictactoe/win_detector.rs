use super::board::Board;
use super::types::{GameStatus, Mark};

/// The eight triples that win: rows, columns, then both diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells;
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark))
            .then_some(WinningLine { mark, cells })
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// True when every cell is occupied, whether or not someone has won.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Game-end view of a board: a winner takes precedence over a full board.
pub fn game_status(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return GameStatus::Won(mark);
    }
    if is_draw(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
