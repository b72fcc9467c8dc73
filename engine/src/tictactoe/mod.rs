//! Classic 3×3 tic-tac-toe: terminal detection, move enumeration and the bot's
//! move policy, plus the caller-side match tracker that drives them.

mod board;
mod bot;
mod difficulty;
mod game_state;
mod stats;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot::{
    MoveScore, Pruning, SearchOutcome, SearchReport, WIN_SCORE, best_move, score_moves, search, search_all,
};
pub use difficulty::{Difficulty, MEDIUM_RANDOM_MOVE_CHANCE, choose_move};
pub use game_state::TicTacToeGameState;
pub use stats::GameStats;
pub use types::{BOARD_SIZE, CELL_COUNT, GameOutcome, GameStatus, Mark};
pub use win_detector::{WINNING_LINES, WinningLine, check_win, check_win_with_line, game_status, is_draw};
