use thiserror::Error;

use crate::tictactoe::{CELL_COUNT, Mark};

/// Failures reported by the engine and the match tracker built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("no available moves: the board is full")]
    NoAvailableMoves,

    #[error("cell {index} is out of range (expected 0..{})", CELL_COUNT)]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("bot and player must use different marks (both are {0})")]
    IdenticalMarks(Mark),

    #[error("malformed board: {x_count} X against {o_count} O (counts may differ by at most one)")]
    MarkImbalance { x_count: usize, o_count: usize },

    #[error("board text must describe {} cells, got {got}", CELL_COUNT)]
    InvalidBoardLength { got: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("random source drew index {drawn} from {len} candidates")]
    RandomOutOfRange { drawn: usize, len: usize },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("unknown mark '{0}' (expected X or O)")]
    UnknownMark(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
