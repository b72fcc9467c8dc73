use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::board::{Board, get_available_moves};
use super::bot::best_move;
use super::types::Mark;
use crate::session_rng::MoveRandom;
use crate::{EngineError, Result};

/// Share of medium-difficulty turns played at random instead of searched.
pub const MEDIUM_RANDOM_MOVE_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell. Does not even block an immediate loss.
    #[default]
    Easy,
    /// Random 30% of the time, otherwise full search.
    Medium,
    /// Always full search; never loses.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" | "impossible" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Picks the bot's next cell under `difficulty`. Never modifies `board`.
///
/// Fails on a full board, on identical marks, and on boards whose mark counts
/// differ by more than one.
pub fn choose_move<R>(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    player_mark: Mark,
    rng: &mut R,
) -> Result<usize>
where
    R: MoveRandom + ?Sized,
{
    if bot_mark == player_mark {
        return Err(EngineError::IdenticalMarks(bot_mark));
    }
    board.validate()?;

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(EngineError::NoAvailableMoves);
    }

    let play_random = match difficulty {
        Difficulty::Easy => true,
        Difficulty::Medium => rng.chance(MEDIUM_RANDOM_MOVE_CHANCE),
        Difficulty::Hard => false,
    };

    if play_random {
        let len = available_moves.len();
        let drawn = rng.pick(len);
        return available_moves
            .get(drawn)
            .copied()
            .ok_or(EngineError::RandomOutOfRange { drawn, len });
    }

    best_move(board, bot_mark, player_mark).ok_or(EngineError::NoAvailableMoves)
}
