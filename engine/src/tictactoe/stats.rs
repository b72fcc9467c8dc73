use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::GameOutcome;

/// Running win/draw/loss tally for the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl GameStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Loss => self.losses += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}  Draws: {}  Losses: {}",
            self.wins, self.draws, self.losses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut stats = GameStats::default();
        stats.record(GameOutcome::Win);
        stats.record(GameOutcome::Draw);
        stats.record(GameOutcome::Draw);
        stats.record(GameOutcome::Loss);
        assert_eq!(stats, GameStats { wins: 1, draws: 2, losses: 1 });
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.to_string(), "Wins: 1  Draws: 2  Losses: 1");
    }
}
