use std::fmt;

use tictactoe_engine::Result;
use tictactoe_engine::session_rng::MoveRandom;
use tictactoe_engine::tictactoe::{Board, Difficulty, GameStatus, Mark, choose_move, game_status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelfPlayTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SelfPlayTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl fmt::Display for SelfPlayTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// One bot-versus-bot game from an empty board; X opens.
pub fn play_match<M>(x: Difficulty, o: Difficulty, rng: &mut M) -> Result<(Board, GameStatus)>
where
    M: MoveRandom + ?Sized,
{
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    loop {
        let status = game_status(&board);
        if status.is_over() {
            return Ok((board, status));
        }
        let difficulty = match current_mark {
            Mark::X => x,
            Mark::O => o,
        };
        let index = choose_move(&board, difficulty, current_mark, current_mark.opponent(), rng)?;
        board.place(index, current_mark)?;
        current_mark = current_mark.opponent();
    }
}

pub fn run_self_play<M>(x: Difficulty, o: Difficulty, games: u32, rng: &mut M) -> Result<SelfPlayTally>
where
    M: MoveRandom + ?Sized,
{
    let mut tally = SelfPlayTally::default();
    for _ in 0..games {
        let (_, status) = play_match(x, o, rng)?;
        tally.record(status);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::SessionRng;

    #[test]
    fn test_hard_vs_hard_is_always_a_full_board_draw() {
        let mut rng = SessionRng::new(21);
        let (board, status) = play_match(Difficulty::Hard, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(status, GameStatus::Draw);
        assert!(board.is_full());

        let tally = run_self_play(Difficulty::Hard, Difficulty::Hard, 3, &mut rng).unwrap();
        assert_eq!(tally, SelfPlayTally { x_wins: 0, o_wins: 0, draws: 3 });
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let mut rng = SessionRng::new(17);
        let tally = run_self_play(Difficulty::Easy, Difficulty::Hard, 40, &mut rng).unwrap();
        assert_eq!(tally.x_wins, 0);
        assert_eq!(tally.o_wins + tally.draws, 40);

        let tally = run_self_play(Difficulty::Hard, Difficulty::Medium, 40, &mut rng).unwrap();
        assert_eq!(tally.o_wins, 0);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let a = run_self_play(Difficulty::Easy, Difficulty::Medium, 25, &mut SessionRng::new(4)).unwrap();
        let b = run_self_play(Difficulty::Easy, Difficulty::Medium, 25, &mut SessionRng::new(4)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.x_wins + a.o_wins + a.draws, 25);
    }
}
