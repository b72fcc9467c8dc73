use super::board::Board;
use super::difficulty::{Difficulty, choose_move};
use super::types::{GameOutcome, GameStatus, Mark};
use super::win_detector::{WinningLine, check_win_with_line, game_status};
use crate::session_rng::MoveRandom;
use crate::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    index: usize,
    mark: Mark,
}

/// One human-versus-bot match. Owns the board the engine reads.
///
/// The human always opens, whichever mark they picked.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    player_mark: Mark,
    bot_mark: Mark,
    difficulty: Difficulty,
    current_mark: Mark,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl TicTacToeGameState {
    pub fn new(player_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            player_mark,
            bot_mark: player_mark.opponent(),
            difficulty,
            current_mark: player_mark,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_player_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.player_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Result from the human's side, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::Won(mark) if mark == self.player_mark => Some(GameOutcome::Win),
            GameStatus::Won(_) => Some(GameOutcome::Loss),
        }
    }

    /// Human move.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus> {
        self.apply_move(index, self.player_mark)
    }

    /// Asks the engine for the bot's move and applies it. Returns the chosen cell.
    pub fn play_bot_move<R>(&mut self, rng: &mut R) -> Result<usize>
    where
        R: MoveRandom + ?Sized,
    {
        self.ensure_turn(self.bot_mark)?;
        let index = choose_move(
            &self.board,
            self.difficulty,
            self.bot_mark,
            self.player_mark,
            rng,
        )?;
        self.apply_move(index, self.bot_mark)?;
        Ok(index)
    }

    /// The cell the bot would take if it moved on the current board. Nothing is applied.
    pub fn peek_bot_move<R>(&self, rng: &mut R) -> Result<usize>
    where
        R: MoveRandom + ?Sized,
    {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        choose_move(
            &self.board,
            self.difficulty,
            self.bot_mark,
            self.player_mark,
            rng,
        )
    }

    /// Rolls back to just before the human's most recent move, dropping the
    /// bot's reply as well when there is one.
    pub fn undo(&mut self) -> Result<()> {
        let Some(last_player_move) = self
            .history
            .iter()
            .rposition(|record| record.mark == self.player_mark)
        else {
            return Err(EngineError::NothingToUndo);
        };

        self.history.truncate(last_player_move);
        self.rebuild_board();
        self.current_mark = self.player_mark;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.rebuild_board();
        self.current_mark = self.player_mark;
    }

    /// Switching difficulty restarts the match.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    fn ensure_turn(&self, mark: Mark) -> Result<()> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.current_mark != mark {
            return Err(EngineError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameStatus> {
        self.ensure_turn(mark)?;
        self.board.place(index, mark)?;
        self.history.push(MoveRecord { index, mark });

        self.status = game_status(&self.board);
        if self.status == GameStatus::InProgress {
            self.current_mark = mark.opponent();
        }
        Ok(self.status)
    }

    fn rebuild_board(&mut self) {
        let mut board = Board::new();
        for record in &self.history {
            board.set(record.index, record.mark);
        }
        self.board = board;
        self.status = game_status(&self.board);
    }
}
