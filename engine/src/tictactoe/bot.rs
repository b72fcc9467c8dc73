//! Exhaustive minimax over the 3×3 game tree.
//!
//! Scores are from the bot's side: a bot win at depth `d` is `WIN_SCORE - d`,
//! a player win is `d - WIN_SCORE`, a full board without a winner is `0`.
//! Depth counts plies after the root move, so quicker wins and slower losses
//! score higher.

use super::board::{Board, get_available_moves};
use super::types::Mark;
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    AlphaBeta,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub index: usize,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: usize,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Optimal move for `bot_mark`, or `None` on a full board.
///
/// Ties go to the lowest index.
pub fn best_move(board: &Board, bot_mark: Mark, player_mark: Mark) -> Option<usize> {
    search(board, bot_mark, player_mark, Pruning::AlphaBeta).map(|outcome| outcome.best_move)
}

/// Every root score from one pass over the tree, with the node count of that pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub scores: Vec<MoveScore>,
    pub nodes_visited: u64,
}

impl SearchReport {
    /// Highest-scoring move; ties go to the lowest index.
    pub fn best(&self) -> Option<MoveScore> {
        let mut best: Option<MoveScore> = None;
        for &candidate in &self.scores {
            if best.is_none_or(|current| candidate.score > current.score) {
                best = Some(candidate);
            }
        }
        best
    }

    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.best().map(|best| SearchOutcome {
            best_move: best.index,
            score: best.score,
            nodes_visited: self.nodes_visited,
        })
    }
}

/// Scores every available move in ascending index order.
pub fn search_all(
    board: &Board,
    bot_mark: Mark,
    player_mark: Mark,
    pruning: Pruning,
) -> SearchReport {
    let mut searcher = Searcher::new(board, bot_mark, player_mark, pruning);
    let scores = searcher.root_scores();
    SearchReport {
        scores,
        nodes_visited: searcher.nodes_visited,
    }
}

pub fn search(
    board: &Board,
    bot_mark: Mark,
    player_mark: Mark,
    pruning: Pruning,
) -> Option<SearchOutcome> {
    search_all(board, bot_mark, player_mark, pruning).outcome()
}

/// Root score of every available move, in ascending index order.
pub fn score_moves(
    board: &Board,
    bot_mark: Mark,
    player_mark: Mark,
    pruning: Pruning,
) -> Vec<MoveScore> {
    search_all(board, bot_mark, player_mark, pruning).scores
}

struct Searcher {
    board: Board,
    bot_mark: Mark,
    player_mark: Mark,
    pruning: Pruning,
    nodes_visited: u64,
}

impl Searcher {
    fn new(board: &Board, bot_mark: Mark, player_mark: Mark, pruning: Pruning) -> Self {
        Self {
            board: *board,
            bot_mark,
            player_mark,
            pruning,
            nodes_visited: 0,
        }
    }

    // Each root move gets a fresh (-inf, +inf) window, so every returned
    // score is exact with or without pruning.
    fn root_scores(&mut self) -> Vec<MoveScore> {
        let mut scores = Vec::new();
        for index in get_available_moves(&self.board) {
            self.board.set(index, self.bot_mark);
            let score = self.minimax(0, false, i32::MIN, i32::MAX);
            self.board.clear(index);
            scores.push(MoveScore { index, score });
        }
        scores
    }

    fn minimax(&mut self, depth: i32, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes_visited += 1;

        match check_win(&self.board) {
            Some(winner) if winner == self.bot_mark => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None => {}
        }
        if self.board.is_full() {
            return 0;
        }

        let moves = get_available_moves(&self.board);

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for index in moves {
                self.board.set(index, self.bot_mark);
                let eval = self.minimax(depth + 1, false, alpha, beta);
                self.board.clear(index);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for index in moves {
                self.board.set(index, self.player_mark);
                let eval = self.minimax(depth + 1, true, alpha, beta);
                self.board.clear(index);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{CELL_COUNT, GameStatus, game_status};
    use std::collections::HashSet;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    /// Every position reachable from an empty board with X opening, terminal ones included.
    fn reachable_positions() -> Vec<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::new()];
        while let Some(b) = stack.pop() {
            if !seen.insert(b) {
                continue;
            }
            if game_status(&b).is_over() {
                continue;
            }
            let mover = b.side_to_move(Mark::X);
            for index in get_available_moves(&b) {
                stack.push(b.with_mark(index, mover).unwrap());
            }
        }
        seen.into_iter().collect()
    }

    #[test]
    fn test_reachable_position_count() {
        assert_eq!(reachable_positions().len(), 5478);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let b = board("XX.O.....");
        assert_eq!(best_move(&b, Mark::O, Mark::X), Some(2));

        let b = board("O.X.X....");
        assert_eq!(best_move(&b, Mark::O, Mark::X), Some(6));
    }

    #[test]
    fn test_own_win_beats_blocking() {
        // Both rows are one short; completing 3-4-5 ends the game before X can use 2.
        let b = board("XX.OO....");
        let outcome = search(&b, Mark::O, Mark::X, Pruning::AlphaBeta).unwrap();
        assert_eq!(outcome.best_move, 5);
        assert_eq!(outcome.score, WIN_SCORE);
    }

    #[test]
    fn test_prefers_immediate_win_over_block() {
        let b = board("XX.OO....");
        let outcome = search(&b, Mark::X, Mark::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(outcome.best_move, 2);
        assert_eq!(outcome.score, WIN_SCORE);
    }

    #[test]
    fn test_depth_prefers_faster_win() {
        // X can win at once on 2; other moves may still win later but score lower.
        let b = board("XX.OO.O..");
        let scores = score_moves(&b, Mark::X, Mark::O, Pruning::Disabled);
        let win_now = scores.iter().find(|s| s.index == 2).unwrap();
        assert_eq!(win_now.score, WIN_SCORE);
        assert!(scores.iter().all(|s| s.index == 2 || s.score < WIN_SCORE));
    }

    #[test]
    fn test_forced_loss_scores_by_depth() {
        // O to move, X has two open threats (2 and 6); every move loses,
        // but the loss arrives one ply after O's move.
        let b = board("XX.XO...O");
        let scores = score_moves(&b, Mark::O, Mark::X, Pruning::Disabled);
        assert!(scores.iter().all(|s| s.score < 0));
        let best = search(&b, Mark::O, Mark::X, Pruning::AlphaBeta).unwrap();
        assert_eq!(best.score, 1 - WIN_SCORE);
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        // Every opening move draws under perfect play.
        let scores = score_moves(&Board::new(), Mark::X, Mark::O, Pruning::AlphaBeta);
        assert!(scores.iter().all(|s| s.score == 0));
        assert_eq!(best_move(&Board::new(), Mark::X, Mark::O), Some(0));
    }

    #[test]
    fn test_search_all_agrees_with_search() {
        let b = board("X...O....");
        let report = search_all(&b, Mark::X, Mark::O, Pruning::AlphaBeta);
        let outcome = search(&b, Mark::X, Mark::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(report.scores, score_moves(&b, Mark::X, Mark::O, Pruning::AlphaBeta));
        assert_eq!(report.nodes_visited, outcome.nodes_visited);
        assert_eq!(report.outcome(), Some(outcome));
        assert_eq!(search_all(&board("XOXXOOOXX"), Mark::X, Mark::O, Pruning::AlphaBeta).best(), None);
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        assert_eq!(best_move(&board("XOXXOOOXX"), Mark::X, Mark::O), None);
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let b = board("X...O....");
        let before = b;
        let _ = search(&b, Mark::X, Mark::O, Pruning::Disabled);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let pruned = search(&Board::new(), Mark::X, Mark::O, Pruning::AlphaBeta).unwrap();
        let full = search(&Board::new(), Mark::X, Mark::O, Pruning::Disabled).unwrap();
        assert!(pruned.nodes_visited < full.nodes_visited);
        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.score, full.score);
    }

    #[test]
    fn test_pruning_matches_full_search_everywhere() {
        for b in reachable_positions() {
            if game_status(&b).is_over() {
                continue;
            }
            let mover = b.side_to_move(Mark::X);
            let other = mover.opponent();

            let pruned = score_moves(&b, mover, other, Pruning::AlphaBeta);
            let full = score_moves(&b, mover, other, Pruning::Disabled);
            assert_eq!(pruned, full, "score mismatch on {}", b);

            let pruned_best = search(&b, mover, other, Pruning::AlphaBeta).unwrap();
            let full_best = search(&b, mover, other, Pruning::Disabled).unwrap();
            assert_eq!(pruned_best.best_move, full_best.best_move, "move mismatch on {}", b);
            assert_eq!(pruned_best.score, full_best.score);
        }
    }

    #[test]
    fn test_best_move_points_at_empty_cell() {
        for b in reachable_positions() {
            if game_status(&b).is_over() {
                continue;
            }
            let mover = b.side_to_move(Mark::X);
            let index = best_move(&b, mover, mover.opponent()).unwrap();
            assert!(index < CELL_COUNT);
            assert!(b.is_empty_at(index), "occupied move {} on {}", index, b);
        }
    }

    #[test]
    fn test_best_move_self_play_draws() {
        let mut b = Board::new();
        let mut mover = Mark::X;
        while !game_status(&b).is_over() {
            let index = best_move(&b, mover, mover.opponent()).unwrap();
            b.place(index, mover).unwrap();
            mover = mover.opponent();
        }
        assert_eq!(game_status(&b), GameStatus::Draw);
    }
}
