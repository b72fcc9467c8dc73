use std::io::{self, Write};

use tictactoe_engine::Result;
use tictactoe_engine::tictactoe::{
    Board, Mark, MoveScore, Pruning, SearchReport, check_win, get_available_moves, is_draw,
    search_all,
};

pub struct Analysis {
    pub board: Board,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    pub available_moves: Vec<usize>,
    pub side: Mark,
    pub scores: Vec<MoveScore>,
    pub best: Option<MoveScore>,
    pub nodes_visited: u64,
}

/// Scores every move for `side` (defaults to the side to move with X opening).
/// Finished boards get no scores.
pub fn analyze(board: &Board, side: Option<Mark>) -> Result<Analysis> {
    board.validate()?;

    let side = side.unwrap_or_else(|| board.side_to_move(Mark::X));
    let winner = check_win(board);
    let report = if winner.is_some() {
        SearchReport {
            scores: Vec::new(),
            nodes_visited: 0,
        }
    } else {
        search_all(board, side, side.opponent(), Pruning::AlphaBeta)
    };

    Ok(Analysis {
        board: *board,
        winner,
        is_draw: is_draw(board),
        available_moves: get_available_moves(board),
        side,
        best: report.best(),
        nodes_visited: report.nodes_visited,
        scores: report.scores,
    })
}

pub fn write_report<W: Write>(analysis: &Analysis, output: &mut W) -> io::Result<()> {
    writeln!(output, "Board: {}", analysis.board)?;
    match analysis.winner {
        Some(mark) => writeln!(output, "Winner: {}", mark)?,
        None => writeln!(output, "Winner: none")?,
    }
    writeln!(output, "Full: {}", analysis.is_draw)?;

    let cells: Vec<String> = analysis
        .available_moves
        .iter()
        .map(|index| (index + 1).to_string())
        .collect();
    writeln!(output, "Available: [{}]", cells.join(", "))?;

    if analysis.scores.is_empty() {
        return Ok(());
    }

    writeln!(output, "Scores for {}:", analysis.side)?;
    for score in &analysis.scores {
        writeln!(output, "  cell {}: {:+}", score.index + 1, score.score)?;
    }
    if let Some(best) = analysis.best {
        writeln!(
            output,
            "Best: cell {} (score {:+}, {} nodes)",
            best.index + 1,
            best.score,
            analysis.nodes_visited
        )?;
    }
    Ok(())
}
