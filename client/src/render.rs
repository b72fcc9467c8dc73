use tictactoe_engine::tictactoe::{BOARD_SIZE, Board};

/// Text grid; empty cells show their 1-based number. Highlighted cells are
/// bracketed when occupied and shown as `*` when empty.
pub fn render_board(board: &Board, highlight: &[usize]) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let highlighted = highlight.contains(&index);
                match board.get(index) {
                    Some(mark) if highlighted => format!("[{}]", mark),
                    Some(mark) => format!(" {} ", mark),
                    None if highlighted => " * ".to_string(),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}
