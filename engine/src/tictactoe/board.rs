use std::fmt;
use std::str::FromStr;

use super::types::{CELL_COUNT, Mark};
use crate::{EngineError, Result};

/// Nine cells in row-major order. Each cell is empty or holds exactly one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Mark at `index`; `None` for empty cells and out-of-range indices.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// Returns a copy with `mark` placed at `index`. The receiver is untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board> {
        let mut next = *self;
        next.place(index, mark)?;
        Ok(next)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<()> {
        match self.cells.get(index) {
            None => Err(EngineError::OutOfRange { index }),
            Some(Some(_)) => Err(EngineError::CellOccupied { index }),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    // Search-internal make/unmake; callers guarantee `index` is in range.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Checks the alternating-play contract: mark counts differ by at most one.
    pub fn validate(&self) -> Result<()> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(EngineError::MarkImbalance { x_count, o_count });
        }
        Ok(())
    }

    /// Side to move assuming `first` opened the game.
    pub fn side_to_move(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) {
            first.opponent()
        } else {
            first
        }
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

/// Compact form: `X`, `O` and `.` for empty, row-major, no separators.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let symbol = cell.map_or('.', Mark::symbol);
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Accepts `X`/`O` (any case) and `.`, `-`, `_` for empty cells.
/// Whitespace, `/` and `|` are separators and ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for (position, character) in s.chars().enumerate() {
            let cell = match character {
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => {
                    return Err(EngineError::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(EngineError::InvalidBoardLength { got: count });
        }
        Ok(Self { cells })
    }
}
