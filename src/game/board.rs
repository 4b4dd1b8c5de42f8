use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column played when an agent has nothing better to go on.
pub const CENTER: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Directions scanned for a win through the last placed piece, as
/// (column step, row step). Vertical is handled separately.
const HORIZONTAL: (isize, isize) = (1, 0);
const DIAGONAL_UP: (isize, isize) = (1, 1);
const DIAGONAL_DOWN: (isize, isize) = (1, -1);

/// The 7x6 grid, stored column-major with row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[col][ROWS - 1] != Cell::Empty
    }

    /// Number of pieces stacked in a column.
    pub fn height(&self, col: usize) -> usize {
        self.cells[col]
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        (0..COLS).map(|col| self.height(col)).sum()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = self.height(col);
        self.cells[col][row] = cell;
        Ok(row)
    }

    /// Remove the topmost piece of a column, returning what was there.
    pub fn lift_piece(&mut self, col: usize) -> Option<Cell> {
        if col >= COLS {
            return None;
        }
        let height = self.height(col);
        if height == 0 {
            return None;
        }
        Some(std::mem::replace(&mut self.cells[col][height - 1], Cell::Empty))
    }

    /// Check if every column has its top cell filled
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (col, row) completes four in a row.
    ///
    /// Only lines through that cell are examined: the row, the three cells
    /// below it, and both diagonals.
    pub fn check_win(&self, col: usize, row: usize) -> bool {
        let cell = self.get(col, row);
        if cell == Cell::Empty {
            return false;
        }

        self.check_line(col, row, HORIZONTAL, cell)
            || self.check_vertical(col, row, cell)
            || self.check_line(col, row, DIAGONAL_UP, cell)
            || self.check_line(col, row, DIAGONAL_DOWN, cell)
    }

    /// Test the four alignments of length 4 along `step` that include
    /// (col, row). Alignments leaving the board are skipped.
    fn check_line(&self, col: usize, row: usize, step: (isize, isize), cell: Cell) -> bool {
        let (dc, dr) = step;
        (0..4isize).any(|offset| {
            (0..4isize).all(|i| {
                let c = col as isize + (i - offset) * dc;
                let r = row as isize + (i - offset) * dr;
                self.cell_at(c, r) == Some(cell)
            })
        })
    }

    /// Check vertical win (down from the position, pieces fall down)
    fn check_vertical(&self, col: usize, row: usize, cell: Cell) -> bool {
        row >= 3 && (row - 3..row).all(|r| self.cells[col][r] == cell)
    }

    fn cell_at(&self, col: isize, row: isize) -> Option<Cell> {
        if (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row) {
            Some(self.cells[col as usize][row as usize])
        } else {
            None
        }
    }

    /// The board reflected left to right.
    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        cells.reverse();
        Board { cells }
    }

    /// Cells in column-major order, each column read bottom to top.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|column| column.iter().copied())
    }

    /// Build a board from columns of cells. Fails with the index of the
    /// first column holding a piece above an empty cell.
    pub fn from_columns(columns: [[Cell; ROWS]; COLS]) -> Result<Board, usize> {
        let floating = columns.iter().position(|column| {
            column
                .iter()
                .skip_while(|&&cell| cell != Cell::Empty)
                .any(|&cell| cell != Cell::Empty)
        });
        match floating {
            Some(col) => Err(col),
            None => Ok(Board { cells: columns }),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
