use super::cell::Cell;
use super::error::Error;
use crate::Column;
use crate::Player;
use crate::Row;
use crate::DEFAULT_COLS;
use crate::DEFAULT_ROWS;

/// the playing field. cells are stored row-major with row 0 at the top,
/// matching the wire encoding. gravity invariant: the occupied cells of a
/// column always form a contiguous block ending at the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl Board {
    pub fn empty(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions(rows, cols));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// deserialize the engine's field encoding: rows joined by ';',
    /// cells within a row joined by ','. both delimiters normalize to one
    /// flat separator before numeric parsing.
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self, Error> {
        let mut board = Self::empty(rows, cols)?;
        let tokens = text
            .split([';', ','])
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        if tokens.len() != rows * cols {
            return Err(Error::MalformedField(format!(
                "expected {} cells, got {}",
                rows * cols,
                tokens.len()
            )));
        }
        for (i, token) in tokens.iter().enumerate() {
            let n = token
                .parse::<u8>()
                .map_err(|_| Error::MalformedField(format!("bad cell token: {:?}", token)))?;
            board.cells[i] = Cell::from(n);
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, row: Row, col: Column) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// drop a disc into a column. it lands in the lowest empty row,
    /// which is returned. the board is untouched on error.
    pub fn place(&mut self, col: Column, player: Player) -> Result<Row, Error> {
        if col >= self.cols {
            return Err(Error::InvalidColumn(col));
        }
        match (0..self.rows).rev().find(|r| self.get(*r, col).is_empty()) {
            Some(row) => {
                self.cells[row * self.cols + col] = Cell::Disc(player);
                Ok(row)
            }
            None => Err(Error::ColumnFull(col)),
        }
    }

    /// probe a drop without touching the canonical board. the policy uses
    /// this to test candidate columns independently before committing.
    pub fn simulate(&self, col: Column, player: Player) -> Result<Self, Error> {
        let mut probe = self.clone();
        probe.place(col, player)?;
        Ok(probe)
    }

    pub fn is_column_full(&self, col: Column) -> bool {
        !self.get(0, col).is_empty()
    }

    pub fn legal_columns(&self) -> Vec<Column> {
        (0..self.cols).filter(|c| !self.is_column_full(*c)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|c| self.is_column_full(c))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ";")?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
        }
        Ok(())
    }
}
