//! Board module - caller-supplied occupancy grid
//!
//! The board is a width x height grid where each cell is 0 (empty) or any
//! nonzero marker (filled). It is built once per request from caller rows
//! and stays immutable for the duration of a search.
//! Coordinates: (x, y) with x left to right and y top to bottom.

/// The occupancy grid - flat row-major storage for cache locality
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u8>,
}

/// Structural problems with caller-supplied grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    BadDimensions,
    RowCountMismatch,
    RowWidthMismatch,
}

impl BoardError {
    pub fn message(self) -> &'static str {
        match self {
            BoardError::BadDimensions => "width and height must be positive",
            BoardError::RowCountMismatch => "grid row count does not match height",
            BoardError::RowWidthMismatch => "grid row width does not match width",
        }
    }
}

impl Board {
    /// Create an empty board
    pub fn empty(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::BadDimensions);
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
        })
    }

    /// Build a board from caller rows, validating the declared dimensions
    pub fn from_rows(rows: &[Vec<u8>], width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::BadDimensions);
        }
        if rows.len() != height as usize {
            return Err(BoardError::RowCountMismatch);
        }
        if rows.iter().any(|row| row.len() != width as usize) {
            return Err(BoardError::RowWidthMismatch);
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Within bounds and empty
    #[inline]
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx] == 0)
    }

    /// Within bounds and filled
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx] != 0)
    }

    #[inline]
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.width || y < 0 || y >= self.height
    }

    /// Fill a single cell (test scaffolding for building scenarios)
    pub fn fill(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_free_everywhere_in_bounds() {
        let board = Board::empty(10, 20).unwrap();
        assert!(board.is_free(0, 0));
        assert!(board.is_free(9, 19));
        assert!(!board.is_free(-1, 0));
        assert!(!board.is_free(10, 0));
        assert!(!board.is_free(0, 20));
    }

    #[test]
    fn from_rows_validates_shape() {
        let rows = vec![vec![0u8; 10]; 20];
        assert!(Board::from_rows(&rows, 10, 20).is_ok());

        assert_eq!(
            Board::from_rows(&rows, 10, 19),
            Err(BoardError::RowCountMismatch)
        );
        assert_eq!(
            Board::from_rows(&rows, 9, 20),
            Err(BoardError::RowWidthMismatch)
        );
        assert_eq!(
            Board::from_rows(&rows, 0, 0),
            Err(BoardError::BadDimensions)
        );
    }

    #[test]
    fn nonzero_marker_counts_as_occupied() {
        let mut rows = vec![vec![0u8; 4]; 4];
        rows[2][1] = 7;
        let board = Board::from_rows(&rows, 4, 4).unwrap();
        assert!(board.is_occupied(1, 2));
        assert!(!board.is_occupied(1, 1));
        assert!(!board.is_free(1, 2));
    }
}
