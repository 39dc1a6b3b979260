use std::fmt;

use rand::Rng;

use crate::cell::Cell;
use crate::pattern::StructurePattern;

/// How `Grid::place_structure` treats the alive cells of a pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// Turn covered cells on. Never turns a cell off.
    #[default]
    Paint,
    /// Turn covered cells off. Never turns a cell on.
    Erase,
}

impl Brush {
    pub fn is_paint(self) -> bool {
        self == Brush::Paint
    }
}

impl From<bool> for Brush {
    fn from(paint: bool) -> Self {
        if paint {
            Brush::Paint
        } else {
            Brush::Erase
        }
    }
}

/// A dense, bounded rectangle of cells indexed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// Zero rows or columns yield an empty grid on which every operation is a no-op.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![vec![Cell::DEAD; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether a signed coordinate lies inside the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    /// Panics if the coordinate is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Panics if the coordinate is out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].state()
    }

    /// Panics if the coordinate is out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col].set_state(alive);
    }

    /// Flip a single cell and return its new state. Panics if the coordinate is out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row][col];
        cell.set_state(!cell.state());
        cell.state()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.state())
            .count()
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_state(false);
        }
    }

    /// Give every cell an independent 50% chance of being alive.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.randomize_with(&mut rng);
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_state(rng.random_bool(0.5));
        }
    }

    /// Rebuild the grid at a new size. Cells in the overlapping region keep their state.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        let mut resized = Grid::new(rows, columns);
        for (row_index, row) in self.cells.iter().enumerate().take(rows) {
            for (col_index, cell) in row.iter().enumerate().take(columns) {
                resized.cells[row_index][col_index] = *cell;
            }
        }
        *self = resized;
    }

    /// Overlay the alive cells of `pattern` with its top-left corner at `(row, column)`.
    ///
    /// Targets that fall outside the grid are skipped. Dead pattern cells leave the grid untouched.
    pub fn place_structure(&mut self, pattern: &StructurePattern, row: isize, column: isize, brush: Brush) {
        for (i, j) in pattern.alive_offsets() {
            let (Some(target_row), Some(target_col)) =
                (row.checked_add(i as isize), column.checked_add(j as isize))
            else {
                continue;
            };
            if !self.contains(target_row, target_col) {
                continue;
            }

            let cell = &mut self.cells[target_row as usize][target_col as usize];
            match brush {
                Brush::Paint if !cell.state() => cell.set_state(true),
                Brush::Erase if cell.state() => cell.set_state(false),
                _ => {}
            }
        }
    }

    /// Advance the grid by one generation.
    ///
    /// Returns `true` when no cell changed, i.e. the grid is a fixed point.
    pub fn advance(&mut self) -> bool {
        let mut next_cells = vec![vec![Cell::DEAD; self.columns]; self.rows];
        let mut changes = 0usize;

        for row in 0..self.rows {
            for col in 0..self.columns {
                let alive_neighbors = self.alive_neighbors(row, col);
                let is_alive = self.cells[row][col].state();

                let next = match (is_alive, alive_neighbors) {
                    (true, 2..=3) => true, // Survives
                    (false, 3) => true,    // Becomes alive
                    _ => false,            // Dies or remains dead
                };

                if next != is_alive {
                    changes += 1;
                }
                next_cells[row][col] = Cell::new(next);
            }
        }

        self.cells = next_cells;
        changes == 0
    }

    /// Count the alive cells among the eight surrounding positions.
    /// Positions past the edge count as dead.
    fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let neighbor_row = row as isize + dr;
                let neighbor_col = col as isize + dc;
                if self.contains(neighbor_row, neighbor_col)
                    && self.cells[neighbor_row as usize][neighbor_col as usize].state()
                {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
