//! The grid editor: size, maze mode and the current grid
//!
//! Setters for `size` and `maze_mode` call [`regenerate`] themselves and
//! replace the grid wholesale, so every edit is dropped on a size or mode
//! change. Cell edits replace the grid value with a new one.

use crate::export;
use crate::grid::{self, CellCode, Grid};

/// Smallest size offered by the size control
pub const MIN_SIZE: usize = 5;
/// Largest size offered by the size control
pub const MAX_SIZE: usize = 25;
/// Step of the size control (keeps sizes odd)
pub const SIZE_STEP: usize = 2;
/// Size used when nothing else is configured
pub const DEFAULT_SIZE: usize = 15;

/// Whether `size` is a value the size control can produce
pub fn is_valid_size(size: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&size) && size % 2 == 1
}

/// Nearest size the control can produce (clamped, even values rounded up)
pub fn nearest_valid_size(size: usize) -> usize {
    let clamped = size.clamp(MIN_SIZE, MAX_SIZE);
    if clamped % 2 == 0 {
        (clamped + 1).min(MAX_SIZE)
    } else {
        clamped
    }
}

/// Result of moving the size control one step
///
/// Mirrors a numeric input with `min`, `max` and `step`: stepping past
/// either bound stays at the bound.
pub fn step_size(current: usize, steps: i32) -> usize {
    let base = nearest_valid_size(current) as i64;
    let next = base + steps as i64 * SIZE_STEP as i64;
    next.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as usize
}

/// Editor state for one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEditor {
    size: usize,
    maze_mode: bool,
    grid: Grid,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, false)
    }
}

impl GridEditor {
    /// Create an editor with a freshly generated grid
    pub fn new(size: usize, maze_mode: bool) -> Self {
        Self {
            size,
            maze_mode,
            grid: grid::regenerate(size, maze_mode),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn maze_mode(&self) -> bool {
        self.maze_mode
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Option<CellCode> {
        self.grid.get(row, col)
    }

    /// Whether (row, col) can be changed by a click
    pub fn is_editable(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && !grid::is_locked(self.size, self.maze_mode, row, col)
    }

    /// Rebuild the grid from the current size and mode, dropping all edits
    pub fn regenerate(&mut self) -> &Grid {
        self.grid = grid::regenerate(self.size, self.maze_mode);
        &self.grid
    }

    /// Set the side length and regenerate
    ///
    /// No validation happens here: even and out-of-range sizes are accepted
    /// and produce a grid of exactly that size. The size control and the
    /// CLI keep users inside `MIN_SIZE..=MAX_SIZE`.
    pub fn set_size(&mut self, size: usize) -> &Grid {
        self.size = size;
        self.regenerate()
    }

    /// Set maze mode and regenerate, dropping all edits
    pub fn set_maze_mode(&mut self, maze_mode: bool) -> &Grid {
        self.maze_mode = maze_mode;
        self.regenerate()
    }

    /// Flip maze mode and regenerate
    pub fn toggle_maze_mode(&mut self) -> &Grid {
        self.set_maze_mode(!self.maze_mode)
    }

    /// Advance one cell through the toggle cycle
    ///
    /// Returns `true` when the cell changed.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        let next = grid::toggle_cell(&self.grid, self.maze_mode, row, col);
        let changed = next != self.grid;
        self.grid = next;
        changed
    }

    /// Overlay the corridor pattern without regenerating
    pub fn apply_maze_preset(&mut self) -> &Grid {
        self.grid = grid::apply_maze_preset(&self.grid, self.maze_mode);
        &self.grid
    }

    /// Python literal for the current grid
    pub fn export_grid(&self, variable_name: &str) -> String {
        export::to_python_literal(&self.grid, variable_name)
    }

    /// Check the structural invariants of the editor state
    ///
    /// The grid must be `size × size` and every locked cell must be a wall.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.grid.size() != self.size || !self.grid.is_square() {
            return Err(format!(
                "grid is {} rows for size {} (square: {})",
                self.grid.size(),
                self.size,
                self.grid.is_square()
            ));
        }
        for (row, col, cell) in self.grid.iter_cells() {
            if grid::is_locked(self.size, self.maze_mode, row, col) && cell != CellCode::Wall {
                return Err(format!("locked cell ({}, {}) is {:?}", row, col, cell));
            }
        }
        Ok(())
    }
}
