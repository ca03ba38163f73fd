//! Grid cell codes and the pure grid transformations
//!
//! A [`Grid`] is a square, row-major block of [`CellCode`]s. Every operation
//! here is a pure function from one grid value to the next: callers keep
//! ownership of previous snapshots and can compare them freely.
//!
//! Rules shared by all operations:
//! - the outer border (row 0, last row, col 0, last col) is always a wall
//! - in maze mode every interior cell at an even row AND even column is a wall
//! - neither kind of wall can be changed by a toggle or by the preset

use std::fmt;

/// Value stored in a single grid cell
///
/// The discriminants are the codes the external game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum CellCode {
    /// Border or forced wall (`-1`), never edited directly
    Wall = -1,
    /// Walkable space (`0`)
    #[default]
    Empty = 0,
    /// Primary marker (`1`), an interior wall in the game
    Primary = 1,
    /// Secondary marker (`2`)
    Secondary = 2,
}

impl CellCode {
    /// Raw signed code
    #[inline]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Absolute code as written by the exporter (walls become `1`)
    #[inline]
    pub const fn export_value(self) -> u8 {
        self.code().unsigned_abs()
    }

    /// Parse a raw code, returning `None` for anything outside `-1..=2`
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(CellCode::Wall),
            0 => Some(CellCode::Empty),
            1 => Some(CellCode::Primary),
            2 => Some(CellCode::Secondary),
            _ => None,
        }
    }

    /// Next value of the toggle cycle `Empty → Primary → Secondary → Empty`
    ///
    /// Total over every code. `Wall` is not part of the cycle and maps to
    /// `Primary`, the value reached when a lookup of an unknown code falls
    /// back to the start of the cycle. Guards in [`toggle_cell`] keep walls
    /// from ever reaching this path in normal use.
    pub const fn next_in_cycle(self) -> Self {
        match self {
            CellCode::Empty => CellCode::Primary,
            CellCode::Primary => CellCode::Secondary,
            CellCode::Secondary => CellCode::Empty,
            CellCode::Wall => CellCode::Primary,
        }
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A square grid of cell codes, indexed `cells[row][col]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<CellCode>>,
}

impl Grid {
    /// Build a grid from raw codes, rejecting unknown codes
    pub fn from_codes(rows: &[Vec<i8>]) -> Result<Self, String> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &code)| {
                        CellCode::from_code(code)
                            .ok_or_else(|| format!("Invalid cell code {} at ({}, {})", code, r, c))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// Side length (number of rows)
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at (row, col), or `None` when out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellCode> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<CellCode>] {
        &self.cells
    }

    /// Raw signed codes, row-major
    pub fn to_codes(&self) -> Vec<Vec<i8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Iterate `(row, col, cell)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellCode)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (r, c, cell))
        })
    }

    /// Number of cells holding `code`
    pub fn count(&self, code: CellCode) -> usize {
        self.iter_cells().filter(|&(_, _, cell)| cell == code).count()
    }

    /// Whether every row has exactly `size()` cells
    pub fn is_square(&self) -> bool {
        let n = self.size();
        self.cells.iter().all(|row| row.len() == n)
    }

    /// Cell the game spawns the player on: the first empty interior cell,
    /// scanning rows top to bottom, then columns left to right
    pub fn spawn_point(&self) -> Option<(usize, usize)> {
        let n = self.size();
        if n < 3 {
            return None;
        }
        (1..n - 1)
            .flat_map(|r| (1..n - 1).map(move |c| (r, c)))
            .find(|&(r, c)| self.get(r, c) == Some(CellCode::Empty))
    }

    /// Copy of this grid with one cell replaced
    fn with_cell(&self, row: usize, col: usize, value: CellCode) -> Self {
        let mut next = self.clone();
        next.cells[row][col] = value;
        next
    }
}

/// Whether (row, col) lies on the outer border of a `size × size` grid
#[inline]
pub fn is_border(size: usize, row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row + 1 == size || col + 1 == size
}

/// Whether (row, col) is forced to wall by maze mode
#[inline]
pub fn is_maze_pillar(maze_mode: bool, row: usize, col: usize) -> bool {
    maze_mode && row % 2 == 0 && col % 2 == 0
}

/// Whether a user edit (toggle or preset) may change (row, col)
#[inline]
pub fn is_locked(size: usize, maze_mode: bool, row: usize, col: usize) -> bool {
    is_border(size, row, col) || is_maze_pillar(maze_mode, row, col)
}

/// Build a fresh `size × size` grid for the given mode
///
/// Border cells and (in maze mode) even/even cells are walls, everything
/// else is empty. Any size is accepted; `0` yields an empty grid.
pub fn regenerate(size: usize, maze_mode: bool) -> Grid {
    let cells = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if is_locked(size, maze_mode, row, col) {
                        CellCode::Wall
                    } else {
                        CellCode::Empty
                    }
                })
                .collect()
        })
        .collect();
    Grid { cells }
}

/// Advance one cell through the toggle cycle
///
/// Returns the grid unchanged when the cell is locked or out of range.
pub fn toggle_cell(grid: &Grid, maze_mode: bool, row: usize, col: usize) -> Grid {
    let size = grid.size();
    if is_locked(size, maze_mode, row, col) {
        return grid.clone();
    }
    match grid.get(row, col) {
        Some(current) => grid.with_cell(row, col, current.next_in_cycle()),
        None => grid.clone(),
    }
}

/// Stamp the corridor pattern onto the grid
///
/// Cells with an even row or an even column become `Primary`; odd/odd cells
/// keep whatever the user set. Walls stay walls.
pub fn apply_maze_preset(grid: &Grid, maze_mode: bool) -> Grid {
    let size = grid.size();
    let cells = grid
        .cells
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    if is_locked(size, maze_mode, row, col) {
                        CellCode::Wall
                    } else if row % 2 == 0 || col % 2 == 0 {
                        CellCode::Primary
                    } else {
                        value
                    }
                })
                .collect()
        })
        .collect();
    Grid { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_codes() {
        assert_eq!(CellCode::Wall.code(), -1);
        assert_eq!(CellCode::Empty.code(), 0);
        assert_eq!(CellCode::Primary.code(), 1);
        assert_eq!(CellCode::Secondary.code(), 2);
    }

    #[test]
    fn test_export_value_is_absolute() {
        assert_eq!(CellCode::Wall.export_value(), 1);
        assert_eq!(CellCode::Secondary.export_value(), 2);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(CellCode::from_code(2), Some(CellCode::Secondary));
        assert_eq!(CellCode::from_code(3), None);
        assert_eq!(CellCode::from_code(-2), None);
    }

    #[test]
    fn test_next_in_cycle_maps_wall_to_primary() {
        assert_eq!(CellCode::Wall.next_in_cycle(), CellCode::Primary);
    }

    #[test]
    fn test_is_border() {
        assert!(is_border(5, 0, 2));
        assert!(is_border(5, 4, 2));
        assert!(is_border(5, 2, 0));
        assert!(is_border(5, 2, 4));
        assert!(!is_border(5, 2, 2));
    }

    #[test]
    fn test_regenerate_zero_size() {
        let grid = regenerate(0, false);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_regenerate_size_one_is_single_wall() {
        let grid = regenerate(1, true);
        assert_eq!(grid.to_codes(), vec![vec![-1]]);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let grid = regenerate(5, false);
        assert_eq!(toggle_cell(&grid, false, 9, 9), grid);
    }

    #[test]
    fn test_toggle_leaves_original_snapshot_intact() {
        let before = regenerate(5, false);
        let after = toggle_cell(&before, false, 1, 1);
        assert_eq!(before.get(1, 1), Some(CellCode::Empty));
        assert_eq!(after.get(1, 1), Some(CellCode::Primary));
    }

    #[test]
    fn test_spawn_point_skips_filled_cells() {
        let grid = regenerate(5, false);
        let grid = toggle_cell(&grid, false, 1, 1);
        assert_eq!(grid.spawn_point(), Some((1, 2)));
    }

    #[test]
    fn test_spawn_point_none_when_full() {
        let grid = apply_maze_preset(&regenerate(3, false), false);
        // 3x3 has a single interior cell at (1,1), which is odd/odd
        assert_eq!(grid.spawn_point(), Some((1, 1)));
        let grid = toggle_cell(&grid, false, 1, 1);
        assert_eq!(grid.spawn_point(), None);
    }

    #[test]
    fn test_from_codes_rejects_bad_code() {
        let err = Grid::from_codes(&[vec![-1, 7]]).unwrap_err();
        assert!(err.contains("7"));
    }
}
