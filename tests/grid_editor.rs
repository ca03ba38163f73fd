//! Grid editor behavior tests
//!
//! Regeneration, toggling, the maze preset and export through `GridEditor`.

mod common;

use common::parse_literal;
use mazegrid::editor::{GridEditor, MAX_SIZE, MIN_SIZE, SIZE_STEP};
use mazegrid::grid::{is_border, CellCode};

fn valid_sizes() -> impl Iterator<Item = usize> {
    (MIN_SIZE..=MAX_SIZE).step_by(SIZE_STEP)
}

// ========================================================================
// Regeneration
// ========================================================================

#[test]
fn test_regenerate_all_sizes_and_modes() {
    for size in valid_sizes() {
        for maze_mode in [false, true] {
            let editor = GridEditor::new(size, maze_mode);
            for (row, col, cell) in editor.grid().iter_cells() {
                let expected = if is_border(size, row, col)
                    || (maze_mode && row % 2 == 0 && col % 2 == 0)
                {
                    CellCode::Wall
                } else {
                    CellCode::Empty
                };
                assert_eq!(
                    cell, expected,
                    "size {} maze {} at ({}, {})",
                    size, maze_mode, row, col
                );
            }
            assert_eq!(editor.grid().size(), size);
            assert!(editor.check_invariants().is_ok());
        }
    }
}

#[test]
fn test_size_change_discards_edits() {
    let mut editor = GridEditor::new(7, false);
    editor.toggle_cell(3, 3);
    editor.set_size(9);
    assert_eq!(editor.grid().count(CellCode::Primary), 0);

    editor.toggle_cell(3, 3);
    editor.set_size(9);
    assert_eq!(editor.cell(3, 3), Some(CellCode::Empty));
}

#[test]
fn test_mode_change_discards_edits() {
    let mut editor = GridEditor::new(7, false);
    editor.toggle_cell(1, 1);
    editor.toggle_cell(1, 1);
    editor.toggle_maze_mode();
    assert_eq!(editor.grid().count(CellCode::Secondary), 0);
    assert_eq!(editor.cell(2, 2), Some(CellCode::Wall));

    editor.set_maze_mode(false);
    assert_eq!(editor.cell(2, 2), Some(CellCode::Empty));
}

#[test]
fn test_permissive_sizes_still_regenerate() {
    for size in [0, 1, 2, 4, 6, 27] {
        let editor = GridEditor::new(size, true);
        assert_eq!(editor.grid().size(), size);
        for (row, col, cell) in editor.grid().iter_cells() {
            if is_border(size, row, col) {
                assert_eq!(cell, CellCode::Wall);
            }
        }
    }
}

// ========================================================================
// Toggling
// ========================================================================

#[test]
fn test_toggle_never_changes_border() {
    for maze_mode in [false, true] {
        let mut editor = GridEditor::new(9, maze_mode);
        editor.apply_maze_preset();
        let before = editor.grid().clone();
        for i in 0..9 {
            for (row, col) in [(0, i), (8, i), (i, 0), (i, 8)] {
                assert!(!editor.toggle_cell(row, col));
            }
        }
        assert_eq!(editor.grid(), &before);
    }
}

#[test]
fn test_toggle_never_changes_pillars_in_maze_mode() {
    let mut editor = GridEditor::new(11, true);
    for row in (2..10).step_by(2) {
        for col in (2..10).step_by(2) {
            assert!(!editor.toggle_cell(row, col));
            assert_eq!(editor.cell(row, col), Some(CellCode::Wall));
        }
    }
}

#[test]
fn test_toggle_cycle_returns_to_empty() {
    let mut editor = GridEditor::new(5, false);
    let mut seen = vec![editor.cell(2, 2)];
    for _ in 0..3 {
        assert!(editor.toggle_cell(2, 2));
        seen.push(editor.cell(2, 2));
    }
    assert_eq!(
        seen,
        vec![
            Some(CellCode::Empty),
            Some(CellCode::Primary),
            Some(CellCode::Secondary),
            Some(CellCode::Empty)
        ]
    );
}

#[test]
fn test_toggle_out_of_range_is_noop() {
    let mut editor = GridEditor::new(5, false);
    let before = editor.grid().clone();
    assert!(!editor.toggle_cell(5, 2));
    assert!(!editor.toggle_cell(2, 99));
    assert_eq!(editor.grid(), &before);
}

#[test]
fn test_toggle_leaves_snapshots_independent() {
    let mut editor = GridEditor::new(5, false);
    let snapshot = editor.grid().clone();
    editor.toggle_cell(1, 1);
    assert_eq!(snapshot.get(1, 1), Some(CellCode::Empty));
    assert_eq!(editor.cell(1, 1), Some(CellCode::Primary));
}

// ========================================================================
// Maze preset
// ========================================================================

#[test]
fn test_preset_is_idempotent() {
    for maze_mode in [false, true] {
        let mut editor = GridEditor::new(11, maze_mode);
        editor.toggle_cell(3, 5);
        editor.apply_maze_preset();
        let once = editor.grid().clone();
        editor.apply_maze_preset();
        assert_eq!(editor.grid(), &once);
    }
}

#[test]
fn test_preset_preserves_odd_odd_cells() {
    let mut editor = GridEditor::new(9, false);
    editor.toggle_cell(3, 3);
    editor.toggle_cell(5, 7);
    editor.toggle_cell(5, 7);
    editor.apply_maze_preset();

    assert_eq!(editor.cell(3, 3), Some(CellCode::Primary));
    assert_eq!(editor.cell(5, 7), Some(CellCode::Secondary));
    assert_eq!(editor.cell(1, 1), Some(CellCode::Empty));
    assert_eq!(editor.cell(4, 3), Some(CellCode::Primary));
    assert_eq!(editor.cell(3, 4), Some(CellCode::Primary));
}

#[test]
fn test_preset_keeps_pillars_in_maze_mode() {
    let mut editor = GridEditor::new(7, true);
    editor.apply_maze_preset();
    assert_eq!(editor.cell(2, 2), Some(CellCode::Wall));
    assert_eq!(editor.cell(2, 3), Some(CellCode::Primary));
    assert_eq!(editor.cell(3, 3), Some(CellCode::Empty));
    assert!(editor.check_invariants().is_ok());
}

// ========================================================================
// Size 5 scenario
// ========================================================================

#[test]
fn test_size_five_scenario() {
    let mut editor = GridEditor::new(5, false);
    assert_eq!(
        editor.grid().to_codes(),
        vec![
            vec![-1, -1, -1, -1, -1],
            vec![-1, 0, 0, 0, -1],
            vec![-1, 0, 0, 0, -1],
            vec![-1, 0, 0, 0, -1],
            vec![-1, -1, -1, -1, -1],
        ]
    );

    editor.apply_maze_preset();
    assert_eq!(
        editor.grid().to_codes(),
        vec![
            vec![-1, -1, -1, -1, -1],
            vec![-1, 0, 1, 0, -1],
            vec![-1, 1, 1, 1, -1],
            vec![-1, 0, 1, 0, -1],
            vec![-1, -1, -1, -1, -1],
        ]
    );

    assert_eq!(
        editor.export_grid("game_map"),
        "game_map = [\n    [1, 1, 1, 1, 1],\n    [1, 0, 1, 0, 1],\n    [1, 1, 1, 1, 1],\n    [1, 0, 1, 0, 1],\n    [1, 1, 1, 1, 1]\n]"
    );
}

// ========================================================================
// Export round-trip
// ========================================================================

#[test]
fn test_export_round_trip_preserves_absolute_values() {
    let mut editor = GridEditor::new(7, false);
    editor.toggle_cell(1, 1);
    editor.toggle_cell(2, 3);
    editor.toggle_cell(2, 3);
    editor.toggle_cell(5, 4);

    let (name, rows) = parse_literal(&editor.export_grid("level"));
    assert_eq!(name, "level");

    let expected: Vec<Vec<u8>> = editor
        .grid()
        .to_codes()
        .iter()
        .map(|row| row.iter().map(|v| v.unsigned_abs()).collect())
        .collect();
    assert_eq!(rows, expected);
}

#[test]
fn test_export_loses_wall_sign() {
    let editor = GridEditor::new(5, true);
    let (_, rows) = parse_literal(&editor.export_grid("game_map"));
    assert_eq!(rows[0], vec![1, 1, 1, 1, 1]);
    assert_eq!(rows[2][2], 1);
}
