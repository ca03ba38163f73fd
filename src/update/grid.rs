//! Grid message handlers (cell toggles, selection, size and mode)

use crate::commands::Cmd;
use crate::editor::{nearest_valid_size, step_size};
use crate::messages::{Direction, GridMsg};
use crate::model::AppModel;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::ToggleCell { row, col } => {
            let size = model.editor.size();
            if row >= size || col >= size {
                return None;
            }
            model.ui.selection = (row, col);
            toggle_at(model, row, col);
            Some(Cmd::Redraw)
        }

        GridMsg::ToggleSelected => {
            if model.editor.size() == 0 {
                return None;
            }
            let (row, col) = model.ui.selection;
            toggle_at(model, row, col);
            Some(Cmd::Redraw)
        }

        GridMsg::MoveSelection(direction) => {
            let size = model.editor.size();
            if size == 0 {
                return None;
            }
            let max = size - 1;
            let (row, col) = model.ui.selection;
            model.ui.selection = match direction {
                Direction::Up => (row.saturating_sub(1), col),
                Direction::Down => ((row + 1).min(max), col),
                Direction::Left => (row, col.saturating_sub(1)),
                Direction::Right => (row, (col + 1).min(max)),
            };
            Some(Cmd::Redraw)
        }

        GridMsg::SetSelection { row, col } => {
            model.ui.selection = (row, col);
            model.ui.clamp_selection(model.editor.size());
            Some(Cmd::Redraw)
        }

        GridMsg::ApplyMazePreset => {
            model.editor.apply_maze_preset();
            let message = model.tr("status.preset_applied");
            model.ui.flash(message);
            Some(Cmd::Redraw)
        }

        GridMsg::ToggleMazeMode => {
            let on = !model.editor.maze_mode();
            set_maze_mode(model, on)
        }

        GridMsg::SetMazeMode(on) => {
            if on == model.editor.maze_mode() {
                return None;
            }
            set_maze_mode(model, on)
        }

        GridMsg::SetSize(size) => resize_grid(model, nearest_valid_size(size)),

        GridMsg::StepSize(steps) => {
            let size = step_size(model.editor.size(), steps);
            resize_grid(model, size)
        }
    }
}

fn toggle_at(model: &mut AppModel, row: usize, col: usize) {
    if model.editor.toggle_cell(row, col) {
        tracing::debug!(
            "Cell ({}, {}) is now {:?}",
            row,
            col,
            model.editor.cell(row, col)
        );
    } else {
        tracing::debug!("Cell ({}, {}) is locked", row, col);
    }
}

fn set_maze_mode(model: &mut AppModel, on: bool) -> Option<Cmd> {
    model.editor.set_maze_mode(on);
    let key = if on {
        "status.maze_mode_on"
    } else {
        "status.maze_mode_off"
    };
    let message = model.tr(key);
    model.ui.flash(message);
    Some(Cmd::Redraw)
}

/// Regenerate at a new size; the same size keeps the current grid
fn resize_grid(model: &mut AppModel, size: usize) -> Option<Cmd> {
    if size == model.editor.size() {
        return None;
    }
    tracing::info!("Grid size {} → {}", model.editor.size(), size);
    model.editor.set_size(size);
    model.ui.clamp_selection(size);
    Some(Cmd::Redraw)
}
