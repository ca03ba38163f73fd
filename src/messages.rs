//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::export::{ExportArtifact, ExportTarget};
use crate::layout::HitTarget;

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Grid messages (cell edits, size and mode changes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    /// Advance a cell through the toggle cycle (mouse click)
    ToggleCell { row: usize, col: usize },
    /// Toggle the cell under the keyboard selection
    ToggleSelected,
    /// Move the keyboard selection one cell
    MoveSelection(Direction),
    /// Put the keyboard selection on a cell
    SetSelection { row: usize, col: usize },
    /// Overlay the corridor pattern
    ApplyMazePreset,
    /// Flip maze mode (regenerates the grid)
    ToggleMazeMode,
    /// Set maze mode (regenerates the grid)
    SetMazeMode(bool),
    /// Set the size from the size control (snapped to a valid size)
    SetSize(usize),
    /// Move the size control by whole steps (negative = smaller)
    StepSize(i32),
}

/// UI messages (status bar, pointer feedback)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
    /// Expire the transient message if its time is up
    Tick,
    /// Pointer moved over a target (or off every target)
    Hover(Option<HitTarget>),
    /// Mouse button went down over a target
    Press(Option<HitTarget>),
    /// Mouse button released
    Release,
}

/// Application-level messages (export, locale, window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Export the grid to a target
    Export(ExportTarget),
    /// File export finished
    ExportCompleted(Result<ExportArtifact, String>),
    /// Switch to a locale by code
    SetLocale(String),
    /// Switch to the next available locale
    CycleLocale,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Grid messages (cells, size, maze mode)
    Grid(GridMsg),
    /// UI messages (status, hover)
    Ui(UiMsg),
    /// App messages (export, locale, window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cell toggle message
    pub fn toggle_cell(row: usize, col: usize) -> Self {
        Msg::Grid(GridMsg::ToggleCell { row, col })
    }

    /// Create a selection movement message
    pub fn move_selection(direction: Direction) -> Self {
        Msg::Grid(GridMsg::MoveSelection(direction))
    }

    /// Create an export message
    pub fn export(target: ExportTarget) -> Self {
        Msg::App(AppMsg::Export(target))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
