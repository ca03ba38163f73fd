//! Command enum representing all executable editor actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use crate::export::ExportTarget;
use crate::messages::{AppMsg, Direction, GridMsg, Msg};

/// All editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Selection
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionLeft,
    MoveSelectionRight,
    /// Advance the selected cell through the toggle cycle
    ToggleSelected,

    // Grid
    ToggleMazeMode,
    ApplyMazePreset,
    /// One size step larger (regenerates)
    GrowGrid,
    /// One size step smaller (regenerates)
    ShrinkGrid,

    // Export
    ExportFile,
    ExportLog,

    // App
    CycleLocale,
    Quit,

    /// Removes a default binding in user keymaps
    Unbound,
}

/// Names used for commands in keymap files
const NAMES: &[(&str, Command)] = &[
    ("MoveSelectionUp", Command::MoveSelectionUp),
    ("MoveSelectionDown", Command::MoveSelectionDown),
    ("MoveSelectionLeft", Command::MoveSelectionLeft),
    ("MoveSelectionRight", Command::MoveSelectionRight),
    ("ToggleSelected", Command::ToggleSelected),
    ("ToggleMazeMode", Command::ToggleMazeMode),
    ("ApplyMazePreset", Command::ApplyMazePreset),
    ("GrowGrid", Command::GrowGrid),
    ("ShrinkGrid", Command::ShrinkGrid),
    ("ExportFile", Command::ExportFile),
    ("ExportLog", Command::ExportLog),
    ("CycleLocale", Command::CycleLocale),
    ("Quit", Command::Quit),
    ("Unbound", Command::Unbound),
];

impl Command {
    /// Look up a command by its keymap file name
    pub fn from_name(name: &str) -> Option<Command> {
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    /// Convert this command to the messages that perform it
    pub fn to_msgs(self) -> Vec<Msg> {
        match self {
            Command::MoveSelectionUp => vec![Msg::move_selection(Direction::Up)],
            Command::MoveSelectionDown => vec![Msg::move_selection(Direction::Down)],
            Command::MoveSelectionLeft => vec![Msg::move_selection(Direction::Left)],
            Command::MoveSelectionRight => vec![Msg::move_selection(Direction::Right)],
            Command::ToggleSelected => vec![Msg::Grid(GridMsg::ToggleSelected)],
            Command::ToggleMazeMode => vec![Msg::Grid(GridMsg::ToggleMazeMode)],
            Command::ApplyMazePreset => vec![Msg::Grid(GridMsg::ApplyMazePreset)],
            Command::GrowGrid => vec![Msg::Grid(GridMsg::StepSize(1))],
            Command::ShrinkGrid => vec![Msg::Grid(GridMsg::StepSize(-1))],
            Command::ExportFile => vec![Msg::export(ExportTarget::File)],
            Command::ExportLog => vec![Msg::export(ExportTarget::Log)],
            Command::CycleLocale => vec![Msg::App(AppMsg::CycleLocale)],
            Command::Quit => vec![Msg::App(AppMsg::Quit)],
            Command::Unbound => vec![],
        }
    }

    /// Human-readable name for logs and help output
    pub fn display_name(self) -> &'static str {
        match self {
            Command::MoveSelectionUp => "Move Selection Up",
            Command::MoveSelectionDown => "Move Selection Down",
            Command::MoveSelectionLeft => "Move Selection Left",
            Command::MoveSelectionRight => "Move Selection Right",
            Command::ToggleSelected => "Toggle Selected Cell",
            Command::ToggleMazeMode => "Toggle Maze Mode",
            Command::ApplyMazePreset => "Apply Maze Preset",
            Command::GrowGrid => "Grow Grid",
            Command::ShrinkGrid => "Shrink Grid",
            Command::ExportFile => "Export maze.py",
            Command::ExportLog => "Print Grid to Log",
            Command::CycleLocale => "Next Language",
            Command::Quit => "Quit",
            Command::Unbound => "Unbound",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_msgs_movement() {
        let msgs = Command::MoveSelectionLeft.to_msgs();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(
            msgs[0],
            Msg::Grid(GridMsg::MoveSelection(Direction::Left))
        ));
    }

    #[test]
    fn test_command_to_msgs_size() {
        assert!(matches!(
            Command::GrowGrid.to_msgs()[0],
            Msg::Grid(GridMsg::StepSize(1))
        ));
        assert!(matches!(
            Command::ShrinkGrid.to_msgs()[0],
            Msg::Grid(GridMsg::StepSize(-1))
        ));
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Command::from_name("GrowGrid"), Some(Command::GrowGrid));
        assert_eq!(Command::from_name("growgrid"), None);
        assert_eq!(Command::from_name("Unbound"), Some(Command::Unbound));
    }

    #[test]
    fn test_command_unbound_empty() {
        assert!(Command::Unbound.to_msgs().is_empty());
    }
}
