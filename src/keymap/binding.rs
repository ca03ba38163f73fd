//! A keystroke bound to a command

use super::command::Command;
use super::types::Keystroke;

/// One keymap entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// Whether a user entry with this binding removes a default
    pub fn is_unbind(&self) -> bool {
        self.command == Command::Unbound
    }
}
