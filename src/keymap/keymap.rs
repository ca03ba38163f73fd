//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (index into bindings); later bindings win
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.insert(binding);
        }
        keymap
    }

    fn insert(&mut self, binding: Keybinding) {
        if binding.is_unbind() {
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    /// Command bound to a keystroke, if any
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    /// All keystrokes bound to a command
    pub fn bindings_for_command(&self, command: Command) -> Vec<Keystroke> {
        self.bindings
            .iter()
            .filter(|b| b.command == command && self.lookup(&b.keystroke) == Some(command))
            .map(|b| b.keystroke)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_lookup() {
        let stroke = Keystroke::key(KeyCode::Space);
        let keymap = Keymap::with_bindings(vec![Keybinding::new(stroke, Command::ToggleSelected)]);
        assert_eq!(keymap.lookup(&stroke), Some(Command::ToggleSelected));
        assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_later_binding_wins() {
        let stroke = Keystroke::new(KeyCode::Char('e'), Modifiers::CTRL);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(stroke, Command::ExportFile),
            Keybinding::new(stroke, Command::ExportLog),
        ]);
        assert_eq!(keymap.lookup(&stroke), Some(Command::ExportLog));
        assert_eq!(keymap.len(), 1);
        assert!(keymap.bindings_for_command(Command::ExportFile).is_empty());
    }
}
