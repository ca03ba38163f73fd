//! Default keybindings for the editor
//!
//! The defaults ship as keymap.yaml embedded at compile time, with a
//! hardcoded copy used if the embedded file ever fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::messages::Direction;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, for writing a starter user file
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/mazegrid/keymap.yaml
///
/// User bindings with `command: Unbound` will remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - If the user binding's command is `Unbound`, matching base bindings are removed
/// - If a base binding has the same keystroke, it is replaced
/// - Otherwise the user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.is_unbind() {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let none = Modifiers::NONE;

    vec![
        // Selection
        bind(KeyCode::Arrow(Direction::Up), none, Command::MoveSelectionUp),
        bind(KeyCode::Arrow(Direction::Down), none, Command::MoveSelectionDown),
        bind(KeyCode::Arrow(Direction::Left), none, Command::MoveSelectionLeft),
        bind(KeyCode::Arrow(Direction::Right), none, Command::MoveSelectionRight),
        bind(KeyCode::Char('w'), none, Command::MoveSelectionUp),
        bind(KeyCode::Char('s'), none, Command::MoveSelectionDown),
        bind(KeyCode::Char('a'), none, Command::MoveSelectionLeft),
        bind(KeyCode::Char('d'), none, Command::MoveSelectionRight),
        bind(KeyCode::Space, none, Command::ToggleSelected),
        bind(KeyCode::Enter, none, Command::ToggleSelected),
        // Grid
        bind(KeyCode::Char('m'), none, Command::ToggleMazeMode),
        bind(KeyCode::Char('p'), none, Command::ApplyMazePreset),
        bind(KeyCode::Char('+'), none, Command::GrowGrid),
        bind(KeyCode::Char('='), none, Command::GrowGrid),
        bind(KeyCode::NumpadAdd, none, Command::GrowGrid),
        bind(KeyCode::Char('-'), none, Command::ShrinkGrid),
        bind(KeyCode::NumpadSubtract, none, Command::ShrinkGrid),
        // Export
        bind(KeyCode::Char('e'), cmd, Command::ExportFile),
        bind(KeyCode::Char('p'), cmd, Command::ExportLog),
        // App
        bind(KeyCode::Char('l'), none, Command::CycleLocale),
        bind(KeyCode::Char('q'), cmd, Command::Quit),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
