//! Keymap YAML: `bindings: [{ key, command, platform? }]`
//!
//! Key strings are modifier names and one key joined by `+`, e.g. `cmd+e`,
//! `up`, `numpad_add`. Because `+` is the separator, the `+`/`-` size keys
//! are spelled `plus` and `minus`.

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::messages::Direction;

#[derive(Debug, Deserialize)]
struct KeymapFile {
    bindings: Vec<BindingEntry>,
}

#[derive(Debug, Deserialize)]
struct BindingEntry {
    key: String,
    command: String,
    /// `macos`, `windows` or `linux`; omitted means every platform
    #[serde(default)]
    platform: Option<String>,
}

/// Named keys accepted in key strings, besides single characters
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("up", KeyCode::Arrow(Direction::Up)),
    ("down", KeyCode::Arrow(Direction::Down)),
    ("left", KeyCode::Arrow(Direction::Left)),
    ("right", KeyCode::Arrow(Direction::Right)),
    ("space", KeyCode::Space),
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("plus", KeyCode::Char('+')),
    ("minus", KeyCode::Char('-')),
    ("numpad_add", KeyCode::NumpadAdd),
    ("numpad_subtract", KeyCode::NumpadSubtract),
];

/// Modifier names; `cmd` resolves per platform
fn modifier_named(name: &str) -> Option<Modifiers> {
    Some(match name {
        "cmd" => Modifiers::cmd(),
        "ctrl" => Modifiers::CTRL,
        "shift" => Modifiers::SHIFT,
        "alt" | "option" => Modifiers::ALT,
        "meta" | "super" => Modifiers::META,
        _ => return None,
    })
}

fn key_named(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    NAMED_KEYS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, key)| *key)
}

/// Read and parse a user keymap file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;
    parse_keymap_yaml(&content)
}

/// Parse keymap YAML, skipping entries for other platforms
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let file: KeymapFile =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    file.bindings
        .into_iter()
        .filter(|entry| {
            entry
                .platform
                .as_deref()
                .map_or(true, |p| p == current_platform())
        })
        .map(|entry| {
            let keystroke = parse_key_string(&entry.key)?;
            let command = Command::from_name(&entry.command)
                .ok_or_else(|| KeymapError::InvalidCommand(entry.command.clone()))?;
            Ok(Keybinding::new(keystroke, command))
        })
        .collect()
}

/// Parse a key string such as `cmd+e` or `numpad_add`
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let invalid = || KeymapError::InvalidKey(key_str.to_string());

    let lowered = key_str.trim().to_lowercase();
    let mut parts: Vec<&str> = lowered.split('+').map(str::trim).collect();
    let key_name = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;
    let key = key_named(key_name).ok_or_else(invalid)?;

    let mods = parts.into_iter().try_fold(Modifiers::NONE, |mods, part| {
        modifier_named(part).map(|m| mods | m).ok_or_else(invalid)
    })?;

    Ok(Keystroke::new(key, mods))
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Keymap loading errors
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "cannot read keymap: {}", e),
            KeymapError::ParseError(e) => write!(f, "malformed keymap: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "unknown key '{}'", k),
            KeymapError::InvalidCommand(c) => write!(f, "unknown command '{}'", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_stepper_keys() {
        assert_eq!(
            parse_key_string("plus").unwrap(),
            Keystroke::char('+')
        );
        assert_eq!(
            parse_key_string("numpad_subtract").unwrap(),
            Keystroke::key(KeyCode::NumpadSubtract)
        );
    }

    #[test]
    fn test_arrow_names_map_to_directions() {
        assert_eq!(
            parse_key_string("Left").unwrap(),
            Keystroke::arrow(Direction::Left)
        );
    }

    #[test]
    fn test_cmd_resolves_per_platform() {
        let stroke = parse_key_string("cmd+shift+E").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('e'));
        assert_eq!(stroke.mods, Modifiers::cmd() | Modifiers::SHIFT);
    }

    #[test]
    fn test_rejects_malformed_strings() {
        for bad in ["", "ctrl+", "ctrl", "m+p", "hyper+m", "f5", "escape"] {
            assert!(
                matches!(parse_key_string(bad), Err(KeymapError::InvalidKey(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_platform_entries_for_other_systems_are_skipped() {
        let other = if cfg!(target_os = "macos") { "linux" } else { "macos" };
        let yaml = format!(
            "bindings:\n  - key: \"p\"\n    command: ApplyMazePreset\n    platform: {}\n  - key: \"m\"\n    command: ToggleMazeMode\n",
            other
        );
        let bindings = parse_keymap_yaml(&yaml).unwrap();
        assert_eq!(
            bindings,
            vec![Keybinding::new(Keystroke::char('m'), Command::ToggleMazeMode)]
        );
    }

    #[test]
    fn test_unknown_command_names_the_entry() {
        let yaml = "bindings:\n  - key: \"x\"\n    command: PaintCell\n";
        match parse_keymap_yaml(yaml) {
            Err(KeymapError::InvalidCommand(name)) => assert_eq!(name, "PaintCell"),
            other => panic!("expected InvalidCommand, got {:?}", other),
        }
    }
}
