//! Keys and modifier sets the grid editor can bind
//!
//! Only keys that drive the grid are modelled: printable characters, the
//! arrows (which map onto a selection [`Direction`]), Space/Enter for
//! toggling and the numpad +/- pair for the size stepper.

use std::fmt;

use crate::messages::Direction;

/// Held modifier keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Cmd on macOS, the Windows/Super key elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers::new(false, false, false, false);
    pub const CTRL: Modifiers = Modifiers::new(true, false, false, false);
    pub const SHIFT: Modifiers = Modifiers::new(false, true, false, false);
    pub const ALT: Modifiers = Modifiers::new(false, false, true, false);
    pub const META: Modifiers = Modifiers::new(false, false, false, true);

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self {
            ctrl,
            shift,
            alt,
            meta,
        }
    }

    /// The modifier written as `cmd` in keymap files
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.ctrl || self.shift || self.alt || self.meta)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers::new(
            self.ctrl || rhs.ctrl,
            self.shift || rhs.shift,
            self.alt || rhs.alt,
            self.meta || rhs.meta,
        )
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = if cfg!(target_os = "macos") { "Cmd" } else { "Super" };
        let names = [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, meta),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&held.join("+"))
    }
}

/// A bindable key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character, lowercase
    Char(char),
    /// Arrow key, named by the way it moves the selection
    Arrow(Direction),
    Space,
    Enter,
    NumpadAdd,
    NumpadSubtract,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::Arrow(Direction::Up) => f.write_str("↑"),
            KeyCode::Arrow(Direction::Down) => f.write_str("↓"),
            KeyCode::Arrow(Direction::Left) => f.write_str("←"),
            KeyCode::Arrow(Direction::Right) => f.write_str("→"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::NumpadAdd => f.write_str("Num+"),
            KeyCode::NumpadSubtract => f.write_str("Num-"),
        }
    }
}

/// A key plus the modifiers held with it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Unmodified key
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Unmodified character key, case-folded
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c.to_ascii_lowercase()))
    }

    /// Unmodified arrow key
    pub const fn arrow(direction: Direction) -> Self {
        Self::key(KeyCode::Arrow(direction))
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}
