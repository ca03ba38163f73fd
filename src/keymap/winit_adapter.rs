//! winit key events → [`Keystroke`]

use winit::keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};
use crate::messages::Direction;

/// Map a pressed key to a keystroke, or `None` for keys the grid never binds
///
/// The numpad +/- keys are told apart by physical key so they can be bound
/// separately from the main-row `+`/`-`.
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    held: ModifiersState,
) -> Option<Keystroke> {
    let key = match (physical_key, logical_key) {
        (PhysicalKey::Code(WinitKeyCode::NumpadAdd), _) => KeyCode::NumpadAdd,
        (PhysicalKey::Code(WinitKeyCode::NumpadSubtract), _) => KeyCode::NumpadSubtract,
        (_, Key::Named(named)) => named_key(*named)?,
        (_, Key::Character(text)) => match text.chars().next()? {
            ' ' => KeyCode::Space,
            c => KeyCode::Char(c.to_ascii_lowercase()),
        },
        _ => return None,
    };

    // Shift is already part of a symbol like '+', so only letters keep it
    let shift = held.shift_key() && !matches!(key, KeyCode::Char(c) if !c.is_ascii_alphabetic());
    let mods = Modifiers::new(held.control_key(), shift, held.alt_key(), held.super_key());
    Some(Keystroke::new(key, mods))
}

fn named_key(named: NamedKey) -> Option<KeyCode> {
    Some(match named {
        NamedKey::ArrowUp => KeyCode::Arrow(Direction::Up),
        NamedKey::ArrowDown => KeyCode::Arrow(Direction::Down),
        NamedKey::ArrowLeft => KeyCode::Arrow(Direction::Left),
        NamedKey::ArrowRight => KeyCode::Arrow(Direction::Right),
        NamedKey::Space => KeyCode::Space,
        NamedKey::Enter => KeyCode::Enter,
        _ => return None,
    })
}
