//! Keyboard and mouse input that the keymap cannot express
//!
//! Mouse events are hit-tested against the current layout and turned into
//! messages. Keys without a binding fall back to `handle_key`.

use winit::keyboard::{Key, NamedKey};

use mazegrid::commands::Cmd;
use mazegrid::layout::{HitTarget, Layout};
use mazegrid::messages::{Msg, UiMsg};
use mazegrid::model::AppModel;
use mazegrid::update::update;

/// Merge two optional commands into one
fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
    match (first, second) {
        (None, cmd) | (cmd, None) => cmd,
        (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
    }
}

/// Target under the pointer for the current model state
pub fn target_at(model: &AppModel, x: f64, y: f64) -> Option<HitTarget> {
    Layout::for_model(model).hit_test(x as f32, y as f32)
}

/// Pointer moved: update hover feedback
pub fn handle_mouse_move(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let target = target_at(model, x, y);
    update(model, Msg::Ui(UiMsg::Hover(target)))
}

/// Pointer left the window
pub fn handle_mouse_leave(model: &mut AppModel) -> Option<Cmd> {
    update(model, Msg::Ui(UiMsg::Hover(None)))
}

/// Left button pressed: record the press and act on the target
///
/// Clicks act on press so a cell toggles even if the pointer drifts before
/// release.
pub fn handle_mouse_press(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let target = target_at(model, x, y);
    let pressed = update(model, Msg::Ui(UiMsg::Press(target)));
    let action = target.and_then(|t| update(model, t.to_msg()));

    // The action may have moved things (size change, new labels)
    let hover = handle_mouse_move(model, x, y);
    merge(merge(pressed, action), hover)
}

/// Left button released
pub fn handle_mouse_release(model: &mut AppModel) -> Option<Cmd> {
    update(model, Msg::Ui(UiMsg::Release))
}

/// Handle keys that have no keymap binding
pub fn handle_key(model: &mut AppModel, key: &Key) -> Option<Cmd> {
    match key {
        // Dismiss the flash message early
        Key::Named(NamedKey::Escape) => update(model, Msg::Ui(UiMsg::ClearTransientMessage)),
        _ => None,
    }
}
