//! Button rendering primitives
//!
//! Pure functions: callers derive the visual state from the model and pass
//! it in.

use mazegrid::layout::{HitTarget, Rect, ToolbarAction};
use mazegrid::model::ui::UiState;
use mazegrid::theme::Theme;

use super::frame::{Frame, TextPainter};

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

impl ButtonState {
    /// Derive the state of a toolbar button from hover/press tracking
    pub fn for_action(ui: &UiState, action: ToolbarAction) -> Self {
        let target = Some(HitTarget::Button(action));
        if ui.pressed == target {
            ButtonState::Pressed
        } else if ui.hover == target {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

/// Render a button with a centered label
///
/// Accent buttons use the accent background when idle. `painter` is `None`
/// when no font could be loaded; the button is still drawn.
pub fn render_button(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    theme: &Theme,
    rect: Rect,
    label: &str,
    state: ButtonState,
    accent: bool,
) {
    let btn = &theme.button;

    let bg = match state {
        ButtonState::Normal if accent => btn.background_accent,
        ButtonState::Normal => btn.background,
        ButtonState::Hovered => btn.background_hover,
        ButtonState::Pressed => btn.background_pressed,
    };

    let x = rect.x.round() as usize;
    let y = rect.y.round() as usize;
    let w = rect.width.round() as usize;
    let h = rect.height.round() as usize;

    frame.draw_bordered_rect(x, y, w, h, bg.to_argb_u32(), btn.border.to_argb_u32());

    if state == ButtonState::Pressed && w > 2 && h > 2 {
        frame.draw_outline(
            Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0),
            1,
            btn.focus_ring.to_argb_u32(),
        );
    }

    if let Some(painter) = painter {
        painter.draw_centered(frame, rect, label, btn.foreground.to_argb_u32());
    }
}
