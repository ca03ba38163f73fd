//! UI message handlers (status bar, transient messages, pointer feedback)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, TransientMessage};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetTransientMessage { text, duration_ms } => {
            model.ui.transient_message =
                Some(TransientMessage::new(text, Duration::from_millis(duration_ms)));
            Some(Cmd::Redraw)
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message.take()?;
            Some(Cmd::Redraw)
        }

        UiMsg::Tick => {
            let expired = model
                .ui
                .transient_message
                .as_ref()
                .is_some_and(TransientMessage::is_expired);
            if expired {
                model.ui.transient_message = None;
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        UiMsg::Hover(target) => {
            if model.ui.hover == target {
                return None;
            }
            model.ui.hover = target;
            Some(Cmd::Redraw)
        }

        UiMsg::Press(target) => {
            model.ui.pressed = target;
            Some(Cmd::Redraw)
        }

        UiMsg::Release => {
            model.ui.pressed.take()?;
            Some(Cmd::Redraw)
        }
    }
}
