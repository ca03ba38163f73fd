//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of the application state to JSON for easier debugging.
//! Triggered by F7 in debug builds.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::AppModel;

#[derive(Serialize)]
pub struct StateDump {
    pub timestamp: String,
    pub window_size: (u32, u32),
    pub line_height: usize,
    pub char_width: f32,
    pub editor: EditorDump,
    pub ui: UiStateDump,
    pub locale: String,
    pub theme: String,
}

#[derive(Serialize)]
pub struct EditorDump {
    pub size: usize,
    pub maze_mode: bool,
    pub cells: Vec<Vec<i8>>,
    pub spawn_point: Option<(usize, usize)>,
    pub invariants_ok: bool,
}

#[derive(Serialize)]
pub struct UiStateDump {
    pub status_message: String,
    pub transient_message: Option<String>,
    pub selection: (usize, usize),
    pub hover: Option<String>,
    pub is_exporting: bool,
    pub visible_segments: usize,
}

impl StateDump {
    pub fn from_model(model: &AppModel) -> Self {
        let editor = &model.editor;
        Self {
            timestamp: chrono_timestamp(),
            window_size: model.window_size,
            line_height: model.line_height,
            char_width: model.char_width,
            editor: EditorDump {
                size: editor.size(),
                maze_mode: editor.maze_mode(),
                cells: editor.grid().to_codes(),
                spawn_point: editor.grid().spawn_point(),
                invariants_ok: editor.check_invariants().is_ok(),
            },
            ui: UiStateDump {
                status_message: model.ui.status_message.clone(),
                transient_message: model.ui.transient_message.as_ref().map(|m| m.text.clone()),
                selection: model.ui.selection,
                hover: model.ui.hover.map(|h| format!("{:?}", h)),
                is_exporting: model.ui.is_exporting,
                visible_segments: model.ui.status_bar.visible_segments().count(),
            },
            locale: model.locale.current_locale().to_string(),
            theme: model.theme.name.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Write the dump into the config dumps directory
    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        let dir = crate::config_paths::ensure_dumps_dir().map_err(std::io::Error::other)?;
        self.save_to_dir(&dir)
    }

    /// Write the dump as `<timestamp>-state-dump.json` inside `dir`
    pub fn save_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-state-dump.json", self.timestamp));
        std::fs::write(&path, self.to_json())?;
        Ok(path)
    }
}

fn chrono_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();

    let days_since_epoch = secs / 86400;
    let secs_today = secs % 86400;

    let hours = secs_today / 3600;
    let minutes = (secs_today % 3600) / 60;
    let seconds = secs_today % 60;

    let (year, month, day) = days_to_ymd(days_since_epoch as i64);

    format!(
        "{:04}-{:02}-{:02}-{:02}{:02}{:02}",
        year, month, day, hours, minutes, seconds
    )
}

/// Civil date from days since the Unix epoch
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = (days - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i32, m, d)
}
