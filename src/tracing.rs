//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging grid
//! edits and state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=grid=debug,message=debug` - scoped filtering
//! - `RUST_LOG=mazegrid::export=info` - show printed grids on the console
//!
//! # Log Files
//!
//! Logs are written to `~/.config/mazegrid/logs/mazegrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editor::GridEditor;

/// Target used for printed grids
pub const EXPORT_TARGET: &str = "mazegrid::export";

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to warnings plus printed
/// grids, so "Print Grid to Log" is visible without extra setup.
///
/// File logging writes to `~/.config/mazegrid/logs/mazegrid.log` with daily rotation.
pub fn init() {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=info", EXPORT_TARGET)));

    // Console layer - respects RUST_LOG; stderr keeps `--print` output clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "mazegrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    pub size: usize,
    pub maze_mode: bool,
    pub codes: Vec<Vec<i8>>,
    pub selection: (usize, usize),
}

impl GridSnapshot {
    pub fn capture(editor: &GridEditor, selection: (usize, usize)) -> Self {
        Self {
            size: editor.size(),
            maze_mode: editor.maze_mode(),
            codes: editor.grid().to_codes(),
            selection,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        if self.size != other.size {
            return Some(format!("size: {} → {}", self.size, other.size));
        }

        let mut changes = Vec::new();
        if self.maze_mode != other.maze_mode {
            changes.push(format!(
                "maze_mode: {} → {}",
                self.maze_mode, other.maze_mode
            ));
        }

        let cells: Vec<String> = self
            .codes
            .iter()
            .zip(&other.codes)
            .enumerate()
            .flat_map(|(row, (before, after))| {
                before
                    .iter()
                    .zip(after)
                    .enumerate()
                    .filter(|(_, (a, b))| a != b)
                    .map(move |(col, (a, b))| format!("({},{}): {} → {}", row, col, a, b))
            })
            .collect();
        match cells.len() {
            0 => {}
            1..=4 => changes.push(cells.join(", ")),
            n => changes.push(format!("{} cells changed", n)),
        }

        if self.selection != other.selection {
            changes.push(format!(
                "selection: {:?} → {:?}",
                self.selection, other.selection
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
