//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Overriding the startup size, mode, locale and export directory
//! - Headless runs that print and/or write `maze.py` without a window

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::EditorConfig;
use crate::editor::{is_valid_size, GridEditor, MAX_SIZE, MIN_SIZE};
use crate::export::{self, ExportArtifact, EXPORT_FILE_NAME};

/// A visual editor for raycasting maze grids
#[derive(Parser, Debug)]
#[command(
    name = "mazegrid",
    version,
    about = "A visual editor for raycasting maze grids"
)]
pub struct CliArgs {
    /// Grid side length (odd, 5-25)
    #[arg(short = 's', long, value_name = "N", value_parser = parse_size)]
    pub size: Option<usize>,

    /// Start in maze mode
    #[arg(short = 'm', long)]
    pub maze: bool,

    /// UI language code (e.g. en, de)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub locale: Option<String>,

    /// Directory maze.py is written to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Apply the maze preset before printing or exporting
    #[arg(long)]
    pub preset: bool,

    /// Print the grid literal to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Write maze.py and exit
    #[arg(long)]
    pub export: bool,
}

/// Validate `--size`
fn parse_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if is_valid_size(size) {
        Ok(size)
    } else {
        Err(format!(
            "size must be an odd number between {} and {}",
            MIN_SIZE, MAX_SIZE
        ))
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupConfig {
    pub size: Option<usize>,
    /// `Some(true)` when `--maze` was given; the config decides otherwise
    pub maze_mode: Option<bool>,
    pub locale: Option<String>,
    pub export_dir: Option<PathBuf>,
    pub preset: bool,
    pub print: bool,
    pub export: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.preset && !(self.print || self.export) {
            return Err("--preset only applies together with --print or --export".to_string());
        }
        Ok(StartupConfig {
            size: self.size,
            maze_mode: self.maze.then_some(true),
            locale: self.locale,
            export_dir: self.export_dir,
            preset: self.preset,
            print: self.print,
            export: self.export,
        })
    }
}

impl StartupConfig {
    /// Whether this run finishes without opening a window
    pub fn is_headless(&self) -> bool {
        self.print || self.export
    }

    /// The loaded config with this run's overrides applied
    ///
    /// `saved` is left untouched so one-off flags never reach `config.yaml`.
    pub fn session_config(&self, saved: &EditorConfig) -> EditorConfig {
        let mut session = saved.clone();
        self.apply_to(&mut session);
        session
    }

    /// Layer command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(size) = self.size {
            config.default_size = size;
        }
        if let Some(maze_mode) = self.maze_mode {
            config.maze_mode = maze_mode;
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(dir) = &self.export_dir {
            config.export_dir = Some(dir.clone());
        }
    }

    /// Build the grid and print and/or export it
    ///
    /// The literal goes to `out` for `--print`; `--export` writes
    /// `maze.py` and returns the artifact.
    pub fn run_headless(
        &self,
        config: &EditorConfig,
        out: &mut impl Write,
    ) -> anyhow::Result<Option<ExportArtifact>> {
        let mut editor = GridEditor::new(config.default_size, config.maze_mode);
        if self.preset {
            editor.apply_maze_preset();
        }
        let literal = editor.export_grid(&config.variable_name);

        if editor.grid().spawn_point().is_none() {
            tracing::warn!("Map has no free spawn cell");
        }

        if self.print {
            writeln!(out, "{}", literal).context("Failed to write grid to stdout")?;
        }

        if self.export {
            let dir = config.resolved_export_dir();
            let artifact = export::write_export(&dir, EXPORT_FILE_NAME, &literal)?;
            tracing::info!("Exported {}", artifact.path.display());
            return Ok(Some(artifact));
        }

        Ok(None)
    }
}
