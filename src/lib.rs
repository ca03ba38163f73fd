//! mazegrid - Elm-style editor for raycasting maze grids
//!
//! This crate provides the core types and logic for a small grid-map editor
//! implementing the Elm Architecture pattern. Grids are exported as a Python
//! literal (`game_map = [...]`) that a raycasting game loads as its map.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod editor;
pub mod export;
pub mod grid;
pub mod keymap;
pub mod layout;
pub mod locale;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editor::GridEditor;
pub use grid::{CellCode, Grid};
pub use locale::{Localizer, StringTable};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
