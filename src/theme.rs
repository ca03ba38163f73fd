//! Theme system for the editor
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/mazegrid/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::grid::CellCode;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub window: WindowThemeData,
    pub toolbar: ToolbarThemeData,
    pub button: ButtonThemeData,
    pub grid: GridThemeData,
    pub status_bar: StatusBarThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarThemeData {
    pub background: String,
    pub foreground: String,
    pub border: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonThemeData {
    pub background: String,
    pub background_hover: String,
    pub background_pressed: String,
    #[serde(default)]
    pub background_accent: Option<String>,
    pub foreground: String,
    pub border: String,
    #[serde(default)]
    pub focus_ring: Option<String>,
}

/// Cell colors, one per cell code plus overlays
#[derive(Debug, Clone, Deserialize)]
pub struct GridThemeData {
    pub empty: String,
    pub primary: String,
    pub secondary: String,
    pub wall: String,
    #[serde(default)]
    pub wall_outline: Option<String>,
    pub label: String,
    pub selection: String,
    #[serde(default)]
    pub hover: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub window: WindowTheme,
    pub toolbar: ToolbarTheme,
    pub button: ButtonTheme,
    pub grid: GridTheme,
    pub status_bar: StatusBarTheme,
}

#[derive(Debug, Clone)]
pub struct WindowTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct ToolbarTheme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    /// Background of the highlighted action (maze preset)
    pub background_accent: Color,
    pub foreground: Color,
    pub border: Color,
    pub focus_ring: Color,
}

#[derive(Debug, Clone)]
pub struct GridTheme {
    pub empty: Color,
    pub primary: Color,
    pub secondary: Color,
    pub wall: Color,
    pub wall_outline: Color,
    pub label: Color,
    pub selection: Color,
    pub hover: Color,
}

impl GridTheme {
    /// Fill color for a cell
    pub fn cell_color(&self, cell: CellCode) -> Color {
        match cell {
            CellCode::Wall => self.wall,
            CellCode::Empty => self.empty,
            CellCode::Primary => self.primary,
            CellCode::Secondary => self.secondary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
    pub warning: Color,
}

fn optional_color(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    Ok(value
        .as_ref()
        .map(|s| Color::from_hex(s))
        .transpose()?
        .unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = data.ui;
        let button_border = Color::from_hex(&ui.button.border)?;
        let wall = Color::from_hex(&ui.grid.wall)?;

        Ok(Theme {
            name: data.name,
            window: WindowTheme {
                background: Color::from_hex(&ui.window.background)?,
                foreground: Color::from_hex(&ui.window.foreground)?,
            },
            toolbar: ToolbarTheme {
                background: Color::from_hex(&ui.toolbar.background)?,
                foreground: Color::from_hex(&ui.toolbar.foreground)?,
                border: Color::from_hex(&ui.toolbar.border)?,
            },
            button: ButtonTheme {
                background: Color::from_hex(&ui.button.background)?,
                background_hover: Color::from_hex(&ui.button.background_hover)?,
                background_pressed: Color::from_hex(&ui.button.background_pressed)?,
                background_accent: optional_color(
                    &ui.button.background_accent,
                    Color::rgb(0xEF, 0x44, 0x44),
                )?,
                foreground: Color::from_hex(&ui.button.foreground)?,
                border: button_border,
                focus_ring: optional_color(&ui.button.focus_ring, button_border)?,
            },
            grid: GridTheme {
                empty: Color::from_hex(&ui.grid.empty)?,
                primary: Color::from_hex(&ui.grid.primary)?,
                secondary: Color::from_hex(&ui.grid.secondary)?,
                wall,
                wall_outline: optional_color(&ui.grid.wall_outline, wall)?,
                label: Color::from_hex(&ui.grid.label)?,
                selection: Color::from_hex(&ui.grid.selection)?,
                hover: optional_color(&ui.grid.hover, Color::rgba(0xFF, 0xFF, 0xFF, 0x40))?,
            },
            status_bar: StatusBarTheme {
                background: Color::from_hex(&ui.status_bar.background)?,
                foreground: Color::from_hex(&ui.status_bar.foreground)?,
                warning: optional_color(&ui.status_bar.warning, Color::rgb(0xF5, 0x9E, 0x0B))?,
            },
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Default Dark".to_string(),
                window: WindowTheme {
                    background: Color::rgb(0x0F, 0x17, 0x2A),
                    foreground: Color::rgb(0xE2, 0xE8, 0xF0),
                },
                toolbar: ToolbarTheme {
                    background: Color::rgb(0xCB, 0xD5, 0xE1),
                    foreground: Color::rgb(0x0F, 0x17, 0x2A),
                    border: Color::rgb(0x94, 0xA3, 0xB8),
                },
                button: ButtonTheme {
                    background: Color::rgb(0x33, 0x41, 0x55),
                    background_hover: Color::rgb(0x47, 0x55, 0x69),
                    background_pressed: Color::rgb(0x1E, 0x29, 0x3B),
                    background_accent: Color::rgb(0xEF, 0x44, 0x44),
                    foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                    border: Color::rgb(0x1E, 0x29, 0x3B),
                    focus_ring: Color::rgb(0x38, 0xBD, 0xF8),
                },
                grid: GridTheme {
                    empty: Color::rgb(0xCB, 0xD5, 0xE1),
                    primary: Color::rgb(0x47, 0x55, 0x69),
                    secondary: Color::rgb(0xEA, 0xB3, 0x08),
                    wall: Color::rgb(0x0F, 0x17, 0x2A),
                    wall_outline: Color::rgb(0x33, 0x41, 0x55),
                    label: Color::rgb(0xFF, 0xFF, 0xFF),
                    selection: Color::rgb(0x38, 0xBD, 0xF8),
                    hover: Color::rgba(0xFF, 0xFF, 0xFF, 0x40),
                },
                status_bar: StatusBarTheme {
                    background: Color::rgb(0x1E, 0x29, 0x3B),
                    foreground: Color::rgb(0xE2, 0xE8, 0xF0),
                    warning: Color::rgb(0xF5, 0x9E, 0x0B),
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
