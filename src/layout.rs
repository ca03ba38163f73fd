//! Window geometry and hit testing
//!
//! The window is split into three bands: a toolbar at the top that wraps onto
//! more rows when the window is narrow, the square grid centered in the
//! middle, and a one-line status bar at the bottom. Everything here is pure
//! geometry so the runtime and the renderer agree on where things are.

use crate::messages::{AppMsg, GridMsg, Msg};
use crate::export::ExportTarget;
use crate::model::AppModel;

/// Outer padding of the toolbar (pixels)
pub const TOOLBAR_PADDING: f32 = 8.0;
/// Horizontal gap between toolbar items (pixels)
pub const ITEM_GAP: f32 = 8.0;
/// Horizontal padding inside a button (pixels)
pub const BUTTON_PADDING_H: f32 = 10.0;
/// Vertical padding inside a button (pixels)
pub const BUTTON_PADDING_V: f32 = 4.0;
/// Space between the grid and the bars around it (pixels)
pub const GRID_MARGIN: f32 = 16.0;
/// Visual gap between neighbouring cells (pixels)
pub const CELL_GAP: f32 = 2.0;

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Clickable toolbar controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    /// Size control: one step smaller
    SizeDown,
    /// Size control: one step larger
    SizeUp,
    /// Overlay the corridor pattern
    MazePreset,
    /// Switch between maze mode and normal mode
    MazeMode,
    /// Write `maze.py`
    ExportFile,
    /// Print the literal to the log
    ExportLog,
    /// Cycle the UI language
    Language,
}

impl ToolbarAction {
    /// Message sent when the control is clicked
    pub fn to_msg(self) -> Msg {
        match self {
            ToolbarAction::SizeDown => Msg::Grid(GridMsg::StepSize(-1)),
            ToolbarAction::SizeUp => Msg::Grid(GridMsg::StepSize(1)),
            ToolbarAction::MazePreset => Msg::Grid(GridMsg::ApplyMazePreset),
            ToolbarAction::MazeMode => Msg::Grid(GridMsg::ToggleMazeMode),
            ToolbarAction::ExportFile => Msg::App(AppMsg::Export(ExportTarget::File)),
            ToolbarAction::ExportLog => Msg::App(AppMsg::Export(ExportTarget::Log)),
            ToolbarAction::Language => Msg::App(AppMsg::CycleLocale),
        }
    }

    /// Drawn with the accent background
    pub fn is_accent(self) -> bool {
        matches!(self, ToolbarAction::MazePreset)
    }
}

/// What lies under a point in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Button(ToolbarAction),
    Cell { row: usize, col: usize },
}

impl HitTarget {
    /// Message sent when the target is clicked
    pub fn to_msg(self) -> Msg {
        match self {
            HitTarget::Button(action) => action.to_msg(),
            HitTarget::Cell { row, col } => Msg::toggle_cell(row, col),
        }
    }
}

/// A toolbar entry: plain text or a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItemKind {
    /// Static text (title, current size)
    Label,
    Button(ToolbarAction),
}

/// A positioned toolbar entry
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarItem {
    pub kind: ToolbarItemKind,
    pub label: String,
    pub rect: Rect,
}

/// Placement of the cell grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Side length of one cell including its gap (pixels)
    pub cell_size: f32,
    /// Number of cells per side
    pub size: usize,
}

impl GridGeometry {
    /// Full extent of the grid
    pub fn bounds(&self) -> Rect {
        let side = self.cell_size * self.size as f32;
        Rect::new(self.origin_x, self.origin_y, side, side)
    }

    /// Drawn area of a cell (inset by the cell gap)
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let gap = if self.cell_size > CELL_GAP * 3.0 {
            CELL_GAP
        } else {
            0.0
        };
        Rect::new(
            self.origin_x + col as f32 * self.cell_size + gap / 2.0,
            self.origin_y + row as f32 * self.cell_size + gap / 2.0,
            self.cell_size - gap,
            self.cell_size - gap,
        )
    }

    /// Cell containing the point; gaps count as part of the cell
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.size == 0 || self.cell_size < 1.0 || !self.bounds().contains(x, y) {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell_size).floor() as usize;
        let row = ((y - self.origin_y) / self.cell_size).floor() as usize;
        (row < self.size && col < self.size).then_some((row, col))
    }
}

/// Complete window layout
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub toolbar: Rect,
    pub items: Vec<ToolbarItem>,
    pub grid: GridGeometry,
    pub status_bar: Rect,
}

/// Height of the status bar for a given line height
#[inline]
pub fn status_bar_height(line_height: usize) -> f32 {
    (line_height + 4) as f32
}

/// Height of a toolbar button for a given line height
#[inline]
pub fn button_height(line_height: usize) -> f32 {
    line_height as f32 + BUTTON_PADDING_V * 2.0
}

/// Width of a label in pixels (fixed advance per character)
#[inline]
pub fn text_width(text: &str, char_width: f32) -> f32 {
    (text.chars().count() as f32 * char_width).round()
}

/// Toolbar entries in display order with their localized labels
pub fn toolbar_entries(model: &AppModel) -> Vec<(ToolbarItemKind, String)> {
    let locale = model.locale.as_ref();
    let mode_key = if model.editor.maze_mode() {
        "toolbar.maze_mode"
    } else {
        "toolbar.normal_mode"
    };
    let language = format!(
        "{}: {}",
        locale.translate("toolbar.language"),
        locale.locale_name(locale.current_locale())
    );

    vec![
        (ToolbarItemKind::Label, locale.translate("app.title")),
        (
            ToolbarItemKind::Label,
            format!("{}: {}", locale.translate("toolbar.size"), model.editor.size()),
        ),
        (ToolbarItemKind::Button(ToolbarAction::SizeDown), "-".to_string()),
        (ToolbarItemKind::Button(ToolbarAction::SizeUp), "+".to_string()),
        (
            ToolbarItemKind::Button(ToolbarAction::MazePreset),
            locale.translate("toolbar.maze_preset"),
        ),
        (
            ToolbarItemKind::Button(ToolbarAction::MazeMode),
            locale.translate(mode_key),
        ),
        (
            ToolbarItemKind::Button(ToolbarAction::ExportFile),
            locale.translate("toolbar.export_file"),
        ),
        (
            ToolbarItemKind::Button(ToolbarAction::ExportLog),
            locale.translate("toolbar.print_grid"),
        ),
        (ToolbarItemKind::Button(ToolbarAction::Language), language),
    ]
}

/// Compute the layout from raw inputs
///
/// Toolbar items flow left to right and wrap when the next item would
/// cross the right padding. The grid takes the largest square that fits
/// between the toolbar and the status bar.
pub fn compute_layout(
    window_width: u32,
    window_height: u32,
    grid_size: usize,
    char_width: f32,
    line_height: usize,
    entries: Vec<(ToolbarItemKind, String)>,
) -> Layout {
    let width = window_width as f32;
    let height = window_height as f32;
    let item_h = button_height(line_height);
    let max_x = width - TOOLBAR_PADDING;

    let mut items = Vec::with_capacity(entries.len());
    let mut x = TOOLBAR_PADDING;
    let mut y = TOOLBAR_PADDING;
    for (kind, label) in entries {
        let padding = match kind {
            ToolbarItemKind::Label => 0.0,
            ToolbarItemKind::Button(_) => BUTTON_PADDING_H * 2.0,
        };
        let item_w = text_width(&label, char_width) + padding;
        if x > TOOLBAR_PADDING && x + item_w > max_x {
            x = TOOLBAR_PADDING;
            y += item_h + ITEM_GAP;
        }
        items.push(ToolbarItem {
            kind,
            label,
            rect: Rect::new(x, y, item_w, item_h),
        });
        x += item_w + ITEM_GAP;
    }
    let toolbar = Rect::new(0.0, 0.0, width, y + item_h + TOOLBAR_PADDING);

    let status_h = status_bar_height(line_height);
    let status_bar = Rect::new(0.0, (height - status_h).max(0.0), width, status_h);

    let area_top = toolbar.bottom() + GRID_MARGIN;
    let area_w = (width - GRID_MARGIN * 2.0).max(0.0);
    let area_h = (status_bar.y - GRID_MARGIN - area_top).max(0.0);
    let side = area_w.min(area_h);
    let cell_size = if grid_size == 0 {
        0.0
    } else {
        (side / grid_size as f32).floor()
    };
    let used = cell_size * grid_size as f32;
    let grid = GridGeometry {
        origin_x: (GRID_MARGIN + (area_w - used) / 2.0).floor(),
        origin_y: (area_top + (area_h - used) / 2.0).floor(),
        cell_size,
        size: grid_size,
    };

    Layout {
        toolbar,
        items,
        grid,
        status_bar,
    }
}

impl Layout {
    /// Layout for the current model state
    pub fn for_model(model: &AppModel) -> Self {
        compute_layout(
            model.window_size.0,
            model.window_size.1,
            model.editor.size(),
            model.char_width,
            model.line_height,
            toolbar_entries(model),
        )
    }

    /// Topmost target at a point, if any
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        if self.toolbar.contains(x, y) {
            return self.items.iter().find_map(|item| match item.kind {
                ToolbarItemKind::Button(action) if item.rect.contains(x, y) => {
                    Some(HitTarget::Button(action))
                }
                _ => None,
            });
        }
        if self.status_bar.contains(x, y) {
            return None;
        }
        self.grid
            .cell_at(x, y)
            .map(|(row, col)| HitTarget::Cell { row, col })
    }

    /// Rect of a toolbar button
    pub fn button_rect(&self, action: ToolbarAction) -> Option<Rect> {
        self.items
            .iter()
            .find(|item| item.kind == ToolbarItemKind::Button(action))
            .map(|item| item.rect)
    }
}
