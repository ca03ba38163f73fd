//! View module - software rendering of the editor window
//!
//! Contains the Renderer struct and the toolbar, grid and status bar painters.

pub mod button;
pub mod frame;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use mazegrid::grid::CellCode;
use mazegrid::layout::{GridGeometry, HitTarget, Layout, Rect, ToolbarItemKind};
use mazegrid::model::AppModel;
use mazegrid::theme::Color;

use button::{render_button, ButtonState};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Metrics used when no font could be loaded
const FALLBACK_CHAR_WIDTH: f32 = 9.0;
const FALLBACK_LINE_HEIGHT: usize = 20;

/// Point size before scaling
const BASE_FONT_SIZE: f32 = 14.0;

/// Fonts tried when the config names none
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loaded font with its metrics at the render size
struct LoadedFont {
    font: Font,
    line_metrics: LineMetrics,
}

pub struct Renderer {
    font: Option<LoadedFont>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so we
    /// draw into our own buffer and copy it over on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer, automatically detecting the window's scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_path: Option<&Path>,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        Self::with_scale_factor(window, context, font_path, scale_factor)
    }

    /// Create a new renderer with an explicit scale factor
    pub fn with_scale_factor(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_path: Option<&Path>,
        scale_factor: f64,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font_size = BASE_FONT_SIZE * scale_factor as f32;
        let font = load_font(font_path, font_size);
        let char_width = font
            .as_ref()
            .map(|f| f.font.rasterize('M', font_size).0.advance_width)
            .unwrap_or(FALLBACK_CHAR_WIDTH * scale_factor as f32);

        let back_buffer = vec![0u32; (width as usize) * (height as usize)];

        Ok(Self {
            font,
            surface,
            back_buffer,
            width,
            height,
            font_size,
            glyph_cache: HashMap::new(),
            char_width,
            scale_factor,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        match &self.font {
            Some(f) => f.line_metrics.new_line_size.ceil() as usize,
            None => (FALLBACK_LINE_HEIGHT as f64 * self.scale_factor).round() as usize,
        }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw the whole window and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            // Minimized
            return Ok(());
        }

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let layout = Layout::for_model(model);
        let line_height = self.line_height();
        let char_width = self.char_width;
        let font_size = self.font_size;

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            let mut painter = self.font.as_ref().map(|f| {
                TextPainter::new(
                    &f.font,
                    &mut self.glyph_cache,
                    font_size,
                    f.line_metrics.ascent,
                    char_width,
                    line_height,
                )
            });

            frame.clear(model.theme.window.background.to_argb_u32());
            render_toolbar(&mut frame, painter.as_mut(), model, &layout);
            render_grid(&mut frame, painter.as_mut(), model, &layout.grid);
            render_status_bar(&mut frame, painter.as_mut(), model, layout.status_bar);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        if buffer.len() == self.back_buffer.len() {
            buffer.copy_from_slice(&self.back_buffer);
        } else {
            tracing::warn!(
                "Surface buffer size {} does not match back buffer {}",
                buffer.len(),
                self.back_buffer.len()
            );
        }
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Load the configured font, or the first system font that parses
fn load_font(configured: Option<&Path>, font_size: f32) -> Option<LoadedFont> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => {
                let Some(line_metrics) = font.horizontal_line_metrics(font_size) else {
                    tracing::warn!("Font {} has no horizontal metrics", path.display());
                    continue;
                };
                tracing::info!("Loaded font {}", path.display());
                return Some(LoadedFont { font, line_metrics });
            }
            Err(e) => tracing::warn!("Failed to parse font {}: {}", path.display(), e),
        }
    }

    tracing::warn!("No usable font found; labels will not be drawn");
    None
}

fn render_toolbar(
    frame: &mut Frame,
    mut painter: Option<&mut TextPainter>,
    model: &AppModel,
    layout: &Layout,
) {
    let theme = &model.theme;
    frame.fill_rect(layout.toolbar, theme.toolbar.background.to_argb_u32());
    frame.fill_rect(
        Rect::new(0.0, layout.toolbar.bottom() - 1.0, layout.toolbar.width, 1.0),
        theme.toolbar.border.to_argb_u32(),
    );

    for item in &layout.items {
        match item.kind {
            ToolbarItemKind::Label => {
                if let Some(painter) = painter.as_deref_mut() {
                    painter.draw_centered(
                        frame,
                        item.rect,
                        &item.label,
                        theme.toolbar.foreground.to_argb_u32(),
                    );
                }
            }
            ToolbarItemKind::Button(action) => render_button(
                frame,
                painter.as_deref_mut(),
                theme,
                item.rect,
                &item.label,
                ButtonState::for_action(&model.ui, action),
                action.is_accent(),
            ),
        }
    }
}

fn render_grid(
    frame: &mut Frame,
    mut painter: Option<&mut TextPainter>,
    model: &AppModel,
    geometry: &GridGeometry,
) {
    let colors = &model.theme.grid;
    let show_labels = geometry.cell_size >= (model.line_height + 4) as f32;

    for (row, col, cell) in model.editor.grid().iter_cells() {
        let rect = geometry.cell_rect(row, col);
        frame.fill_rect(rect, colors.cell_color(cell).to_argb_u32());

        if cell == CellCode::Wall {
            frame.draw_outline(rect, 1, colors.wall_outline.to_argb_u32());
        }

        if model.ui.hover == Some(HitTarget::Cell { row, col })
            && model.editor.is_editable(row, col)
        {
            frame.blend_rect(rect, colors.hover.to_argb_u32());
        }

        if show_labels {
            if let Some(painter) = painter.as_deref_mut() {
                painter.draw_centered(
                    frame,
                    rect,
                    &cell.code().to_string(),
                    colors.label.to_argb_u32(),
                );
            }
        }
    }

    let (sel_row, sel_col) = model.ui.selection;
    if sel_row < geometry.size && sel_col < geometry.size {
        let thickness = if geometry.cell_size > 12.0 { 2 } else { 1 };
        frame.draw_outline(
            geometry.cell_rect(sel_row, sel_col),
            thickness,
            colors.selection.to_argb_u32() | 0xFF000000,
        );
    }
}

fn render_status_bar(
    frame: &mut Frame,
    painter: Option<&mut TextPainter>,
    model: &AppModel,
    rect: Rect,
) {
    let colors = &model.theme.status_bar;
    frame.fill_rect(rect, colors.background.to_argb_u32());

    let Some(painter) = painter else {
        return;
    };

    let char_width = painter.char_width();
    let status_y = rect.y.round() as usize + 2;
    let available_chars = (rect.width / char_width).floor() as usize;
    let layout = model.ui.status_bar.layout(available_chars);

    for seg in layout.left.iter().chain(&layout.right) {
        let x_px = (seg.x as f32 * char_width).round() as usize;
        let color = if seg.warning {
            colors.warning
        } else {
            colors.foreground
        };
        painter.draw(frame, x_px, status_y, &seg.text, color.to_argb_u32());
    }

    let separator = Color {
        a: 100,
        ..colors.foreground
    };
    for &sep_char_x in &layout.separator_positions {
        let x_px = (sep_char_x as f32 * char_width).round();
        frame.blend_rect(
            Rect::new(x_px, rect.y, 1.0, rect.height),
            separator.to_argb_u32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid::config::EditorConfig;

    fn model() -> AppModel {
        let config = EditorConfig {
            default_size: 5,
            ..Default::default()
        };
        AppModel::new(400, 400, config)
    }

    #[test]
    fn test_grid_cells_use_theme_colors() {
        let model = model();
        let layout = Layout::for_model(&model);
        let mut buffer = vec![0u32; 400 * 400];
        let mut frame = Frame::new(&mut buffer, 400, 400);
        render_grid(&mut frame, None, &model, &layout.grid);

        // Center pixel of an interior empty cell away from the selection
        let rect = layout.grid.cell_rect(3, 3);
        let x = (rect.x + rect.width / 2.0) as usize;
        let y = (rect.y + rect.height / 2.0) as usize;
        assert_eq!(
            buffer[y * 400 + x],
            model.theme.grid.empty.to_argb_u32()
        );

        let rect = layout.grid.cell_rect(0, 2);
        let x = (rect.x + rect.width / 2.0) as usize;
        let y = (rect.y + rect.height / 2.0) as usize;
        assert_eq!(buffer[y * 400 + x], model.theme.grid.wall.to_argb_u32());
    }

    #[test]
    fn test_status_bar_without_font_fills_background() {
        let model = model();
        let layout = Layout::for_model(&model);
        let mut buffer = vec![0u32; 400 * 400];
        let mut frame = Frame::new(&mut buffer, 400, 400);
        render_status_bar(&mut frame, None, &model, layout.status_bar);
        let y = (layout.status_bar.y + 1.0) as usize;
        assert_eq!(
            buffer[y * 400 + 10],
            model.theme.status_bar.background.to_argb_u32()
        );
    }

    #[test]
    fn test_missing_font_path_falls_back() {
        let font = load_font(Some(Path::new("/nonexistent/font.ttf")), 14.0);
        if let Some(font) = font {
            assert!(font.line_metrics.new_line_size > 0.0);
        }
    }
}
