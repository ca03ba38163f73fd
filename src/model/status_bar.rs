//! Status bar model - segments and layout
//!
//! The bar shows the latest status message on the left and the grid facts
//! (size, mode, spawn point, marker counts) on the right.

use std::time::{Duration, Instant};

use crate::grid::CellCode;

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Status and transient messages (e.g., "Exported to ...")
    Message,
    /// Grid size (e.g., "15 × 15")
    Size,
    /// Maze mode or normal mode
    Mode,
    /// Spawn cell the game will use, or a warning when there is none
    Spawn,
    /// Count of primary and secondary markers
    Markers,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
    /// Text drawn in the warning color
    Warning(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) | SegmentContent::Warning(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        self.display_text().is_empty()
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, SegmentContent::Warning(_))
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        self.display_text().chars().count()
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    /// Unique identifier
    pub id: SegmentId,
    /// Position in the status bar
    pub position: SegmentPosition,
    /// Content to display
    pub content: SegmentContent,
    /// Priority for overflow (higher = keep visible longer)
    pub priority: u8,
    /// Minimum width in characters (0 = flexible)
    pub min_width: usize,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::Message => SegmentPosition::Left,
            SegmentId::Size | SegmentId::Mode | SegmentId::Spawn | SegmentId::Markers => {
                SegmentPosition::Right
            }
        };

        Self {
            id,
            position,
            content,
            priority: 0,
            min_width: 0,
        }
    }

    /// Set the priority (builder pattern)
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Set the minimum width (builder pattern)
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// All segments in the status bar
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(SegmentId::Message, SegmentContent::Empty).with_priority(50),
                StatusSegment::new(SegmentId::Markers, SegmentContent::Empty).with_priority(40),
                StatusSegment::new(SegmentId::Spawn, SegmentContent::Empty).with_priority(70),
                StatusSegment::new(SegmentId::Mode, SegmentContent::Empty).with_priority(80),
                StatusSegment::new(SegmentId::Size, SegmentContent::Empty)
                    .with_priority(90)
                    .with_min_width(7),
            ],
            separator_spacing: 2,
            padding: 2,
        }
    }

    /// Get a segment by ID (immutable)
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Get a segment by ID (mutable)
    pub fn get_segment_mut(&mut self, id: SegmentId) -> Option<&mut StatusSegment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.get_segment_mut(id) {
            segment.content = content;
        }
    }

    /// Iterate over visible segments (non-empty content)
    pub fn visible_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(|s| !s.content.is_empty())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    /// Segment identifier
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    /// Width in character units
    pub width: usize,
    /// The text content to render
    pub text: String,
    /// Draw in the warning color
    pub warning: bool,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    /// Left-aligned segments with positions
    pub left: Vec<RenderedSegment>,
    /// Right-aligned segments with positions
    pub right: Vec<RenderedSegment>,
    /// X positions of separator lines (in character units)
    pub separator_positions: Vec<usize>,
}

impl StatusBar {
    /// Calculate the layout for rendering
    ///
    /// Right segments are placed first. When the bar is too narrow, the
    /// lowest-priority right segments are dropped, and the left message is
    /// truncated to the space that remains.
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut right: Vec<&StatusSegment> = self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Right && !s.content.is_empty())
            .collect();

        let right_width = |segs: &[&StatusSegment]| -> usize {
            let content: usize = segs
                .iter()
                .map(|s| s.content.char_width().max(s.min_width))
                .sum();
            content + segs.len().saturating_sub(1) * self.separator_spacing
        };
        while !right.is_empty() && right_width(&right) + self.padding * 2 > available_width {
            let Some((idx, _)) = right.iter().enumerate().min_by_key(|(_, s)| s.priority) else {
                break;
            };
            right.remove(idx);
        }

        // Layout right segments (from right edge, backwards)
        let mut right_segments = Vec::new();
        let mut separator_positions = Vec::new();
        let mut right_x = available_width.saturating_sub(self.padding);
        let mut prev_segment_start: Option<usize> = None;

        for seg in right.iter().rev() {
            let width = seg.content.char_width().max(seg.min_width);

            if let Some(prev_start) = prev_segment_start {
                let sep_center = prev_start.saturating_sub(self.separator_spacing / 2);
                separator_positions.push(sep_center);
                right_x = prev_start.saturating_sub(self.separator_spacing);
            }

            right_x = right_x.saturating_sub(width);

            right_segments.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
                warning: seg.content.is_warning(),
            });

            prev_segment_start = Some(right_x);
        }

        right_segments.reverse();
        separator_positions.reverse();

        // Left segments get whatever the right side left over
        let left_limit = prev_segment_start
            .map(|start| start.saturating_sub(self.separator_spacing))
            .unwrap_or_else(|| available_width.saturating_sub(self.padding));
        let mut left_segments = Vec::new();
        let mut left_x = self.padding;
        for seg in self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Left && !s.content.is_empty())
        {
            let room = left_limit.saturating_sub(left_x);
            if room == 0 {
                break;
            }
            let text: String = seg.content.display_text().chars().take(room).collect();
            let width = text.chars().count();
            left_segments.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text,
                warning: seg.content.is_warning(),
            });
            left_x += width + self.separator_spacing;
        }

        StatusBarLayout {
            left: left_segments,
            right: right_segments,
            separator_positions,
        }
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with the current editor state
pub fn sync_status_bar(model: &mut AppModel) {
    let locale = model.locale.as_ref();
    let editor = &model.editor;
    let grid = editor.grid();

    let message = model
        .ui
        .transient_message
        .as_ref()
        .filter(|m| !m.is_expired())
        .map(|m| m.text.clone())
        .unwrap_or_else(|| model.ui.status_message.clone());

    let size_text = locale.translate_with("status.size", &[("size", editor.size().to_string())]);

    let mode_key = if editor.maze_mode() {
        "toolbar.maze_mode"
    } else {
        "toolbar.normal_mode"
    };
    let mode_text = locale.translate(mode_key);

    let spawn = match grid.spawn_point() {
        Some((row, col)) => SegmentContent::Text(locale.translate_with(
            "status.spawn",
            &[("row", row.to_string()), ("col", col.to_string())],
        )),
        None => SegmentContent::Warning(locale.translate("status.no_spawn")),
    };

    let primary = grid.count(CellCode::Primary);
    let secondary = grid.count(CellCode::Secondary);
    let markers = if primary + secondary == 0 {
        SegmentContent::Empty
    } else {
        SegmentContent::Text(locale.translate_with(
            "status.markers",
            &[
                ("primary", primary.to_string()),
                ("secondary", secondary.to_string()),
            ],
        ))
    };

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::Message, SegmentContent::Text(message));
    bar.update_segment(SegmentId::Size, SegmentContent::Text(size_text));
    bar.update_segment(SegmentId::Mode, SegmentContent::Text(mode_text));
    bar.update_segment(SegmentId::Spawn, spawn);
    bar.update_segment(SegmentId::Markers, markers);
}
