//! Status bar tests: segment content and narrow-window layout

mod common;

use common::test_model;
use mazegrid::messages::{GridMsg, Msg};
use mazegrid::model::{SegmentContent, SegmentId, StatusBar};
use mazegrid::update::update;

fn content(model: &mazegrid::model::AppModel, id: SegmentId) -> SegmentContent {
    model
        .ui
        .status_bar
        .get_segment(id)
        .map(|s| s.content.clone())
        .unwrap()
}

#[test]
fn test_initial_segments() {
    let model = test_model(7, false);
    assert_eq!(
        content(&model, SegmentId::Message),
        SegmentContent::Text("Ready".to_string())
    );
    assert_eq!(
        content(&model, SegmentId::Size),
        SegmentContent::Text("Size 7".to_string())
    );
    assert_eq!(
        content(&model, SegmentId::Spawn),
        SegmentContent::Text("Spawn: row 1, col 1".to_string())
    );
    assert_eq!(content(&model, SegmentId::Markers), SegmentContent::Empty);
}

#[test]
fn test_spawn_moves_when_first_cell_is_filled() {
    let mut model = test_model(7, false);
    update(&mut model, Msg::toggle_cell(1, 1));
    assert_eq!(
        content(&model, SegmentId::Spawn),
        SegmentContent::Text("Spawn: row 1, col 2".to_string())
    );
}

#[test]
fn test_missing_spawn_is_a_warning() {
    let mut model = test_model(5, false);
    update(&mut model, Msg::Grid(GridMsg::ApplyMazePreset));
    for (row, col) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
        update(&mut model, Msg::toggle_cell(row, col));
    }
    assert!(content(&model, SegmentId::Spawn).is_warning());
}

#[test]
fn test_marker_counts() {
    let mut model = test_model(7, false);
    update(&mut model, Msg::toggle_cell(1, 1));
    update(&mut model, Msg::toggle_cell(2, 2));
    update(&mut model, Msg::toggle_cell(2, 2));
    assert_eq!(
        content(&model, SegmentId::Markers),
        SegmentContent::Text("1 primary, 1 secondary".to_string())
    );
}

#[test]
fn test_narrow_layout_keeps_size_segment() {
    let model = test_model(25, false);
    let wide = model.ui.status_bar.layout(200);
    let narrow = model.ui.status_bar.layout(30);

    assert!(narrow.right.len() < wide.right.len());
    assert!(narrow.right.iter().any(|s| s.id == SegmentId::Size));
}

#[test]
fn test_empty_bar_layout() {
    let bar = StatusBar::new();
    let layout = bar.layout(80);
    assert!(layout.right.is_empty());
    assert!(layout.separator_positions.is_empty());
}
