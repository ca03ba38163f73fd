//! Window layout and hit-testing tests

mod common;

use common::test_model;
use mazegrid::layout::{HitTarget, Layout, ToolbarAction, ToolbarItemKind};
use mazegrid::messages::{AppMsg, GridMsg, Msg};
use mazegrid::update::update;

const ALL_ACTIONS: [ToolbarAction; 7] = [
    ToolbarAction::SizeDown,
    ToolbarAction::SizeUp,
    ToolbarAction::MazePreset,
    ToolbarAction::MazeMode,
    ToolbarAction::ExportFile,
    ToolbarAction::ExportLog,
    ToolbarAction::Language,
];

#[test]
fn test_every_action_has_a_button() {
    let model = test_model(15, false);
    let layout = Layout::for_model(&model);
    for action in ALL_ACTIONS {
        let rect = layout
            .button_rect(action)
            .unwrap_or_else(|| panic!("no button for {:?}", action));
        let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        assert_eq!(layout.hit_test(x, y), Some(HitTarget::Button(action)));
    }
}

#[test]
fn test_every_cell_hits_itself() {
    for size in [5, 15, 25] {
        let model = test_model(size, false);
        let layout = Layout::for_model(&model);
        for row in 0..size {
            for col in 0..size {
                let rect = layout.grid.cell_rect(row, col);
                let (x, y) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
                assert_eq!(
                    layout.hit_test(x, y),
                    Some(HitTarget::Cell { row, col }),
                    "size {} cell ({}, {})",
                    size,
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn test_grid_fits_between_toolbar_and_status_bar() {
    let model = test_model(25, true);
    let layout = Layout::for_model(&model);
    let bounds = layout.grid.bounds();
    assert!(bounds.y >= layout.toolbar.bottom());
    assert!(bounds.bottom() <= layout.status_bar.y);
    assert!(bounds.right() <= 800.0);
    assert!(layout.grid.cell_size >= 1.0);
}

#[test]
fn test_status_bar_is_not_a_target() {
    let model = test_model(5, false);
    let layout = Layout::for_model(&model);
    let y = layout.status_bar.y + layout.status_bar.height / 2.0;
    assert_eq!(layout.hit_test(400.0, y), None);
}

#[test]
fn test_labels_follow_locale_and_mode() {
    let mut model = test_model(5, false);
    let label_for = |model: &mazegrid::model::AppModel, action| {
        Layout::for_model(model)
            .items
            .into_iter()
            .find(|item| item.kind == ToolbarItemKind::Button(action))
            .map(|item| item.label)
            .unwrap()
    };

    assert_eq!(label_for(&model, ToolbarAction::MazeMode), "Normal Mode");
    update(&mut model, Msg::Grid(GridMsg::ToggleMazeMode));
    assert_eq!(label_for(&model, ToolbarAction::MazeMode), "Maze Mode");

    update(&mut model, Msg::App(AppMsg::SetLocale("de".to_string())));
    assert!(label_for(&model, ToolbarAction::Language).ends_with("Deutsch"));
}

#[test]
fn test_resize_changes_cell_size() {
    let mut model = test_model(9, false);
    let before = Layout::for_model(&model).grid.cell_size;
    update(&mut model, Msg::resize(1600, 1200));
    let after = Layout::for_model(&model).grid.cell_size;
    assert!(after > before);
}

#[test]
fn test_accent_button() {
    assert!(ToolbarAction::MazePreset.is_accent());
    assert!(!ToolbarAction::ExportLog.is_accent());
}
