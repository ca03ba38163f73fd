//! Export tests: literal format and the `maze.py` artifact

mod common;

use common::parse_literal;
use mazegrid::editor::GridEditor;
use mazegrid::export::{
    is_valid_variable_name, to_python_literal, write_export, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};

#[test]
fn test_literal_layout() {
    let editor = GridEditor::new(5, true);
    let text = to_python_literal(editor.grid(), "game_map");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "game_map = [");
    assert_eq!(lines[1], "    [1, 1, 1, 1, 1],");
    assert_eq!(lines[3], "    [1, 0, 1, 0, 1],");
    assert_eq!(lines[5], "    [1, 1, 1, 1, 1]");
    assert_eq!(lines[6], "]");
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_both_targets_share_the_serializer() {
    let mut editor = GridEditor::new(7, false);
    editor.toggle_cell(2, 4);
    assert_eq!(
        editor.export_grid("game_map"),
        to_python_literal(editor.grid(), "game_map")
    );
}

#[test]
fn test_write_export_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let editor = GridEditor::new(9, false);
    let content = editor.export_grid("game_map");

    let artifact = write_export(dir.path(), EXPORT_FILE_NAME, &content).unwrap();
    assert_eq!(artifact.path, dir.path().join("maze.py"));
    assert_eq!(artifact.mime_type, EXPORT_MIME_TYPE);
    assert_eq!(artifact.bytes, content.len());

    let written = std::fs::read_to_string(&artifact.path).unwrap();
    assert_eq!(written, content);
    let (_, rows) = parse_literal(&written);
    assert_eq!(rows.len(), 9);
}

#[test]
fn test_write_export_replaces_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), EXPORT_FILE_NAME, "old = []").unwrap();
    write_export(dir.path(), EXPORT_FILE_NAME, "new = []").unwrap();

    let written = std::fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
    assert_eq!(written, "new = []");
}

#[test]
fn test_write_export_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), EXPORT_FILE_NAME, "game_map = []").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["maze.py".to_string()]);
}

#[test]
fn test_write_export_creates_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("levels").join("one");
    let artifact = write_export(&nested, EXPORT_FILE_NAME, "game_map = []").unwrap();
    assert!(artifact.path.exists());
}

#[test]
fn test_write_export_fails_when_dir_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let result = write_export(&blocker, EXPORT_FILE_NAME, "game_map = []");
    assert!(result.is_err());
}

#[test]
fn test_variable_names() {
    assert!(is_valid_variable_name("game_map"));
    assert!(is_valid_variable_name("_level2"));
    assert!(!is_valid_variable_name("2level"));
    assert!(!is_valid_variable_name("game-map"));
    assert!(!is_valid_variable_name(""));
}
