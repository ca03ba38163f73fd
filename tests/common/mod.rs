//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mazegrid::config::EditorConfig;
use mazegrid::locale::StringTable;
use mazegrid::model::AppModel;
use mazegrid::theme::Theme;

/// Create a test model with an English locale and the built-in dark theme
pub fn test_model(size: usize, maze_mode: bool) -> AppModel {
    let config = EditorConfig {
        default_size: size,
        maze_mode,
        ..Default::default()
    };
    test_model_with_config(config)
}

/// Create a test model from an explicit config
///
/// Unlike `AppModel::new` this never reads user theme files.
pub fn test_model_with_config(config: EditorConfig) -> AppModel {
    AppModel::with_localizer(
        800,
        600,
        config,
        Theme::default(),
        Box::new(StringTable::with_locale("en")),
    )
}

/// Parse an exported `name = [[..], ..]` literal back into rows of values
///
/// Splits on brackets and commas only, like the game's loader would.
pub fn parse_literal(text: &str) -> (String, Vec<Vec<u8>>) {
    let (name, body) = text.split_once('=').expect("literal has an assignment");
    let body = body.trim();
    let inner = body
        .strip_prefix('[')
        .and_then(|b| b.strip_suffix(']'))
        .expect("outer brackets");

    let rows = inner
        .split(']')
        .map(|chunk| chunk.trim_start_matches(|c: char| c == ',' || c.is_whitespace()))
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .trim_start_matches('[')
                .split(',')
                .map(|v| v.trim().parse::<u8>().expect("cell value"))
                .collect()
        })
        .collect();

    (name.trim().to_string(), rows)
}

/// Grid codes as nested vectors for compact assertions
pub fn codes(model: &AppModel) -> Vec<Vec<i8>> {
    model.editor.grid().to_codes()
}
