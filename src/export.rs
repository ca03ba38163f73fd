//! Grid export as a Python list literal
//!
//! One serializer, two targets: the log channel and a `maze.py` file.
//! Cells are written as absolute values, so border walls (`-1`) come out as
//! `1`, the same as an interior primary marker.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::grid::Grid;

/// File name of the exported artifact
pub const EXPORT_FILE_NAME: &str = "maze.py";
/// MIME type of the exported artifact
pub const EXPORT_MIME_TYPE: &str = "text/x-python";
/// Variable the game imports (`from maze import game_map`)
pub const DEFAULT_VARIABLE_NAME: &str = "game_map";

const ROW_INDENT: &str = "    ";

/// Where an export goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// Diagnostic channel only
    Log,
    /// `maze.py` in the export directory
    File,
}

/// Serialize a grid as `name = [\n    [a, b, ...],\n    ...\n]`
pub fn to_python_literal(grid: &Grid, variable_name: &str) -> String {
    let rows: Vec<String> = grid
        .rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.export_value().to_string())
                .collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();

    format!(
        "{} = [\n{}{}\n]",
        variable_name,
        ROW_INDENT,
        rows.join(&format!(",\n{}", ROW_INDENT))
    )
}

/// Check that a name can be used as a Python identifier
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A finished export artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub bytes: usize,
}

/// Write `content` to `dir/file_name` through a scoped temporary file
///
/// The temporary file is created next to the destination, written, flushed
/// and then persisted over the destination in one rename. If any step
/// fails the temporary file is dropped and removed, so no partial artifact
/// is left behind.
pub fn write_export(dir: &Path, file_name: &str, content: &str) -> Result<ExportArtifact> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut staged = tempfile::Builder::new()
        .prefix(".maze-export-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    staged
        .write_all(content.as_bytes())
        .context("Failed to write export content")?;
    staged.flush().context("Failed to flush export content")?;

    let destination = dir.join(file_name);
    staged
        .persist(&destination)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move export into {}", destination.display()))?;

    tracing::debug!(
        "Exported {} bytes ({}) to {}",
        content.len(),
        EXPORT_MIME_TYPE,
        destination.display()
    );

    Ok(ExportArtifact {
        path: destination,
        mime_type: EXPORT_MIME_TYPE,
        bytes: content.len(),
    })
}

/// Directory exports go to when none is configured
///
/// The user's download directory when there is one, otherwise the
/// current working directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::regenerate;

    #[test]
    fn test_literal_for_initial_five() {
        let text = to_python_literal(&regenerate(5, false), "game_map");
        assert_eq!(
            text,
            "game_map = [\n    [1, 1, 1, 1, 1],\n    [1, 0, 0, 0, 1],\n    [1, 0, 0, 0, 1],\n    [1, 0, 0, 0, 1],\n    [1, 1, 1, 1, 1]\n]"
        );
    }

    #[test]
    fn test_literal_uses_variable_name() {
        let text = to_python_literal(&regenerate(3, false), "level_one");
        assert!(text.starts_with("level_one = [\n"));
        assert!(text.ends_with("\n]"));
    }

    #[test]
    fn test_literal_for_empty_grid() {
        let text = to_python_literal(&regenerate(0, false), "game_map");
        assert_eq!(text, "game_map = [\n    \n]");
    }

    #[test]
    fn test_valid_variable_names() {
        assert!(is_valid_variable_name("game_map"));
        assert!(is_valid_variable_name("_map2"));
        assert!(!is_valid_variable_name("2map"));
        assert!(!is_valid_variable_name("game-map"));
        assert!(!is_valid_variable_name(""));
    }
}
