//! Theme loading tests

use mazegrid::grid::CellCode;
use mazegrid::theme::{Color, Theme, BUILTIN_THEMES, DEFAULT_DARK_YAML, DEFAULT_LIGHT_YAML};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!(color, Color::rgb(0x1E, 0x1E, 0x1E));
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("#12").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
}

#[test]
fn test_color_to_argb_u32() {
    assert_eq!(Color::rgb(0x1E, 0x1E, 0x1E).to_argb_u32(), 0xFF1E1E1E);
}

#[test]
fn test_builtin_yaml_parses() {
    assert_eq!(Theme::from_yaml(DEFAULT_DARK_YAML).unwrap().name, "Default Dark");
    assert_eq!(
        Theme::from_yaml(DEFAULT_LIGHT_YAML).unwrap().name,
        "Default Light"
    );
}

#[test]
fn test_all_builtins_load_by_id() {
    for builtin in BUILTIN_THEMES {
        assert!(
            Theme::from_builtin(builtin.id).is_ok(),
            "theme {} failed",
            builtin.id
        );
    }
    assert!(Theme::from_builtin("no-such-theme").is_err());
}

#[test]
fn test_every_cell_code_has_a_color() {
    let theme = Theme::default();
    let colors: Vec<Color> = [
        CellCode::Wall,
        CellCode::Empty,
        CellCode::Primary,
        CellCode::Secondary,
    ]
    .into_iter()
    .map(|c| theme.grid.cell_color(c))
    .collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_optional_colors_fall_back() {
    let yaml = r##"
version: 1
name: "Minimal"
ui:
  window: { background: "#000000", foreground: "#FFFFFF" }
  toolbar: { background: "#111111", foreground: "#FFFFFF", border: "#222222" }
  button:
    background: "#333333"
    background_hover: "#444444"
    background_pressed: "#555555"
    foreground: "#FFFFFF"
    border: "#666666"
  grid:
    empty: "#000000"
    primary: "#FF0000"
    secondary: "#00FF00"
    wall: "#777777"
    label: "#FFFFFF"
    selection: "#FFFF00"
  status_bar: { background: "#111111", foreground: "#EEEEEE" }
"##;
    let theme = Theme::from_yaml(yaml).unwrap();
    assert_eq!(theme.grid.wall_outline, theme.grid.wall);
    assert_eq!(theme.button.focus_ring, theme.button.border);
}
