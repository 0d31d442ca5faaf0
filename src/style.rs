//! Presentation style loading.
//!
//! Styles come from a flat `Key: #RRGGBB` file. Lookup order: a `.style`
//! file sharing the presentation's stem, then `default.style` beside the
//! presentation, then `default.style` in the current directory. Entries are
//! applied individually; a malformed line or unknown key falls back to the
//! default for that entry only, never rejecting the whole file.

use ratatui::style::Color;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved presentation colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationStyle {
    pub header1: Color,
    pub header2: Color,
    pub normal_text: Color,
    pub hyperlink_text: Color,
    pub selector: Color,
    pub selection: Color,
}

impl Default for PresentationStyle {
    fn default() -> Self {
        Self {
            header1: Color::Rgb(0, 255, 255),
            header2: Color::Rgb(0, 128, 192),
            normal_text: Color::Rgb(255, 255, 255),
            hyperlink_text: Color::Rgb(0, 0, 255),
            selector: Color::Rgb(255, 0, 0),
            selection: Color::Rgb(0, 255, 0),
        }
    }
}

/// Locate and load the style for a presentation file.
pub fn load(presentation_path: &Path) -> PresentationStyle {
    for candidate in candidates(presentation_path) {
        if candidate.exists() {
            return load_from_file(&candidate, PresentationStyle::default());
        }
    }
    PresentationStyle::default()
}

fn candidates(presentation_path: &Path) -> Vec<PathBuf> {
    let own = presentation_path.with_extension("style");
    let beside = presentation_path
        .parent()
        .map(|dir| dir.join("default.style"))
        .unwrap_or_else(|| PathBuf::from("default.style"));
    let cwd = PathBuf::from("default.style");
    vec![own, beside, cwd]
}

/// Parse a style file on top of a base style. Unreadable files and bad
/// entries leave the base values in place.
pub fn load_from_file(style_path: &Path, base: PresentationStyle) -> PresentationStyle {
    let Ok(content) = fs::read_to_string(style_path) else {
        return base;
    };
    parse_style(&content, base)
}

fn parse_style(content: &str, base: PresentationStyle) -> PresentationStyle {
    let mut style = base;
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let Some(color) = parse_hex(value.trim()) else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "# header" => style.header1 = color,
            "## header" => style.header2 = color,
            "normal text" => style.normal_text = color,
            "hyperlink text" => style.hyperlink_text = color,
            "selector color" => style.selector = color,
            "selection color" => style.selection = color,
            _ => {}
        }
    }
    style
}

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_entries() {
        let style = parse_style(
            "# Header: #FF0000\n## Header: #00FF00\nSelector Color: #112233",
            PresentationStyle::default(),
        );
        assert_eq!(style.header1, Color::Rgb(255, 0, 0));
        assert_eq!(style.header2, Color::Rgb(0, 255, 0));
        assert_eq!(style.selector, Color::Rgb(0x11, 0x22, 0x33));
        // Untouched entries keep the defaults.
        assert_eq!(style.normal_text, PresentationStyle::default().normal_text);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let style = parse_style("hyperlink text: #ABCDEF", PresentationStyle::default());
        assert_eq!(style.hyperlink_text, Color::Rgb(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_malformed_entries_fall_back_individually() {
        let style = parse_style(
            "# Header: not-a-color\n## Header: #12345\nUnknown Key: #123456\nSelection Color: #010203\nno separator line",
            PresentationStyle::default(),
        );
        assert_eq!(style.header1, PresentationStyle::default().header1);
        assert_eq!(style.header2, PresentationStyle::default().header2);
        assert_eq!(style.selection, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_missing_file_returns_base() {
        let base = PresentationStyle::default();
        assert_eq!(load_from_file(Path::new("/no/such/file.style"), base), base);
    }

    #[test]
    fn test_lookup_prefers_presentation_style() {
        let dir = tempfile::tempdir().unwrap();
        let deck = dir.path().join("talk.md");
        fs::write(&deck, "# T").unwrap();
        fs::write(dir.path().join("default.style"), "# Header: #000001").unwrap();
        fs::write(dir.path().join("talk.style"), "# Header: #000002").unwrap();

        let style = load(&deck);
        assert_eq!(style.header1, Color::Rgb(0, 0, 2));
    }

    #[test]
    fn test_lookup_falls_back_to_default_beside_deck() {
        let dir = tempfile::tempdir().unwrap();
        let deck = dir.path().join("talk.md");
        fs::write(&deck, "# T").unwrap();
        fs::write(dir.path().join("default.style"), "## Header: #0A0B0C").unwrap();

        let style = load(&deck);
        assert_eq!(style.header2, Color::Rgb(0x0A, 0x0B, 0x0C));
    }
}
