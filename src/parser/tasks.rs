//! Task-list option detection and canonical rewriting.
//!
//! A task line is a list bullet (`-` or `*`) followed by a single space, a
//! bracketed state (`[ ]`, `[x]`, or `[X]`), a single space, and free text.
//! Leading whitespace is permitted. Anything else (no space after the bullet,
//! uppercase-only mismatch inside the brackets, missing text separator) is
//! treated as plain body text.

use regex::Regex;
use std::sync::LazyLock;

static TASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*] \[( |x|X)\] (.*)$").unwrap());

/// A recognized task line: its selection state and label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub is_selected: bool,
    pub text: String,
}

/// Parse a single line as a task-list option, if it matches.
pub fn parse_task_line(line: &str) -> Option<TaskLine> {
    let caps = TASK_LINE.captures(line)?;
    let state = caps.get(1).map(|m| m.as_str()).unwrap_or(" ");
    let text = caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string();
    Some(TaskLine {
        is_selected: state.eq_ignore_ascii_case("x"),
        text,
    })
}

/// Render a task line in the canonical two-state form.
///
/// The canonical form always uses a `-` bullet, no indentation, and an
/// uppercase `X` for the selected state, so rewritten documents re-parse to
/// the same model.
pub fn render_task_line(text: &str, is_selected: bool) -> String {
    if is_selected {
        format!("- [X] {}", text)
    } else {
        format!("- [ ] {}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselected_dash_bullet() {
        let task = parse_task_line("- [ ] Review the agenda").unwrap();
        assert!(!task.is_selected);
        assert_eq!(task.text, "Review the agenda");
    }

    #[test]
    fn test_selected_lowercase_and_uppercase() {
        assert!(parse_task_line("- [x] done").unwrap().is_selected);
        assert!(parse_task_line("- [X] done").unwrap().is_selected);
    }

    #[test]
    fn test_star_bullet_and_indentation() {
        let task = parse_task_line("   * [ ] Indented star option").unwrap();
        assert!(!task.is_selected);
        assert_eq!(task.text, "Indented star option");
    }

    #[test]
    fn test_non_task_lines_rejected() {
        assert_eq!(parse_task_line("-[ ] no space after bullet"), None);
        assert_eq!(parse_task_line("- [y] unknown state"), None);
        assert_eq!(parse_task_line("- [] empty brackets"), None);
        assert_eq!(parse_task_line("- [ ]no space after brackets"), None);
        assert_eq!(parse_task_line("plain text"), None);
    }

    #[test]
    fn test_canonical_rendering_roundtrip() {
        let line = render_task_line("Ship the release", true);
        assert_eq!(line, "- [X] Ship the release");
        let reparsed = parse_task_line(&line).unwrap();
        assert!(reparsed.is_selected);
        assert_eq!(reparsed.text, "Ship the release");

        let line = render_task_line("Ship the release", false);
        assert_eq!(line, "- [ ] Ship the release");
        assert!(!parse_task_line(&line).unwrap().is_selected);
    }
}
