//! Song prompt generation.
//!
//! Turns the current deck, selected options, and captured notes into a short
//! prompt suitable for pasting into suno.com. Each content section is capped
//! so the prompt stays concise no matter how large the deck is.

use crate::parser::{Presentation, SlideType};

/// Per-section cap on highlights, priorities, and notes.
const SECTION_LIMIT: usize = 6;

/// Generate the song prompt text.
///
/// Only content slides contribute: the notes slide is excluded, task lines
/// are skipped from the highlights (selected ones appear under priorities
/// instead), and blank lines are ignored.
pub fn generate_prompt(
    presentation: &Presentation,
    notes: &[String],
    genre: &str,
    customization: Option<&str>,
) -> String {
    let content_slides: Vec<_> = presentation
        .slides
        .iter()
        .filter(|s| matches!(s.slide_type, SlideType::Title | SlideType::Standard))
        .collect();

    let selected: Vec<&str> = content_slides
        .iter()
        .flat_map(|s| s.option_items.iter())
        .filter(|o| o.is_selected)
        .map(|o| o.text.as_str())
        .take(SECTION_LIMIT)
        .collect();

    let highlights: Vec<&str> = content_slides
        .iter()
        .flat_map(|s| s.body_lines.iter())
        .map(|l| l.as_str())
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with("- ["))
        .take(SECTION_LIMIT)
        .collect();

    let note_highlights: Vec<&str> = notes
        .iter()
        .map(|n| n.as_str())
        .filter(|n| !n.trim().is_empty())
        .take(SECTION_LIMIT)
        .collect();

    let mut lines: Vec<String> = vec![
        "Write a motivational meeting summary song with a clear chorus and two short verses."
            .to_string(),
        "Use a positive, collaborative tone suitable for a team recap.".to_string(),
        format!("Genre preference: {}.", genre),
        "Incorporate the following presentation highlights:".to_string(),
    ];

    for item in highlights {
        lines.push(format!("- {}", item));
    }

    if !selected.is_empty() {
        lines.push("Include these chosen priorities:".to_string());
        for item in selected {
            lines.push(format!("- {}", item));
        }
    }

    if !note_highlights.is_empty() {
        lines.push("Reflect these presenter notes:".to_string());
        for note in note_highlights {
            lines.push(format!("- {}", note));
        }
    }

    if let Some(custom) = customization.map(str::trim).filter(|c| !c.is_empty()) {
        lines.push("Additional customization from presenter:".to_string());
        lines.push(format!("- {}", custom));
    }

    lines.push("Keep the output concise and suitable for pasting into suno.com.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use std::path::PathBuf;

    fn deck(markup: &str) -> Presentation {
        parser::parse(
            markup,
            PathBuf::from("talk.md"),
            PathBuf::from("talk.notes.md"),
        )
    }

    #[test]
    fn test_prompt_sections_in_order() {
        let mut deck = deck("# Kickoff\nbig launch\n- [ ] hire\n- [x] ship");
        deck.slides[0].set_option_selected(1, true);
        let notes = vec!["great energy".to_string()];

        let prompt = generate_prompt(&deck, &notes, "Synthwave", Some("mention the Q3 roadmap"));
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(
            lines[0],
            "Write a motivational meeting summary song with a clear chorus and two short verses."
        );
        assert!(prompt.contains("Genre preference: Synthwave."));
        assert!(prompt.contains("- big launch"));
        assert!(prompt.contains("Include these chosen priorities:\n- ship"));
        assert!(prompt.contains("Reflect these presenter notes:\n- great energy"));
        assert!(prompt.contains("Additional customization from presenter:\n- mention the Q3 roadmap"));
        assert_eq!(
            *lines.last().unwrap(),
            "Keep the output concise and suitable for pasting into suno.com."
        );
    }

    #[test]
    fn test_task_lines_excluded_from_highlights() {
        let deck = deck("# S\n- [ ] option\nreal highlight");
        let prompt = generate_prompt(&deck, &[], "Pop", None);
        assert!(prompt.contains("- real highlight"));
        assert!(!prompt.contains("- [ ] option"));
    }

    #[test]
    fn test_notes_slide_excluded() {
        let deck = deck("# S\nbody\n## Presentation Notes\n- secret note line");
        let prompt = generate_prompt(&deck, &[], "Pop", None);
        assert!(!prompt.contains("secret note line"));
    }

    #[test]
    fn test_section_limits() {
        let body: String = (0..10).map(|i| format!("line {}\n", i)).collect();
        let deck = deck(&format!("# S\n{}", body));
        let notes: Vec<String> = (0..10).map(|i| format!("note {}", i)).collect();

        let prompt = generate_prompt(&deck, &notes, "Rock", None);
        assert!(prompt.contains("line 5"));
        assert!(!prompt.contains("line 6"));
        assert!(prompt.contains("note 5"));
        assert!(!prompt.contains("note 6"));
    }

    #[test]
    fn test_empty_sections_omitted() {
        let deck = deck("# S\nbody");
        let prompt = generate_prompt(&deck, &[], "Pop", None);
        assert!(!prompt.contains("Include these chosen priorities:"));
        assert!(!prompt.contains("Reflect these presenter notes:"));
        assert!(!prompt.contains("Additional customization"));
    }
}
