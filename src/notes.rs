//! Notes artifact persistence.
//!
//! The session never writes back to the original file. Instead it maintains a
//! sibling artifact (`talk.md` -> `talk.notes.md`) holding the full annotated
//! document: every slide re-serialized with canonical task lines, followed by
//! the reserved "Presentation Notes" section. Saving is an idempotent full
//! rewrite through a temp file so a crash never leaves a half-written
//! artifact. On startup the artifact is preferred over the raw source, which
//! is how selections and notes survive restarts.

use crate::parser::{NOTES_SLIDE_TITLE, Presentation, Slide, SlideType};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Placeholder bullet written when no notes have been captured.
pub const NO_NOTES_PLACEHOLDER: &str = "- No notes captured yet.";

/// Derive the notes artifact path: same directory, same stem, `.notes`
/// infix, original extension (`.md` when the source has none).
pub fn notes_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("presentation");
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("md");
    source.with_file_name(format!("{}.notes.{}", stem, ext))
}

/// Older releases appended `.notes.md` to the whole filename instead of
/// replacing the extension (`talk.md` -> `talk.md.notes.md`).
pub fn legacy_notes_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("presentation.md");
    source.with_file_name(format!("{}.notes.md", name))
}

/// Derive the song prompt artifact path next to the source file.
pub fn song_prompt_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("presentation");
    source.with_file_name(format!("{}.songprompt.txt", stem))
}

/// Copy a legacy-named artifact forward to the current path, once and
/// non-destructively. The legacy file is left in place.
pub fn migrate_legacy_artifact(source: &Path) -> io::Result<()> {
    let legacy = legacy_notes_path(source);
    let current = notes_path(source);
    if legacy.exists() && !current.exists() {
        fs::copy(&legacy, &current)?;
    }
    Ok(())
}

/// Pick the content to parse: the notes artifact when present, then a
/// legacy-named artifact (covers a failed migration copy), then the raw
/// source document.
pub fn load_content(source: &Path) -> io::Result<String> {
    let artifact = notes_path(source);
    if artifact.exists() {
        return fs::read_to_string(&artifact);
    }
    let legacy = legacy_notes_path(source);
    if legacy.exists() {
        return fs::read_to_string(&legacy);
    }
    fs::read_to_string(source)
}

/// Body lines for the in-session notes slide mirroring the captured notes.
pub fn notes_slide_body(notes: &[String]) -> Vec<String> {
    if notes.is_empty() {
        vec![NO_NOTES_PLACEHOLDER.to_string()]
    } else {
        notes.iter().map(|n| format!("- {}", n)).collect()
    }
}

/// Serialize the full annotated document: every content slide with its
/// heading and canonical body, then the notes section.
pub fn build_annotated_markdown(presentation: &Presentation, notes: &[String]) -> String {
    let mut out = String::new();
    for slide in &presentation.slides {
        if matches!(slide.slide_type, SlideType::Notes | SlideType::MainMenu) {
            continue;
        }
        if !slide.title.is_empty() {
            let marker = match slide.slide_type {
                SlideType::Title => "#",
                _ => "##",
            };
            out.push_str(marker);
            out.push(' ');
            out.push_str(&slide.title);
            out.push('\n');
        }
        for line in &slide.body_lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("## ");
    out.push_str(NOTES_SLIDE_TITLE);
    out.push('\n');
    for line in notes_slide_body(notes) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Atomically rewrite the notes artifact.
pub fn save(presentation: &Presentation, notes: &[String]) -> io::Result<()> {
    let content = build_annotated_markdown(presentation, notes);
    let dir = presentation
        .notes_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(&presentation.notes_path)
        .map_err(|e| e.error)?;
    Ok(())
}

/// Best-effort delete; a missing file is not an error.
pub fn delete(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Recover captured notes from a previously saved artifact: the notes
/// slide's bullets minus the placeholder.
pub fn extract_notes(presentation: &Presentation) -> Vec<String> {
    presentation
        .notes_slide_index()
        .map(|idx| extract_from_slide(&presentation.slides[idx]))
        .unwrap_or_default()
}

fn extract_from_slide(slide: &Slide) -> Vec<String> {
    slide
        .body_lines
        .iter()
        .filter(|line| !line.eq_ignore_ascii_case(NO_NOTES_PLACEHOLDER))
        .filter_map(|line| line.strip_prefix("- "))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn deck(markup: &str) -> Presentation {
        parser::parse(
            markup,
            PathBuf::from("talk.md"),
            PathBuf::from("talk.notes.md"),
        )
    }

    #[test]
    fn test_notes_path_replaces_extension() {
        assert_eq!(
            notes_path(Path::new("/decks/talk.md")),
            PathBuf::from("/decks/talk.notes.md")
        );
        assert_eq!(
            notes_path(Path::new("talk.markdown")),
            PathBuf::from("talk.notes.markdown")
        );
        assert_eq!(notes_path(Path::new("talk")), PathBuf::from("talk.notes.md"));
    }

    #[test]
    fn test_legacy_path_appends_extension() {
        assert_eq!(
            legacy_notes_path(Path::new("/decks/talk.md")),
            PathBuf::from("/decks/talk.md.notes.md")
        );
    }

    #[test]
    fn test_song_prompt_path() {
        assert_eq!(
            song_prompt_path(Path::new("/decks/talk.md")),
            PathBuf::from("/decks/talk.songprompt.txt")
        );
    }

    #[test]
    fn test_annotated_markdown_includes_placeholder_when_empty() {
        let deck = deck("# Talk\nhello");
        let out = build_annotated_markdown(&deck, &[]);
        assert!(out.contains("# Talk\nhello"));
        assert!(out.contains("## Presentation Notes"));
        assert!(out.contains(NO_NOTES_PLACEHOLDER));
    }

    #[test]
    fn test_annotated_markdown_excludes_stale_notes_slide() {
        let deck = deck("# Talk\n## Presentation Notes\n- old");
        let notes = vec!["new".to_string()];
        let out = build_annotated_markdown(&deck, &notes);
        assert_eq!(out.matches("## Presentation Notes").count(), 1);
        assert!(out.contains("- new"));
        assert!(!out.contains("- old"));
    }

    #[test]
    fn test_annotated_markdown_preserves_selection_state() {
        let mut deck = deck("# Talk\n- [ ] ship it");
        deck.slides[0].toggle_option(0);
        let out = build_annotated_markdown(&deck, &[]);
        assert!(out.contains("- [X] ship it"));
    }

    #[test]
    fn test_save_then_extract_roundtrip() {
        let deck = deck("# Talk\n- [x] picked\nbody");
        let notes = vec!["first note".to_string(), "second note".to_string()];
        let annotated = build_annotated_markdown(&deck, &notes);

        let reloaded = parser::parse(
            &annotated,
            PathBuf::from("talk.md"),
            PathBuf::from("talk.notes.md"),
        );
        assert_eq!(extract_notes(&reloaded), notes);
        // Selection state also survives the round trip.
        assert!(reloaded.slides[0].option_items[0].is_selected);
    }

    #[test]
    fn test_extract_notes_drops_placeholder() {
        let reloaded = deck("# Talk\n## Presentation Notes\n- No notes captured yet.");
        assert!(extract_notes(&reloaded).is_empty());
    }

    #[test]
    fn test_extract_notes_drops_placeholder_case_insensitively() {
        let reloaded = deck("# Talk\n## Presentation Notes\n- no notes captured yet.");
        assert!(extract_notes(&reloaded).is_empty());
    }

    #[test]
    fn test_extract_notes_only_reads_bullets() {
        let reloaded = deck(
            "# Talk\n## Presentation Notes\nstray prose\n- kept note\n* not a note bullet\n-missing space",
        );
        assert_eq!(extract_notes(&reloaded), vec!["kept note".to_string()]);
    }

    #[test]
    fn test_notes_slide_body() {
        assert_eq!(notes_slide_body(&[]), vec![NO_NOTES_PLACEHOLDER.to_string()]);
        assert_eq!(
            notes_slide_body(&["remember".to_string()]),
            vec!["- remember".to_string()]
        );
    }

    #[test]
    fn test_migration_and_load_preference() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("talk.md");
        fs::write(&source, "# Raw").unwrap();

        // Legacy artifact is copied forward, non-destructively.
        let legacy = legacy_notes_path(&source);
        fs::write(&legacy, "# Migrated").unwrap();
        migrate_legacy_artifact(&source).unwrap();
        assert!(legacy.exists());
        assert_eq!(fs::read_to_string(notes_path(&source)).unwrap(), "# Migrated");

        // Load prefers the artifact over the raw source.
        assert_eq!(load_content(&source).unwrap(), "# Migrated");

        // A second migration never clobbers the current artifact.
        fs::write(notes_path(&source), "# Current").unwrap();
        migrate_legacy_artifact(&source).unwrap();
        assert_eq!(fs::read_to_string(notes_path(&source)).unwrap(), "# Current");
    }

    #[test]
    fn test_load_falls_back_to_legacy_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("talk.md");
        fs::write(&source, "# Raw").unwrap();
        fs::write(legacy_notes_path(&source), "# Legacy").unwrap();

        // No current artifact (e.g. the migration copy failed): the legacy
        // file still wins over the raw source.
        assert_eq!(load_content(&source).unwrap(), "# Legacy");
    }

    #[test]
    fn test_save_writes_artifact_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("talk.md");
        let mut deck = deck("# Talk\n- [ ] a");
        deck.source_path = source.clone();
        deck.notes_path = notes_path(&source);

        save(&deck, &["note".to_string()]).unwrap();
        let written = fs::read_to_string(&deck.notes_path).unwrap();
        assert!(written.contains("## Presentation Notes"));
        assert!(written.contains("- note"));
    }

    #[test]
    fn test_delete_missing_file_is_ok() {
        assert!(delete(Path::new("/definitely/not/here.notes.md")).is_ok());
    }
}
