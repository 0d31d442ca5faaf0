//! # deckmd
//!
//! Present a markdown file as full-screen terminal slides.
//!
//! ## Usage
//!
//! Present a file:
//! ```sh
//! deckmd talk.md
//! ```
//!
//! Without mouse support:
//! ```sh
//! deckmd --no-mouse talk.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use color_eyre::Result;
use deckmd::{notes, parser, style, tui};
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    if !args.file.exists() {
        eprintln!("Error: file not found: {}", args.file.display());
        process::exit(1);
    }
    let is_markdown = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
        .unwrap_or(false);
    if !is_markdown {
        eprintln!(
            "Error: expected a markdown file (.md): {}",
            args.file.display()
        );
        process::exit(1);
    }

    // Pick up artifacts written by older releases before loading.
    if let Err(e) = notes::migrate_legacy_artifact(&args.file) {
        eprintln!("Warning: could not migrate legacy notes artifact: {}", e);
    }

    // The notes artifact, when present, carries the previous run's
    // selections and notes and is preferred over the raw source.
    let content = match notes::load_content(&args.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let notes_path = notes::notes_path(&args.file);
    let mut presentation = parser::parse(&content, args.file.clone(), notes_path);

    let mut session = tui::session::SessionState::new();
    session.notes = notes::extract_notes(&presentation);
    if presentation.notes_slide_index().is_some() {
        tui::engine::ensure_notes_slide(&mut presentation, &session.notes);
    }

    let style = match &args.style {
        Some(path) => style::load_from_file(path, style::PresentationStyle::default()),
        None => style::load(&args.file),
    };

    let mouse_enabled = !args.no_mouse && tui::mouse::mouse_supported();

    let _guard = tui::TerminalGuard::acquire(mouse_enabled)?;
    let backend = ratatui::backend::CrosstermBackend::new(std::io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = tui::App::new(presentation, session, style);
    tui::run(&mut terminal, &mut app, mouse_enabled)
}
