//! # deckmd
//!
//! A markdown slide presenter library for the terminal.
//!
//! deckmd splits a markdown document into slides on `#` and `##` headings,
//! turns task-list lines into toggleable options, and runs an interactive
//! full-screen session with note capture, per-slide focus, and a notes
//! artifact that survives restarts.
//!
//! ## Example
//!
//! ```rust
//! use deckmd::parser::parse;
//! use std::path::PathBuf;
//!
//! let markup = "# Welcome\n- [ ] say hello\n## Agenda\nfirst point";
//! let deck = parse(
//!     markup,
//!     PathBuf::from("talk.md"),
//!     PathBuf::from("talk.notes.md"),
//! );
//!
//! assert_eq!(deck.slides.len(), 2);
//! assert_eq!(deck.title(), "Welcome");
//! assert_eq!(deck.slides[0].option_items.len(), 1);
//! ```

/// Desktop launch helpers (browser, clipboard, editor).
pub mod launcher;

/// Notes artifact persistence and path derivation.
pub mod notes;

/// Parser module for slide-oriented markdown documents.
pub mod parser;

/// Song prompt generation from the current deck and notes.
pub mod song;

/// Presentation style loading from flat `Key: #RRGGBB` files.
pub mod style;

/// TUI module for the interactive presentation session.
pub mod tui;

// Re-export commonly used types for convenience
pub use parser::{OptionBoxItem, Presentation, Slide, SlideType, parse};
pub use style::PresentationStyle;
pub use tui::App;
