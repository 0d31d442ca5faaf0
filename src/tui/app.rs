//! Application state and effect execution.
//!
//! [`App`] owns everything the event loop and renderer need: the parsed
//! presentation, the session state, the resolved style, and the handles to
//! the outside world. Effects returned by dispatch are executed here; the
//! few that need to own the terminal (blocking sub-reads, the editor) are
//! handed back to the loop instead.

use crate::launcher;
use crate::notes;
use crate::parser::Presentation;
use crate::style::PresentationStyle;
use crate::tui::engine::{self, Effect, InputAction};
use crate::tui::mouse::OptionRowMap;
use crate::tui::session::SessionState;
use std::fs;
use std::path::PathBuf;

/// Genre choices offered by the song flow, ending with the free-text entry.
pub const GENRES: [&str; 7] = [
    "Pop",
    "Rock",
    "Country",
    "Hip-Hop",
    "Electronic",
    "Jazz",
    "Custom...",
];

/// Outcome of the genre selection sub-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreChoice {
    pub genre: String,
    pub customization: Option<String>,
}

/// Overlay state while a blocking sub-read owns the terminal. Only used for
/// rendering; the sub-read loops drive the actual input.
#[derive(Debug, Clone)]
pub enum CaptureState {
    /// Free-text note entry.
    Note { buffer: String },
    /// Genre list selection, optionally collecting the custom text.
    Genre {
        selected: usize,
        custom: Option<String>,
    },
}

/// Main application state.
pub struct App {
    pub presentation: Presentation,
    pub session: SessionState,
    pub style: PresentationStyle,
    /// Row-to-option table rebuilt by the renderer every frame.
    pub row_map: OptionRowMap,
    /// Active sub-read overlay, if any.
    pub capture: Option<CaptureState>,
    /// Where the generated song prompt is written.
    pub song_prompt_path: PathBuf,
    /// Kept alive for the lifetime of the app so X11 paste keeps working.
    clipboard: Option<arboard::Clipboard>,
    pub should_exit: bool,
}

impl App {
    pub fn new(presentation: Presentation, session: SessionState, style: PresentationStyle) -> Self {
        let song_prompt_path = notes::song_prompt_path(&presentation.source_path);
        Self {
            presentation,
            session,
            style,
            row_map: OptionRowMap::new(),
            capture: None,
            song_prompt_path,
            clipboard: None,
            should_exit: false,
        }
    }

    /// Dispatch an action and execute its immediate effects. Effects that
    /// need the terminal are returned for the event loop.
    pub fn handle_action(&mut self, action: InputAction) -> Vec<Effect> {
        let effects = engine::dispatch(action, &mut self.presentation, &mut self.session);
        self.apply_effects(effects)
    }

    /// Resolve a left click against the current row table.
    pub fn handle_click(&mut self, row: u16) {
        if let Some(option_index) = self.row_map.hit(row) {
            let effects =
                engine::click_option(&mut self.presentation, &mut self.session, option_index);
            self.apply_effects(effects);
        }
    }

    /// Record a captured note and refresh the notes slide.
    pub fn note_captured(&mut self, text: &str) {
        let effects = engine::capture_note(&mut self.presentation, &mut self.session, text);
        self.apply_effects(effects);
    }

    /// Finish or cancel the song flow after genre selection.
    pub fn genre_chosen(&mut self, choice: Option<GenreChoice>) {
        match choice {
            Some(choice) => {
                let effects = engine::generate_song_prompt(
                    &self.presentation,
                    &mut self.session,
                    &choice.genre,
                    choice.customization.as_deref(),
                );
                self.apply_effects(effects);
            }
            None => engine::cancel_song_prompt(&mut self.session),
        }
    }

    /// Execute inline effects, keeping the terminal-owning ones for the loop.
    fn apply_effects(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut deferred = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistNotes => self.persist_notes(),
                Effect::DeleteArtifacts => self.delete_artifacts(),
                Effect::SavePrompt(text) => self.save_prompt(&text),
                Effect::OpenUrl(url) => {
                    let result = launcher::open_url(&url);
                    self.set_status(result);
                }
                Effect::CopyPrompt(text) => {
                    let result = launcher::copy_to_clipboard(&mut self.clipboard, &text);
                    self.set_status(result);
                }
                Effect::Exit => self.should_exit = true,
                Effect::OpenPromptInEditor | Effect::CaptureNote | Effect::CaptureGenre => {
                    deferred.push(effect);
                }
            }
        }
        deferred
    }

    /// Rewrite the notes artifact. A failing save is invisible; the session
    /// keeps running on in-memory state.
    pub fn persist_notes(&mut self) {
        let _ = notes::save(&self.presentation, &self.session.notes);
    }

    fn delete_artifacts(&mut self) {
        let _ = notes::delete(&self.presentation.notes_path);
        let _ = notes::delete(&self.song_prompt_path);
    }

    fn save_prompt(&mut self, text: &str) {
        if fs::write(&self.song_prompt_path, text).is_err() {
            self.session.status_message = Some("Unable to save song prompt file.".to_string());
        }
    }

    /// Open the saved prompt file in the user's editor. The loop suspends
    /// the terminal around this call.
    pub fn open_prompt_in_editor(&mut self) {
        let path = self.song_prompt_path.clone();
        let result = launcher::open_in_editor(&path);
        self.set_status(result);
    }

    fn set_status(&mut self, result: Result<String, String>) {
        self.session.status_message = Some(match result {
            Ok(message) => message,
            Err(message) => message,
        });
    }
}
