//! Input dispatch for the presentation session.
//!
//! Key events are first mapped to semantic [`InputAction`]s, then dispatched
//! against whichever surface currently owns input. Handlers mutate the
//! presentation and session directly and return [`Effect`]s for everything
//! that touches the outside world (files, clipboard, browser, editor), which
//! the event loop executes. That split keeps every transition testable
//! without a terminal.

use crate::notes;
use crate::parser::{NOTES_SLIDE_TITLE, Presentation, Slide, SlideType};
use crate::song;
use crate::tui::session::{
    ActiveMode, MainMenuState, MenuChoice, SessionState, SongAction, SongPromptState,
};
use crossterm::event::{KeyCode, KeyEvent};

/// Where generated song prompts are meant to be pasted.
pub const SUNO_URL: &str = "https://suno.com";

/// Semantic input actions. One key maps to at most one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    NextSlide,
    PreviousSlide,
    MoveFocusUp,
    MoveFocusDown,
    ToggleOption,
    AddNote,
    JumpToNotes,
    Escape,
    Confirm,
}

/// Map a key event to its action, independent of mode.
pub fn map_key(key: &KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Right => Some(InputAction::NextSlide),
        KeyCode::Left => Some(InputAction::PreviousSlide),
        KeyCode::Up => Some(InputAction::MoveFocusUp),
        KeyCode::Down => Some(InputAction::MoveFocusDown),
        KeyCode::Char(' ') => Some(InputAction::ToggleOption),
        KeyCode::Insert => Some(InputAction::AddNote),
        KeyCode::F(1) => Some(InputAction::JumpToNotes),
        KeyCode::Esc => Some(InputAction::Escape),
        KeyCode::Enter => Some(InputAction::Confirm),
        _ => None,
    }
}

/// Side effects requested by dispatch, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rewrite the notes artifact. Failures are swallowed.
    PersistNotes,
    /// Delete the notes and song prompt artifacts, best-effort.
    DeleteArtifacts,
    /// Write the song prompt file. Failure surfaces as a status message.
    SavePrompt(String),
    /// Open a URL in the default browser.
    OpenUrl(String),
    /// Copy the prompt text to the clipboard.
    CopyPrompt(String),
    /// Open the song prompt file in the user's editor.
    OpenPromptInEditor,
    /// Run the blocking note capture sub-read.
    CaptureNote,
    /// Run the blocking genre selection sub-read.
    CaptureGenre,
    /// Leave the event loop.
    Exit,
}

/// Dispatch one action against the active surface.
pub fn dispatch(
    action: InputAction,
    presentation: &mut Presentation,
    session: &mut SessionState,
) -> Vec<Effect> {
    match session.mode.clone() {
        ActiveMode::SongPrompt(state) => handle_song_prompt(action, session, state),
        ActiveMode::MainMenu => handle_main_menu(action, presentation, session),
        ActiveMode::SlideView => handle_slide_view(action, presentation, session),
    }
}

fn handle_slide_view(
    action: InputAction,
    presentation: &mut Presentation,
    session: &mut SessionState,
) -> Vec<Effect> {
    let slide_count = presentation.slides.len();
    let current = session.current_slide_index;

    match action {
        InputAction::NextSlide => {
            if current + 1 < slide_count {
                session.current_slide_index = current + 1;
            }
            session.song_prompt = None;
            session.status_message = None;
            Vec::new()
        }
        InputAction::PreviousSlide => {
            session.current_slide_index = current.saturating_sub(1);
            session.song_prompt = None;
            session.status_message = None;
            Vec::new()
        }
        InputAction::MoveFocusDown => {
            let count = presentation.slides[current].interactive_count();
            session.focus_next(current, count);
            Vec::new()
        }
        InputAction::MoveFocusUp => {
            let count = presentation.slides[current].interactive_count();
            session.focus_previous(current, count);
            Vec::new()
        }
        InputAction::ToggleOption => {
            let slide = &mut presentation.slides[current];
            let focus = session.focus(current);
            if focus < slide.option_items.len() {
                slide.toggle_option(focus);
                vec![Effect::PersistNotes]
            } else {
                Vec::new()
            }
        }
        InputAction::Confirm => {
            let slide = &presentation.slides[current];
            let focus = session.focus(current);
            let link_index = focus.checked_sub(slide.option_items.len());
            match link_index.and_then(|i| slide.hyperlinks.get(i)) {
                Some(link) => vec![Effect::OpenUrl(link.url.clone())],
                None => Vec::new(),
            }
        }
        InputAction::AddNote => vec![Effect::CaptureNote],
        InputAction::JumpToNotes => {
            if presentation.notes_slide_index() == Some(current) {
                return Vec::new();
            }
            let notes_index = ensure_notes_slide(presentation, &session.notes);
            session.previous_slide_index = Some(current);
            session.current_slide_index = notes_index;
            Vec::new()
        }
        InputAction::Escape => {
            if presentation.notes_slide_index() == Some(current)
                && let Some(previous) = session.previous_slide_index
            {
                session.current_slide_index = previous.min(slide_count.saturating_sub(1));
                session.previous_slide_index = None;
            } else {
                session.mode = ActiveMode::MainMenu;
            }
            Vec::new()
        }
    }
}

fn handle_main_menu(
    action: InputAction,
    presentation: &mut Presentation,
    session: &mut SessionState,
) -> Vec<Effect> {
    match action {
        InputAction::MoveFocusDown => {
            session.menu.next();
            Vec::new()
        }
        InputAction::MoveFocusUp => {
            session.menu.previous();
            Vec::new()
        }
        InputAction::Escape => {
            session.mode = ActiveMode::SlideView;
            session.song_prompt = None;
            Vec::new()
        }
        InputAction::Confirm => match session.menu.focused {
            MenuChoice::Exit => vec![Effect::Exit],
            MenuChoice::StartNew => start_new(presentation, session),
            MenuChoice::CreateSong => vec![Effect::CaptureGenre],
        },
        _ => Vec::new(),
    }
}

fn handle_song_prompt(
    action: InputAction,
    session: &mut SessionState,
    mut state: SongPromptState,
) -> Vec<Effect> {
    match action {
        InputAction::MoveFocusDown => {
            state.next();
            session.mode = ActiveMode::SongPrompt(state);
            Vec::new()
        }
        InputAction::MoveFocusUp => {
            state.previous();
            session.mode = ActiveMode::SongPrompt(state);
            Vec::new()
        }
        InputAction::Escape => {
            session.mode = ActiveMode::SlideView;
            session.song_prompt = None;
            session.status_message = None;
            Vec::new()
        }
        InputAction::Confirm => {
            let Some(prompt) = session.song_prompt.clone() else {
                return Vec::new();
            };
            match state.focused {
                SongAction::OpenEditor => vec![Effect::OpenPromptInEditor],
                SongAction::CopyToClipboard => vec![Effect::CopyPrompt(prompt)],
                SongAction::OpenSuno => vec![Effect::OpenUrl(SUNO_URL.to_string())],
            }
        }
        _ => Vec::new(),
    }
}

/// Reset the session to a fresh run: deselect every option, drop all notes,
/// regenerate the notes slide, and rewrite the artifacts.
fn start_new(presentation: &mut Presentation, session: &mut SessionState) -> Vec<Effect> {
    for slide in &mut presentation.slides {
        slide.deselect_all_options();
    }
    session.notes.clear();
    ensure_notes_slide(presentation, &session.notes);
    session.current_slide_index = 0;
    session.previous_slide_index = None;
    session.focus_by_slide.clear();
    session.song_prompt = None;
    session.status_message = None;
    session.menu = MainMenuState::new();
    session.mode = ActiveMode::SlideView;
    vec![Effect::DeleteArtifacts, Effect::PersistNotes]
}

/// Make sure the presentation carries a notes slide mirroring the captured
/// notes, and return its index.
pub fn ensure_notes_slide(presentation: &mut Presentation, notes_list: &[String]) -> usize {
    let body = notes::notes_slide_body(notes_list);
    match presentation.notes_slide_index() {
        Some(index) => {
            let slide = &mut presentation.slides[index];
            slide.body_lines = body;
            slide.option_items.clear();
            slide.hyperlinks.clear();
            index
        }
        None => {
            let mut slide = Slide::new(NOTES_SLIDE_TITLE, SlideType::Notes);
            slide.body_lines = body;
            presentation.slides.push(slide);
            presentation.slides.len() - 1
        }
    }
}

/// Record a captured note. Whitespace-only input is discarded without
/// touching the session.
pub fn capture_note(
    presentation: &mut Presentation,
    session: &mut SessionState,
    text: &str,
) -> Vec<Effect> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    session.notes.push(trimmed.to_string());
    ensure_notes_slide(presentation, &session.notes);
    vec![Effect::PersistNotes]
}

/// Finish the song flow after genre selection: generate the prompt, switch
/// to the prompt surface, and request the prompt file write.
pub fn generate_song_prompt(
    presentation: &Presentation,
    session: &mut SessionState,
    genre: &str,
    customization: Option<&str>,
) -> Vec<Effect> {
    let prompt = song::generate_prompt(presentation, &session.notes, genre, customization);
    session.song_prompt = Some(prompt.clone());
    session.mode = ActiveMode::SongPrompt(SongPromptState::new());
    session.status_message = None;
    vec![Effect::SavePrompt(prompt)]
}

/// Handle a cancelled genre selection: stay in the menu with a status note.
pub fn cancel_song_prompt(session: &mut SessionState) {
    session.status_message = Some("Song creation cancelled.".to_string());
}

/// Handle a left click resolved to an option row: focus and toggle it.
pub fn click_option(
    presentation: &mut Presentation,
    session: &mut SessionState,
    option_index: usize,
) -> Vec<Effect> {
    if session.mode != ActiveMode::SlideView {
        return Vec::new();
    }
    let current = session.current_slide_index;
    let slide = &mut presentation.slides[current];
    if option_index >= slide.option_items.len() {
        return Vec::new();
    }
    session.set_focus(current, option_index);
    slide.toggle_option(option_index);
    vec![Effect::PersistNotes]
}
