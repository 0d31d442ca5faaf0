//! Per-run session state.
//!
//! Tracks the slide cursor, the per-slide focus over interactive elements,
//! captured notes, and which modal surface currently owns input. The modal
//! surface is a tagged enum rather than a set of booleans, so exactly one
//! surface is active at a time and dispatch priority is the match order.

use std::collections::HashMap;

/// Which surface currently owns key input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveMode {
    /// Normal slide navigation.
    SlideView,
    /// The main menu overlay.
    MainMenu,
    /// The song prompt action view.
    SongPrompt(SongPromptState),
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    StartNew,
    CreateSong,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Exit, MenuChoice::StartNew, MenuChoice::CreateSong];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::StartNew => "Start New",
            MenuChoice::CreateSong => "Create Song",
        }
    }
}

/// Cyclic focus over the main menu entries. The focused entry persists
/// across menu open/close within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainMenuState {
    pub focused: MenuChoice,
}

impl MainMenuState {
    pub fn new() -> Self {
        Self {
            focused: MenuChoice::Exit,
        }
    }

    fn position(self) -> usize {
        MenuChoice::ALL
            .iter()
            .position(|&c| c == self.focused)
            .unwrap_or(0)
    }

    pub fn next(&mut self) {
        let idx = self.position();
        self.focused = MenuChoice::ALL[(idx + 1) % MenuChoice::ALL.len()];
    }

    pub fn previous(&mut self) {
        let idx = self.position();
        self.focused = MenuChoice::ALL[(idx + MenuChoice::ALL.len() - 1) % MenuChoice::ALL.len()];
    }
}

impl Default for MainMenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions offered once a song prompt has been generated, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongAction {
    OpenEditor,
    CopyToClipboard,
    OpenSuno,
}

impl SongAction {
    pub const ALL: [SongAction; 3] = [
        SongAction::OpenEditor,
        SongAction::CopyToClipboard,
        SongAction::OpenSuno,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SongAction::OpenEditor => "Open prompt in editor",
            SongAction::CopyToClipboard => "Copy prompt to clipboard",
            SongAction::OpenSuno => "Open suno.com",
        }
    }
}

/// Cyclic focus over the song prompt actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongPromptState {
    pub focused: SongAction,
}

impl SongPromptState {
    pub fn new() -> Self {
        Self {
            focused: SongAction::OpenEditor,
        }
    }

    fn position(self) -> usize {
        SongAction::ALL
            .iter()
            .position(|&a| a == self.focused)
            .unwrap_or(0)
    }

    pub fn next(&mut self) {
        let idx = self.position();
        self.focused = SongAction::ALL[(idx + 1) % SongAction::ALL.len()];
    }

    pub fn previous(&mut self) {
        let idx = self.position();
        self.focused = SongAction::ALL[(idx + SongAction::ALL.len() - 1) % SongAction::ALL.len()];
    }
}

impl Default for SongPromptState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state of one presentation run.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Slide the viewer is on.
    pub current_slide_index: usize,
    /// Where to return after a notes-slide jump.
    pub previous_slide_index: Option<usize>,
    /// Which surface owns input.
    pub mode: ActiveMode,
    /// Persistent main menu focus.
    pub menu: MainMenuState,
    /// Captured notes, in capture order.
    pub notes: Vec<String>,
    /// Focus index per slide, kept when navigating away and back.
    pub focus_by_slide: HashMap<usize, usize>,
    /// The generated song prompt, while the song flow is relevant.
    pub song_prompt: Option<String>,
    /// Transient status line text.
    pub status_message: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_slide_index: 0,
            previous_slide_index: None,
            mode: ActiveMode::SlideView,
            menu: MainMenuState::new(),
            notes: Vec::new(),
            focus_by_slide: HashMap::new(),
            song_prompt: None,
            status_message: None,
        }
    }

    /// Focus index on the given slide. Every slide starts out focusing its
    /// first element; the map is only populated once focus moves.
    pub fn focus(&self, slide_index: usize) -> usize {
        self.focus_by_slide.get(&slide_index).copied().unwrap_or(0)
    }

    /// Move focus forward over `count` elements, wrapping to the first.
    pub fn focus_next(&mut self, slide_index: usize, count: usize) {
        if count == 0 {
            return;
        }
        let next = (self.focus(slide_index) + 1) % count;
        self.focus_by_slide.insert(slide_index, next);
    }

    /// Move focus backward over `count` elements, wrapping to the last.
    pub fn focus_previous(&mut self, slide_index: usize, count: usize) {
        if count == 0 {
            return;
        }
        let prev = (self.focus(slide_index) + count - 1) % count;
        self.focus_by_slide.insert(slide_index, prev);
    }

    /// Focus a specific element on a slide.
    pub fn set_focus(&mut self, slide_index: usize, focus: usize) {
        self.focus_by_slide.insert(slide_index, focus);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
