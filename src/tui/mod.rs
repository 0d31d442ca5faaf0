//! Interactive terminal session.
//!
//! Single-threaded blocking event loop: draw, read one event, dispatch,
//! execute effects, repeat. Blocking sub-reads (note capture, genre
//! selection) run their own draw/read loops and return before the main loop
//! continues, so exactly one reader owns the terminal at any moment.

pub mod app;
pub mod banner;
pub mod engine;
pub mod mouse;
pub mod session;
pub mod ui;

pub use app::App;

use crate::tui::app::{CaptureState, GENRES, GenreChoice};
use crate::tui::engine::Effect;
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{Stdout, stdout};

/// Scoped terminal ownership. Raw mode, the alternate screen, and mouse
/// capture are released on drop, on every exit path including panics.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    pub fn acquire(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen).inspect_err(|_| {
            disable_raw_mode().ok();
        })?;
        if mouse {
            stdout().execute(EnableMouseCapture).ok();
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.mouse {
            stdout().execute(DisableMouseCapture).ok();
        }
        stdout().execute(LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    }
}

/// Drive the session until the user exits through the menu.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mouse_enabled: bool,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = engine::map_key(&key) else {
                    continue;
                };
                for effect in app.handle_action(action) {
                    match effect {
                        Effect::CaptureNote => {
                            if let Some(text) = capture_note(terminal, app)? {
                                app.note_captured(&text);
                            }
                        }
                        Effect::CaptureGenre => {
                            let choice = capture_genre(terminal, app)?;
                            app.genre_chosen(choice);
                        }
                        Effect::OpenPromptInEditor => {
                            run_editor(terminal, app, mouse_enabled)?;
                        }
                        _ => {}
                    }
                }
                if app.should_exit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    app.handle_click(mouse_event.row);
                }
            }
            _ => {}
        }
    }
}

/// Blocking free-text read for a note. Enter submits, Esc cancels.
fn capture_note(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<Option<String>> {
    app.capture = Some(CaptureState::Note {
        buffer: String::new(),
    });

    let result = loop {
        terminal.draw(|frame| ui::render(frame, app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(CaptureState::Note { buffer }) = app.capture.as_mut() else {
            break None;
        };
        match key.code {
            KeyCode::Enter => break Some(std::mem::take(buffer)),
            KeyCode::Esc => break None,
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => buffer.push(c),
            _ => {}
        }
    };

    app.capture = None;
    Ok(result)
}

/// Blocking genre selection: a cyclic single-select list with a free-text
/// fallback behind the "Custom..." entry. Esc cancels (or backs out of the
/// free-text phase).
fn capture_genre(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<Option<GenreChoice>> {
    app.capture = Some(CaptureState::Genre {
        selected: 0,
        custom: None,
    });

    let result = loop {
        terminal.draw(|frame| ui::render(frame, app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(CaptureState::Genre { selected, custom }) = app.capture.as_mut() else {
            break None;
        };

        if let Some(buffer) = custom {
            match key.code {
                KeyCode::Enter => {
                    let text = buffer.trim().to_string();
                    if text.is_empty() {
                        break None;
                    }
                    break Some(GenreChoice {
                        genre: "Custom".to_string(),
                        customization: Some(text),
                    });
                }
                KeyCode::Esc => *custom = None,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Up => *selected = (*selected + GENRES.len() - 1) % GENRES.len(),
                KeyCode::Down => *selected = (*selected + 1) % GENRES.len(),
                KeyCode::Enter => {
                    if *selected == GENRES.len() - 1 {
                        *custom = Some(String::new());
                    } else {
                        break Some(GenreChoice {
                            genre: GENRES[*selected].to_string(),
                            customization: None,
                        });
                    }
                }
                KeyCode::Esc => break None,
                _ => {}
            }
        }
    };

    app.capture = None;
    Ok(result)
}

/// Suspend the TUI, run the user's editor on the prompt file, and restore.
fn run_editor(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mouse_enabled: bool,
) -> Result<()> {
    if mouse_enabled {
        stdout().execute(DisableMouseCapture).ok();
    }
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    app.open_prompt_in_editor();

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    if mouse_enabled {
        stdout().execute(EnableMouseCapture).ok();
    }
    terminal.clear()?;
    Ok(())
}
