//! Slide rendering.
//!
//! Draws the current slide (title band, body, status bar) and whichever
//! overlay is active. While drawing the body it records the terminal row of
//! every visible option into the app's row map, which is what mouse clicks
//! are resolved against.

use crate::parser::{HyperlinkItem, Slide, SlideType};
use crate::style::PresentationStyle;
use crate::tui::app::{App, CaptureState, GENRES};
use crate::tui::banner;
use crate::tui::session::{ActiveMode, MenuChoice, SongAction};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &mut App) {
    let banner_rows = banner::render(&current_slide(app).title, frame.area().width as usize);
    // Large-type titles only when the slide body still gets room.
    let banner = (frame.area().height >= banner_rows.len() as u16 + 8).then_some(banner_rows);
    let title_height = match &banner {
        Some(rows) => rows.len() as u16 + 1,
        None => 2,
    };

    let areas = Layout::vertical([
        Constraint::Length(title_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_title(frame, app, areas[0], banner);
    render_body(frame, app, areas[1]);
    render_status(frame, app, areas[2]);

    match &app.session.mode {
        ActiveMode::MainMenu => render_menu(frame, app),
        ActiveMode::SongPrompt(_) => render_song_prompt(frame, app),
        ActiveMode::SlideView => {}
    }

    if app.capture.is_some() {
        render_capture(frame, app);
    }
}

fn current_slide(app: &App) -> &Slide {
    &app.presentation.slides[app.session.current_slide_index]
}

fn render_title(frame: &mut Frame, app: &App, area: Rect, banner: Option<Vec<String>>) {
    let slide = current_slide(app);
    let color = match slide.slide_type {
        SlideType::Title => app.style.header1,
        _ => app.style.header2,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let title = match banner {
        Some(rows) => {
            // Rows carry their own centering padding.
            let lines: Vec<Line> = rows
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style)))
                .collect();
            Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM))
        }
        None => Paragraph::new(Line::from(Span::styled(slide.title.clone(), style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM)),
    };
    frame.render_widget(title, area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    app.row_map.clear();

    let slide = &app.presentation.slides[app.session.current_slide_index];
    let focus = app.session.focus(app.session.current_slide_index);
    let option_count = slide.option_items.len();
    let style = app.style;

    let mut lines: Vec<Line> = Vec::with_capacity(slide.body_lines.len());
    let mut rows: Vec<(u16, usize)> = Vec::new();

    for (index, raw) in slide.body_lines.iter().enumerate() {
        let option = slide
            .option_items
            .iter()
            .position(|item| item.line_index == index);

        let line = if let Some(option_index) = option {
            let item = &slide.option_items[option_index];
            let focused = focus == option_index;
            let marker_style = if item.is_selected {
                Style::default().fg(style.selection).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(style.normal_text)
            };
            let prefix = if focused {
                Span::styled("> ", Style::default().fg(style.selector).add_modifier(Modifier::BOLD))
            } else {
                Span::raw("  ")
            };
            let marker = if item.is_selected { "[X] " } else { "[ ] " };

            if (index as u16) < area.height {
                rows.push((area.y + index as u16, option_index));
            }

            Line::from(vec![
                prefix,
                Span::styled(marker, marker_style),
                Span::styled(item.text.clone(), marker_style),
            ])
        } else {
            let links: Vec<_> = slide
                .hyperlinks
                .iter()
                .enumerate()
                .filter(|(_, l)| l.line_index == index)
                .collect();
            if links.is_empty() {
                Line::from(Span::styled(
                    raw.clone(),
                    Style::default().fg(style.normal_text),
                ))
            } else {
                link_line(raw, &links, focus, option_count, &style)
            }
        };
        lines.push(line);
    }

    for (row, option_index) in rows {
        app.row_map.insert(row, option_index);
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render a body line containing hyperlinks, styling each link's display
/// text and marking the focused one.
fn link_line(
    raw: &str,
    links: &[(usize, &HyperlinkItem)],
    focus: usize,
    option_count: usize,
    style: &PresentationStyle,
) -> Line<'static> {
    let normal = Style::default().fg(style.normal_text);
    let link_style = Style::default()
        .fg(style.hyperlink_text)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans: Vec<Span> = Vec::new();
    let mut rest = raw;

    for (link_index, link) in links {
        let focused = focus == option_count + link_index;
        let pattern = format!("[{}]({})", link.text, link.url);
        let Some(at) = rest.find(&pattern) else {
            continue;
        };
        if at > 0 {
            spans.push(Span::styled(rest[..at].to_string(), normal));
        }
        let text_style = if focused {
            link_style
                .fg(style.selector)
                .add_modifier(Modifier::BOLD)
        } else {
            link_style
        };
        spans.push(Span::styled(link.text.clone(), text_style));
        rest = &rest[at + pattern.len()..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), normal));
    }
    Line::from(spans)
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.session.status_message {
        Some(message) => format!(" {}", message),
        None => format!(
            " Slide {}/{} | Left/Right slides | Up/Down focus | Space toggle | Enter open | Ins note | F1 notes | Esc menu",
            app.session.current_slide_index + 1,
            app.presentation.slides.len()
        ),
    };
    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

fn render_menu(frame: &mut Frame, app: &App) {
    let width = MenuChoice::ALL
        .iter()
        .map(|c| c.label().width())
        .max()
        .unwrap_or(0) as u16
        + 8;
    let area = centered_rect(width, MenuChoice::ALL.len() as u16 + 2, frame.area());

    let lines: Vec<Line> = MenuChoice::ALL
        .iter()
        .map(|&choice| {
            if choice == app.session.menu.focused {
                Line::from(Span::styled(
                    format!("> {}", choice.label()),
                    Style::default()
                        .fg(app.style.selection)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", choice.label()))
            }
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Menu ")),
        area,
    );
}

fn render_song_prompt(frame: &mut Frame, app: &App) {
    let prompt = app.session.song_prompt.as_deref().unwrap_or("");
    let preview: Vec<&str> = prompt.lines().take(10).collect();

    let focused = match &app.session.mode {
        ActiveMode::SongPrompt(state) => state.focused,
        _ => SongAction::OpenEditor,
    };

    let mut lines: Vec<Line> = preview
        .iter()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(app.style.normal_text))))
        .collect();
    if prompt.lines().count() > preview.len() {
        lines.push(Line::from("..."));
    }
    lines.push(Line::from(""));
    for action in SongAction::ALL {
        if action == focused {
            lines.push(Line::from(Span::styled(
                format!("> {}", action.label()),
                Style::default()
                    .fg(app.style.selection)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(format!("  {}", action.label())));
        }
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Song Prompt ")),
        area,
    );
}

fn render_capture(frame: &mut Frame, app: &App) {
    match &app.capture {
        Some(CaptureState::Note { buffer }) => {
            input_popup(frame, " Add Note ", buffer);
        }
        Some(CaptureState::Genre { selected, custom }) => {
            if let Some(buffer) = custom {
                input_popup(frame, " Custom Genre ", buffer);
            } else {
                let width = GENRES.iter().map(|g| g.width()).max().unwrap_or(0) as u16 + 8;
                let area = centered_rect(width, GENRES.len() as u16 + 2, frame.area());
                let lines: Vec<Line> = GENRES
                    .iter()
                    .enumerate()
                    .map(|(index, genre)| {
                        if index == *selected {
                            Line::from(Span::styled(
                                format!("> {}", genre),
                                Style::default()
                                    .fg(app.style.selection)
                                    .add_modifier(Modifier::BOLD),
                            ))
                        } else {
                            Line::from(format!("  {}", genre))
                        }
                    })
                    .collect();
                frame.render_widget(Clear, area);
                frame.render_widget(
                    Paragraph::new(lines).block(Block::bordered().title(" Choose a Genre ")),
                    area,
                );
            }
        }
        None => {}
    }
}

fn input_popup(frame: &mut Frame, title: &str, buffer: &str) {
    let area = centered_rect(56, 3, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("{}_", buffer)).block(Block::bordered().title(title.to_string())),
        area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
