//! Parser module for slide-oriented markdown documents.
//!
//! Splits a markdown document into slides on `#`/`##` headings, recognizes
//! task-list options and inline hyperlinks, and normalizes each slide body.
//! The resulting [`Presentation`] is the single source of truth for both
//! rendering and persistence: option toggles rewrite the owning body line in
//! place, so serializing the body lines always reflects current state.

pub mod links;
pub mod tasks;

pub use links::HyperlinkItem;
pub use tasks::{parse_task_line, render_task_line};

use std::path::PathBuf;

/// Reserved title for the slide that accumulates captured notes.
pub const NOTES_SLIDE_TITLE: &str = "Presentation Notes";

/// Title used when a document has no content at all.
pub const UNTITLED_SLIDE_TITLE: &str = "Untitled";

/// How a slide participates in the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideType {
    /// A `#`-level slide, rendered with the primary header style.
    Title,
    /// A `##`-level (or headingless) slide.
    Standard,
    /// The reserved notes slide; excluded from prompts, regenerated from
    /// captured notes.
    Notes,
    /// Synthesized menu overlay slide. Never produced by the parser.
    MainMenu,
}

/// A toggleable task-list option on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionBoxItem {
    /// Index into the owning slide's body lines.
    pub line_index: usize,
    /// Option label text.
    pub text: String,
    /// Current selection state.
    pub is_selected: bool,
}

/// One slide of the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub slide_type: SlideType,
    pub body_lines: Vec<String>,
    pub option_items: Vec<OptionBoxItem>,
    pub hyperlinks: Vec<HyperlinkItem>,
}

impl Slide {
    pub fn new(title: impl Into<String>, slide_type: SlideType) -> Self {
        Self {
            title: title.into(),
            slide_type,
            body_lines: Vec::new(),
            option_items: Vec::new(),
            hyperlinks: Vec::new(),
        }
    }

    /// Number of focusable elements: options first, then hyperlinks.
    pub fn interactive_count(&self) -> usize {
        self.option_items.len() + self.hyperlinks.len()
    }

    /// Set an option's selection state and rewrite its body line to the
    /// canonical form, keeping model and text in lockstep.
    pub fn set_option_selected(&mut self, option_index: usize, selected: bool) {
        if let Some(item) = self.option_items.get_mut(option_index) {
            item.is_selected = selected;
            if let Some(line) = self.body_lines.get_mut(item.line_index) {
                *line = render_task_line(&item.text, selected);
            }
        }
    }

    /// Flip an option's selection state.
    pub fn toggle_option(&mut self, option_index: usize) {
        if let Some(item) = self.option_items.get(option_index) {
            let selected = !item.is_selected;
            self.set_option_selected(option_index, selected);
        }
    }

    /// Clear every option selection on this slide.
    pub fn deselect_all_options(&mut self) {
        for i in 0..self.option_items.len() {
            self.set_option_selected(i, false);
        }
    }
}

/// A parsed presentation: the slide deck plus the file paths it came from
/// and persists to.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub source_path: PathBuf,
    pub notes_path: PathBuf,
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Display title: the first slide that is not the notes slide, falling
    /// back to the first slide outright.
    pub fn title(&self) -> &str {
        self.slides
            .iter()
            .find(|s| s.slide_type != SlideType::Notes)
            .or_else(|| self.slides.first())
            .map(|s| s.title.as_str())
            .unwrap_or(UNTITLED_SLIDE_TITLE)
    }

    /// Index of the notes slide, if one exists.
    pub fn notes_slide_index(&self) -> Option<usize> {
        self.slides
            .iter()
            .position(|s| s.slide_type == SlideType::Notes)
    }
}

/// Parse a markdown document into a presentation.
///
/// Line endings are normalized first, so `\r\n` and bare `\r` documents
/// segment identically to `\n` ones. Headings of level one and two open new
/// slides; `###` and deeper stay body text. A document with no heading
/// becomes a single title-less slide; an empty document becomes a single
/// "Untitled" slide with no body.
pub fn parse(markup: &str, source_path: PathBuf, notes_path: PathBuf) -> Presentation {
    let normalized = markup.replace("\r\n", "\n").replace('\r', "\n");
    let sections = split_sections(&normalized);

    let mut slides: Vec<Slide> = if sections.is_empty() {
        vec![Slide::new(UNTITLED_SLIDE_TITLE, SlideType::Standard)]
    } else {
        sections.into_iter().map(build_slide).collect()
    };

    // Retag the reserved notes section after classification.
    for slide in &mut slides {
        if slide.title.eq_ignore_ascii_case(NOTES_SLIDE_TITLE) {
            slide.slide_type = SlideType::Notes;
        }
    }

    Presentation {
        source_path,
        notes_path,
        slides,
    }
}

struct Section {
    title: String,
    level: usize,
    lines: Vec<String>,
}

/// Return the heading level and title when a line is a `#` or `##` heading.
/// Requires whitespace after the marker; `###` and deeper are body text.
fn slide_heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 2 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.starts_with(' ') || rest.starts_with('\t') {
        Some((hashes, rest.trim()))
    } else {
        None
    }
}

fn split_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        title: String::new(),
        level: 0,
        lines: Vec::new(),
    };
    let mut first = true;

    for line in content.split('\n') {
        if let Some((level, title)) = slide_heading(line) {
            // The implicit preamble section is only kept when it has content.
            let blank = current.title.is_empty() && current.lines.iter().all(|l| l.trim().is_empty());
            if !(first && blank) {
                sections.push(current);
            }
            current = Section {
                title: title.to_string(),
                level,
                lines: Vec::new(),
            };
            first = false;
        } else {
            current.lines.push(line.to_string());
        }
    }

    let blank = current.title.is_empty() && current.lines.iter().all(|l| l.trim().is_empty());
    if !(first && blank) {
        sections.push(current);
    }

    sections
}

fn build_slide(section: Section) -> Slide {
    let slide_type = match section.level {
        1 => SlideType::Title,
        _ => SlideType::Standard,
    };
    let mut slide = Slide::new(section.title, slide_type);

    // First pass: canonicalize task lines and record options against the
    // untrimmed line indices.
    let mut lines: Vec<String> = Vec::with_capacity(section.lines.len());
    for (index, raw) in section.lines.into_iter().enumerate() {
        match parse_task_line(&raw) {
            Some(task) => {
                lines.push(render_task_line(&task.text, task.is_selected));
                slide.option_items.push(OptionBoxItem {
                    line_index: index,
                    text: task.text,
                    is_selected: task.is_selected,
                });
            }
            None => {
                slide.hyperlinks.extend(links::extract_line_links(&raw, index));
                lines.push(raw);
            }
        }
    }

    // Trim leading and trailing blank lines, shifting recorded indices in
    // lockstep so they keep pointing at their lines.
    let leading = lines
        .iter()
        .take_while(|l| l.trim().is_empty())
        .count();
    lines.drain(..leading);
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    for item in &mut slide.option_items {
        item.line_index -= leading;
    }
    for link in &mut slide.hyperlinks {
        link.line_index -= leading;
    }

    slide.body_lines = lines;
    slide
}
