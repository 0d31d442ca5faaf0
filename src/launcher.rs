//! Desktop launch helpers.
//!
//! Thin wrappers over the platform integration crates. Every helper returns
//! a user-facing status message either way; failures degrade to the status
//! line and never abort the session.

use std::path::Path;

/// Open a URL in the default browser.
pub fn open_url(url: &str) -> Result<String, String> {
    match open::that(url) {
        Ok(()) => Ok(format!("Opened {} in your default browser.", url)),
        Err(_) => Err("Unable to open browser.".to_string()),
    }
}

/// Copy text to the system clipboard.
///
/// The clipboard handle is created once and kept alive by the caller; on X11
/// the paste buffer only lives as long as the owning instance.
pub fn copy_to_clipboard(
    clipboard: &mut Option<arboard::Clipboard>,
    text: &str,
) -> Result<String, String> {
    if clipboard.is_none() {
        *clipboard = arboard::Clipboard::new().ok();
    }
    match clipboard {
        Some(cb) => match cb.set_text(text.to_string()) {
            Ok(()) => Ok("Prompt copied to clipboard.".to_string()),
            Err(_) => Err("Clipboard copy failed.".to_string()),
        },
        None => Err("Clipboard is not available.".to_string()),
    }
}

/// Open a file in the user's editor. Blocks until the editor exits; the
/// caller is responsible for suspending the terminal around this.
pub fn open_in_editor(path: &Path) -> Result<String, String> {
    match edit::edit_file(path) {
        Ok(()) => Ok("Opened prompt file in your editor.".to_string()),
        Err(_) => Err("Unable to open editor.".to_string()),
    }
}
