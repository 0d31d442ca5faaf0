//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "deckmd",
    version,
    about = "Present a markdown file as terminal slides",
    long_about = None
)]
pub struct Cli {
    /// Markdown presentation file
    pub file: PathBuf,

    /// Disable mouse support even when the terminal advertises it
    #[arg(long)]
    pub no_mouse: bool,

    /// Use a specific style file instead of the automatic lookup
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,
}
