//! Mouse click resolution.
//!
//! The renderer records which terminal row each visible option landed on;
//! a left click is resolved against that table. The table is rebuilt on
//! every frame, so it always matches what is on screen.

/// Maps rendered terminal rows to option indices on the current slide.
#[derive(Debug, Clone, Default)]
pub struct OptionRowMap {
    entries: Vec<(u16, usize)>,
}

impl OptionRowMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's rows.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record that an option is rendered on the given row.
    pub fn insert(&mut self, row: u16, option_index: usize) {
        self.entries.push((row, option_index));
    }

    /// Resolve a clicked row to an option index.
    pub fn hit(&self, row: u16) -> Option<usize> {
        self.entries
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, idx)| *idx)
    }
}

/// Whether the terminal is expected to deliver usable mouse reports.
/// Conservative: only xterm-compatible terminals opt in.
pub fn mouse_supported() -> bool {
    std::env::var("TERM")
        .map(|term| term.contains("xterm"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_resolves_recorded_rows() {
        let mut map = OptionRowMap::new();
        map.insert(4, 0);
        map.insert(6, 1);
        assert_eq!(map.hit(4), Some(0));
        assert_eq!(map.hit(6), Some(1));
        assert_eq!(map.hit(5), None);
    }

    #[test]
    fn test_clear_forgets_rows() {
        let mut map = OptionRowMap::new();
        map.insert(4, 0);
        map.clear();
        assert_eq!(map.hit(4), None);
    }
}
