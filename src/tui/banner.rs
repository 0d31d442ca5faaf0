//! Large-type slide titles.
//!
//! Renders a title as 5-row block glyphs, word-wrapped to the terminal
//! width and centered by left padding. Characters without a glyph are
//! dropped; a blank title renders as "UNTITLED".

const GLYPH_HEIGHT: usize = 5;

fn glyph(value: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match value {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "# ###", "#   #", " ####"],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["#####", "  #  ", "  #  ", "  #  ", "#####"],
        'J' => ["#####", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "#   #", "#  ##", " ####"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '0' => [" ### ", "#  ##", "# # #", "##  #", " ### "],
        '1' => ["  #  ", " ##  ", "  #  ", "  #  ", " ### "],
        '2' => [" ### ", "#   #", "   # ", "  #  ", "#####"],
        '3' => ["#####", "   # ", "  ## ", "   # ", "#####"],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#### ", "    #", "#### "],
        '6' => [" ### ", "#    ", "#### ", "#   #", " ### "],
        '7' => ["#####", "   # ", "  #  ", " #   ", "#    "],
        '8' => [" ### ", "#   #", " ### ", "#   #", " ### "],
        '9' => [" ### ", "#   #", " ####", "    #", " ### "],
        '-' => ["     ", "     ", "#####", "     ", "     "],
        ' ' => ["   ", "   ", "   ", "   ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as banner rows sized for a terminal `width` columns wide.
pub fn render(text: &str, width: usize) -> Vec<String> {
    let safe: String = text
        .trim()
        .to_uppercase()
        .chars()
        .filter(|&c| glyph(c).is_some())
        .collect();
    let max_chars = (width.saturating_sub(2) / 6).max(1);
    let chunks = wrap_by_word(&safe, max_chars);

    let mut out: Vec<String> = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        for row in 0..GLYPH_HEIGHT {
            let mut line = String::new();
            for (position, c) in chunk.chars().enumerate() {
                if position > 0 {
                    line.push(' ');
                }
                if let Some(rows) = glyph(c) {
                    line.push_str(rows[row]);
                }
            }
            out.push(center(line, width));
        }
        if index + 1 < chunks.len() {
            out.push(String::new());
        }
    }
    out
}

fn wrap_by_word(text: &str, max_chars_per_line: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.len() > max_chars_per_line {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            let bytes = word.as_bytes();
            let mut start = 0;
            while start < bytes.len() {
                let end = (start + max_chars_per_line).min(bytes.len());
                chunks.push(word[start..end].to_string());
                start = end;
            }
            continue;
        }

        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_chars_per_line {
            current.push(' ');
            current.push_str(word);
        } else {
            chunks.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    if chunks.is_empty() {
        chunks.push("UNTITLED".to_string());
    }
    chunks
}

fn center(text: String, width: usize) -> String {
    if text.len() >= width {
        return text;
    }
    let padding = (width - text.len()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_fits_in_five_rows() {
        let out = render("Hi", 80);
        assert_eq!(out.len(), 5);
        // 'H' then a column gap then 'I'.
        assert_eq!(out[0].trim_start(), "#   # #####");
    }

    #[test]
    fn test_blank_title_renders_untitled() {
        let out = render("   ", 80);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|row| row.contains('#')));
        // "UNTITLED" is 8 glyphs of 5 columns with 7 gaps.
        assert_eq!(out[0].trim_start().len(), 8 * 5 + 7);
    }

    #[test]
    fn test_words_wrap_with_blank_separator() {
        // Width 40 fits 6 characters per banner line, so the two words
        // land on separate lines with one blank row between them.
        let out = render("HELLO WORLD", 40);
        assert_eq!(out.len(), 11);
        assert!(out[5].is_empty());
    }

    #[test]
    fn test_long_word_splits_in_width_chunks() {
        let out = render("ABCDEFGH", 40);
        assert_eq!(out.len(), 11);
    }

    #[test]
    fn test_unsupported_characters_are_dropped() {
        let out = render("C++", 80);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|row| !row.contains('?')));
        assert_eq!(out[0].trim(), "####");
    }

    #[test]
    fn test_all_unsupported_falls_back_to_untitled() {
        let out = render("!!!", 80);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0].trim_start().len(), 8 * 5 + 7);
    }

    #[test]
    fn test_rows_are_centered_by_left_padding() {
        let out = render("A", 21);
        // One 5-column glyph centered in 21 columns.
        assert!(out[0].starts_with("        "));
        assert_eq!(out[0].len(), 8 + 5);
    }
}
