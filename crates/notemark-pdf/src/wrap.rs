//! Deterministic text wrapping
//!
//! Line breaking is computed from fixed per-face average glyph widths
//! rather than font metrics queried at render time. The same input
//! always wraps to the same lines, which keeps pagination reproducible
//! across runs and platforms.

/// Millimeters per typographic point
pub const PT_TO_MM: f32 = 0.352_778;

/// The builtin faces used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    Courier,
}

impl FontFace {
    /// Average glyph advance as a fraction of the font size
    ///
    /// Helvetica averages about half an em over running text; the bold
    /// cut runs slightly wider. Courier is fixed-pitch at 0.6 em.
    fn advance_factor(self) -> f32 {
        match self {
            FontFace::Helvetica | FontFace::HelveticaOblique => 0.5,
            FontFace::HelveticaBold => 0.55,
            FontFace::Courier => 0.6,
        }
    }
}

/// Estimated width in millimeters of a single glyph
pub fn char_width_mm(face: FontFace, size_pt: f32) -> f32 {
    size_pt * face.advance_factor() * PT_TO_MM
}

/// Estimated width in millimeters of a whole string
pub fn text_width_mm(text: &str, face: FontFace, size_pt: f32) -> f32 {
    text.chars().count() as f32 * char_width_mm(face, size_pt)
}

/// Wrap text to a maximum width, breaking on whitespace
///
/// Input newlines are preserved as line boundaries. Lines that already
/// fit are kept verbatim (including indentation, which matters for
/// code). Words longer than a full line are split at the character
/// level so no line ever exceeds the limit.
pub fn wrap_text(text: &str, face: FontFace, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let char_width = char_width_mm(face, size_pt);
    let max_chars = ((max_width_mm / char_width).floor() as usize).max(1);

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        wrap_line(raw_line, max_chars, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, max_chars: usize, out: &mut Vec<String>) {
    if line.chars().count() <= max_chars {
        out.push(line.to_string());
        return;
    }

    let mut current = String::new();
    let mut current_len = 0usize;
    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            (current, current_len) = place_word(word, word_len, max_chars, out);
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(std::mem::take(&mut current));
            (current, current_len) = place_word(word, word_len, max_chars, out);
        }
    }
    out.push(current);
}

/// Start a fresh line with `word`, hard-splitting it if it cannot fit
/// on a line of its own
fn place_word(word: &str, word_len: usize, max_chars: usize, out: &mut Vec<String>) -> (String, usize) {
    if word_len <= max_chars {
        return (word.to_string(), word_len);
    }

    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > max_chars {
        out.push(chars[start..start + max_chars].iter().collect());
        start += max_chars;
    }
    let rest: String = chars[start..].iter().collect();
    let rest_len = chars.len() - start;
    (rest, rest_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_kept_verbatim() {
        let lines = wrap_text("    indented code", FontFace::Courier, 9.0, 162.0);
        assert_eq!(lines, vec!["    indented code"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let text = "alpha beta gamma delta epsilon";
        // ~10 chars per line at this width
        let width = 10.0 * char_width_mm(FontFace::Helvetica, 11.0);
        let lines = wrap_text(text, FontFace::Helvetica, 11.0, width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {:?}", line);
        }
        // No content lost
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_overlong_word_hard_split() {
        let width = 8.0 * char_width_mm(FontFace::Helvetica, 11.0);
        let lines = wrap_text("abcdefghijklmnopqrst", FontFace::Helvetica, 11.0, width);
        assert_eq!(lines, vec!["abcdefgh", "ijklmnop", "qrst"]);
    }

    #[test]
    fn test_newlines_preserved() {
        let lines = wrap_text("first\n\nsecond", FontFace::Helvetica, 11.0, 170.0);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "The quick brown fox jumps over the lazy dog again and again";
        let a = wrap_text(text, FontFace::Helvetica, 11.0, 60.0);
        let b = wrap_text(text, FontFace::Helvetica, 11.0, 60.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bold_wraps_earlier_than_regular() {
        let text = "word word word word word word word word word word";
        let regular = wrap_text(text, FontFace::Helvetica, 11.0, 40.0);
        let bold = wrap_text(text, FontFace::HelveticaBold, 11.0, 40.0);
        assert!(bold.len() >= regular.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_text("", FontFace::Helvetica, 11.0, 170.0).is_empty());
    }
}
