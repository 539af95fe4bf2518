//! Tab / Shift+Tab indentation on a plain text buffer
//!
//! Pure functions over `(text, caret)`; nothing here touches widget state.
//! Caret offsets are char offsets, not byte offsets.

/// The fixed unit inserted by Tab and removed by Shift+Tab
pub const INDENT_UNIT: &str = "  ";

const INDENT_WIDTH: usize = 2;

/// Which way an indentation edit goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

/// Result of one indentation transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretEdit {
    pub new_text: String,
    pub new_caret: usize,
}

impl CaretEdit {
    fn unchanged(text: &str, caret: usize) -> Self {
        Self {
            new_text: text.to_string(),
            new_caret: caret,
        }
    }
}

/// Convert a char offset into a byte offset, clamped to the end of `text`
fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Char offset of the start of the line containing `caret`
pub fn line_start(text: &str, caret: usize) -> usize {
    text.chars()
        .take(caret)
        .enumerate()
        .filter(|&(_, ch)| ch == '\n')
        .last()
        .map(|(idx, _)| idx + 1)
        .unwrap_or(0)
}

/// Apply Tab (`Forward`) or Shift+Tab (`Backward`) at `caret`
///
/// Forward inserts [`INDENT_UNIT`] at the caret. Backward removes the unit
/// from the start of the caret's line only when the line literally starts
/// with it; anything else (a tab, one space) is a no-op.
pub fn transform(text: &str, caret: usize, direction: IndentDirection) -> CaretEdit {
    let caret = caret.min(text.chars().count());

    match direction {
        IndentDirection::Forward => {
            let at = char_to_byte(text, caret);
            let mut new_text = String::with_capacity(text.len() + INDENT_UNIT.len());
            new_text.push_str(&text[..at]);
            new_text.push_str(INDENT_UNIT);
            new_text.push_str(&text[at..]);
            CaretEdit {
                new_text,
                new_caret: caret + INDENT_WIDTH,
            }
        }
        IndentDirection::Backward => {
            let start = line_start(text, caret);
            let start_byte = char_to_byte(text, start);
            if !text[start_byte..].starts_with(INDENT_UNIT) {
                return CaretEdit::unchanged(text, caret);
            }

            let mut new_text = String::with_capacity(text.len());
            new_text.push_str(&text[..start_byte]);
            new_text.push_str(&text[start_byte + INDENT_UNIT.len()..]);
            CaretEdit {
                new_text,
                new_caret: caret.saturating_sub(INDENT_WIDTH).max(start),
            }
        }
    }
}
