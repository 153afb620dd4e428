//! Program text held in a rope, with line/column lookup for diagnostics.

use std::fmt;

use ropey::Rope;

#[derive(Debug, Default)]
pub struct Source {
    /// Where the text came from (a path or `<stdin>`).
    origin: String,
    rope: Rope,
}

impl Source {
    pub fn new(origin: impl Into<String>, text: &str) -> Self {
        Self {
            origin: origin.into(),
            rope: Rope::from_str(text),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::new("<input>", text)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// 1-based (line, column) of the char at `char_idx`, clamped to the end
    /// of the text.
    pub fn line_col(&self, char_idx: usize) -> (usize, usize) {
        let idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(idx);
        let column = idx - self.rope.line_to_char(line);
        (line + 1, column + 1)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let src = Source::from_str("PROGRAM foo IS");
        assert_eq!(src.line_col(0), (1, 1));
        assert_eq!(src.line_col(8), (1, 9));
    }

    #[test]
    fn test_line_col_later_lines() {
        let src = Source::from_str("PROGRAM foo IS\nBEGIN\n  move\n");
        assert_eq!(src.line_col(15), (2, 1));
        assert_eq!(src.line_col(23), (3, 3));
    }

    #[test]
    fn test_line_col_clamped() {
        let src = Source::from_str("ab\ncd");
        assert_eq!(src.line_col(100), (2, 3));
    }

    #[test]
    fn test_origin() {
        let src = Source::new("robot.bl", "");
        assert_eq!(src.origin(), "robot.bl");
        assert_eq!(src.len_chars(), 0);
        assert_eq!(src.line_col(0), (1, 1));
    }
}
