//! Tokens, the token queue consumed by the parser, and lexical classification.

use std::collections::VecDeque;
use std::fmt;

use phf::{Set, phf_set};

/// Marks the end of every token stream. Contains spaces, so the tokenizer
/// can never produce it from program text.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

const KEYWORDS: Set<&'static str> = phf_set! {
    "PROGRAM", "IS", "BEGIN", "END", "INSTRUCTION",
    "IF", "THEN", "ELSE", "WHILE", "DO",
};

const PRIMITIVES: Set<&'static str> = phf_set! {
    "move", "turnleft", "turnright", "infect", "skip",
};

const CONDITIONS: Set<&'static str> = phf_set! {
    "next-is-empty", "next-is-not-empty",
    "next-is-enemy", "next-is-not-enemy",
    "next-is-friend", "next-is-not-friend",
    "next-is-wall", "next-is-not-wall",
    "random", "true",
};

/// A single lexical unit together with the char offset it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn is_end_of_input(&self) -> bool {
        self.text == END_OF_INPUT
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// FIFO queue of tokens, normally terminated by [`END_OF_INPUT`].
///
/// The parser takes this by `&mut` and removes tokens as it goes; nothing
/// else holds on to it during a parse.
#[derive(Debug, Default, Clone)]
pub struct Tokens {
    queue: VecDeque<Token>,
}

impl Tokens {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Split `text` on whitespace and append the sentinel.
    ///
    /// Offsets are those of each word within `text`, so diagnostics still
    /// line up with the input.
    pub fn from_words(text: &str) -> Self {
        let mut tokens = Tokens::new();
        let mut start = None;
        let mut word = String::new();
        let mut end = 0;
        for (idx, ch) in text.chars().enumerate() {
            end = idx + 1;
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.enqueue(Token::new(std::mem::take(&mut word), s));
                }
            } else {
                if start.is_none() {
                    start = Some(idx);
                }
                word.push(ch);
            }
        }
        if let Some(s) = start {
            tokens.enqueue(Token::new(word, s));
        }
        tokens.enqueue(Token::new(END_OF_INPUT, end));
        tokens
    }

    pub fn enqueue(&mut self, token: Token) {
        self.queue.push_back(token);
    }

    /// Peek at the next token without consuming it.
    pub fn front(&self) -> Option<&Token> {
        self.queue.front()
    }

    /// Remove and return the next token.
    pub fn dequeue(&mut self) -> Option<Token> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.queue.iter()
    }
}

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(s)
}

/// True for the five built-in instruction names.
pub fn is_primitive(s: &str) -> bool {
    PRIMITIVES.contains(s)
}

pub fn is_condition(s: &str) -> bool {
    CONDITIONS.contains(s)
}

/// A letter followed by letters, digits or `-`, that is not a keyword or
/// condition. Primitive names count as identifiers.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(is_word_char) && !is_keyword(s) && !is_condition(s)
}

/// Characters that may continue a word token.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_appends_sentinel() {
        let mut tokens = Tokens::from_words("PROGRAM foo IS");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.dequeue(), Some(Token::new("PROGRAM", 0)));
        assert_eq!(tokens.dequeue(), Some(Token::new("foo", 8)));
        assert_eq!(tokens.dequeue(), Some(Token::new("IS", 12)));
        assert!(tokens.dequeue().unwrap().is_end_of_input());
        assert!(tokens.is_empty());
        assert_eq!(tokens.dequeue(), None);
    }

    #[test]
    fn test_from_words_empty() {
        let tokens = Tokens::from_words("   ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.front().unwrap().is_end_of_input());
    }

    #[test]
    fn test_front_does_not_consume() {
        let tokens = Tokens::from_words("move");
        assert_eq!(tokens.front().map(|t| t.text.as_str()), Some("move"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("move"));
        assert!(is_identifier("find-wall2"));
        assert!(is_identifier("X"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("-x"));
        assert!(!is_identifier("a_b"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("END"));
        assert!(!is_identifier("next-is-wall"));
        assert!(!is_identifier("true"));
        assert!(!is_identifier(END_OF_INPUT));
    }

    #[test]
    fn test_classification() {
        assert!(is_keyword("INSTRUCTION"));
        assert!(!is_keyword("instruction"));
        assert!(is_primitive("turnright"));
        assert!(!is_primitive("turn"));
        assert!(is_condition("random"));
        assert!(!is_condition("next-is-foe"));
    }
}
