//! Splits BL program text into [`Tokens`].
//!
//! Words are maximal runs of letters, digits and `-`. Every other
//! non-space character becomes a token of its own so the parser can report
//! it. `#` comments run to the end of the line.

use itertools::Itertools;
use tracing::trace;

use crate::source::Source;
use crate::token::{END_OF_INPUT, Token, Tokens, is_word_char};

/// Tokenize the whole of `source`, appending the [`END_OF_INPUT`] sentinel.
pub fn tokenize(source: &Source) -> Tokens {
    let mut chars = source.rope().chars().enumerate().peekable();
    let mut tokens = Tokens::new();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch == '#' {
            chars
                .peeking_take_while(|&(_, c)| c != '\n')
                .for_each(drop);
        } else if is_word_char(ch) {
            let word: String = chars
                .peeking_take_while(|&(_, c)| is_word_char(c))
                .map(|(_, c)| c)
                .collect();
            tokens.enqueue(Token::new(word, start));
        } else {
            chars.next();
            tokens.enqueue(Token::new(ch.to_string(), start));
        }
    }

    tokens.enqueue(Token::new(END_OF_INPUT, source.len_chars()));
    trace!(count = tokens.len(), origin = source.origin(), "tokenized");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(&Source::from_str(input))
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn test_words_and_sentinel() {
        assert_eq!(
            texts("PROGRAM foo IS\n  BEGIN move END foo"),
            vec!["PROGRAM", "foo", "IS", "BEGIN", "move", "END", "foo", END_OF_INPUT]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(texts(""), vec![END_OF_INPUT]);
        assert_eq!(texts(" \t\n"), vec![END_OF_INPUT]);
    }

    #[test]
    fn test_condition_words_keep_hyphens() {
        assert_eq!(
            texts("IF next-is-not-wall THEN"),
            vec!["IF", "next-is-not-wall", "THEN", END_OF_INPUT]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            texts("move # turn around\nturnleft # done"),
            vec!["move", "turnleft", END_OF_INPUT]
        );
    }

    #[test]
    fn test_punctuation_is_single_tokens() {
        assert_eq!(texts("a(;)b"), vec!["a", "(", ";", ")", "b", END_OF_INPUT]);
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize(&Source::from_str("IF\n  true"));
        let starts: Vec<usize> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 5, 9]);
    }
}
