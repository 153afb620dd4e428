use std::fmt;

use crate::token::Token;

/// The reason a parse was abandoned. Parsing stops at the first of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required keyword or token class was not where it had to be.
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
    /// The token after `IF` or `WHILE` is not a condition keyword.
    InvalidCondition {
        after: &'static str,
        found: Token,
    },
    /// An instruction definition reuses a primitive name.
    ReservedNameConflict { name: Token },
    /// Two instruction definitions share a name.
    DuplicateDefinition { name: Token },
    /// The identifier after a closing `END` is not the name being closed.
    MismatchedCloseIdentifier { expected: String, found: Token },
    /// Tokens follow the program's closing identifier.
    TrailingInput { found: Token },
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, found: Token) -> Self {
        Self::UnexpectedToken { expected, found }
    }

    /// The token the error was detected at.
    pub fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::InvalidCondition { found, .. }
            | Self::MismatchedCloseIdentifier { found, .. }
            | Self::TrailingInput { found } => found,
            Self::ReservedNameConflict { name } | Self::DuplicateDefinition { name } => name,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Syntax error: expected {expected}, found \"{found}\"")
            }
            Self::InvalidCondition { after, found } => write!(
                f,
                "Syntax error: condition expected after {after}, found \"{found}\""
            ),
            Self::ReservedNameConflict { name } => write!(
                f,
                "Instruction name \"{name}\" is the name of a primitive instruction"
            ),
            Self::DuplicateDefinition { name } => {
                write!(f, "Instruction \"{name}\" is already defined")
            }
            Self::MismatchedCloseIdentifier { expected, found } => write!(
                f,
                "Closing identifier \"{found}\" must equal \"{expected}\""
            ),
            Self::TrailingInput { found } => {
                write!(f, "Syntax error: end of input expected, found \"{found}\"")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_expected_and_found() {
        let err = ParseError::unexpected("IS", Token::new("BEGIN", 12));
        assert_eq!(
            err.to_string(),
            "Syntax error: expected IS, found \"BEGIN\""
        );
        assert_eq!(err.token().start, 12);
    }

    #[test]
    fn test_display_mismatch() {
        let err = ParseError::MismatchedCloseIdentifier {
            expected: "turn".to_string(),
            found: Token::new("spin", 40),
        };
        assert_eq!(
            err.to_string(),
            "Closing identifier \"spin\" must equal \"turn\""
        );
        assert_eq!(err.token().text, "spin");
    }

    #[test]
    fn test_token_for_name_errors() {
        let err = ParseError::ReservedNameConflict {
            name: Token::new("move", 3),
        };
        assert_eq!(err.token(), &Token::new("move", 3));
    }
}
