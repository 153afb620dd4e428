//! Recursive descent parser for BL programs and statements.
//!
//! Consumes a [`Tokens`] queue left to right with one token of lookahead.
//! The first grammar violation aborts the whole parse; no partial
//! [`Program`] or [`Statement`] is ever returned.
//!
//! ```text
//! program     ::= PROGRAM id IS instruction* BEGIN block END id
//! instruction ::= INSTRUCTION id IS block END id
//! block       ::= statement*
//! statement   ::= IF cond THEN block (ELSE block)? END IF
//!               | WHILE cond DO block END WHILE
//!               | id
//! ```

use tracing::{debug, trace};

use crate::condition::Condition;
use crate::parse_error::ParseError;
use crate::program::{Context, Program};
use crate::source::Source;
use crate::statement::Statement;
use crate::token::{END_OF_INPUT, Token, Tokens, is_identifier, is_primitive};
use crate::tokenizer::tokenize;

/// Parse one statement from the front of `tokens`.
pub fn parse_statement(tokens: &mut Tokens) -> Result<Statement, ParseError> {
    Parser { tokens }.parse_statement()
}

/// Parse statements up to (not including) the next `END`, `ELSE` or
/// end-of-input token.
pub fn parse_block(tokens: &mut Tokens) -> Result<Statement, ParseError> {
    Parser { tokens }.parse_block()
}

/// Parse a complete program. All of `tokens` up to the sentinel must be
/// used.
pub fn parse_program(tokens: &mut Tokens) -> Result<Program, ParseError> {
    Parser { tokens }.parse_program()
}

/// Tokenize and parse a whole program from source text.
pub fn parse_source(source: &Source) -> Result<Program, ParseError> {
    let mut tokens = tokenize(source);
    parse_program(&mut tokens)
}

struct Parser<'a> {
    tokens: &'a mut Tokens,
}

impl Parser<'_> {
    fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.expect("PROGRAM")?;
        let name = self.expect_identifier()?;
        self.expect("IS")?;

        let mut context = Context::new();
        while self.peek() == "INSTRUCTION" {
            let (inst_name, body) = self.parse_instruction()?;
            if context.contains_key(&inst_name.text) {
                return Err(ParseError::DuplicateDefinition { name: inst_name });
            }
            context.insert(inst_name.text, body);
        }

        self.expect("BEGIN")?;
        let body = self.parse_block()?;
        self.expect("END")?;
        self.expect_closing(&name.text)?;

        if self.peek() != END_OF_INPUT {
            return Err(ParseError::TrailingInput { found: self.advance() });
        }

        debug!(
            program = %name.text,
            instructions = context.len(),
            statements = body.block_len().unwrap_or(0),
            "parsed program"
        );
        Ok(Program::new(name.text, context, body))
    }

    /// Parse `INSTRUCTION name IS block END name`, returning the name token
    /// and the body.
    fn parse_instruction(&mut self) -> Result<(Token, Statement), ParseError> {
        self.expect("INSTRUCTION")?;
        let name = self.expect_identifier()?;
        if is_primitive(&name.text) {
            return Err(ParseError::ReservedNameConflict { name });
        }
        self.expect("IS")?;
        let body = self.parse_block()?;
        self.expect("END")?;
        self.expect_closing(&name.text)?;

        debug!(instruction = %name.text, "parsed instruction");
        Ok((name, body))
    }

    fn parse_block(&mut self) -> Result<Statement, ParseError> {
        let mut statements = Vec::new();
        loop {
            match self.peek() {
                "END" | "ELSE" | END_OF_INPUT => break,
                _ => statements.push(self.parse_statement()?),
            }
        }
        trace!(len = statements.len(), "parsed block");
        Ok(Statement::Block(statements))
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek() {
            "IF" => self.parse_if(),
            "WHILE" => self.parse_while(),
            s if is_identifier(s) => Ok(Statement::Call(self.advance().text)),
            _ => Err(ParseError::unexpected(
                "IF, WHILE, or identifier",
                self.advance(),
            )),
        }
    }

    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.expect("IF")?;
        let condition = self.parse_condition("IF")?;
        self.expect("THEN")?;
        let then_body = self.parse_block()?;

        let stmt = match self.peek() {
            "ELSE" => {
                self.advance();
                let else_body = self.parse_block()?;
                Statement::if_else(condition, then_body, else_body)
            }
            "END" => Statement::if_then(condition, then_body),
            _ => return Err(ParseError::unexpected("ELSE or END", self.advance())),
        };

        self.expect("END")?;
        self.expect("IF")?;
        Ok(stmt)
    }

    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        self.expect("WHILE")?;
        let condition = self.parse_condition("WHILE")?;
        self.expect("DO")?;
        let body = self.parse_block()?;
        self.expect("END")?;
        self.expect("WHILE")?;
        Ok(Statement::while_do(condition, body))
    }

    /// Consume a condition keyword. `after` names the construct it follows.
    fn parse_condition(&mut self, after: &'static str) -> Result<Condition, ParseError> {
        match Condition::from_keyword(self.peek()) {
            Some(condition) => {
                self.advance();
                Ok(condition)
            }
            None => Err(ParseError::InvalidCondition {
                after,
                found: self.advance(),
            }),
        }
    }

    /// Text of the next token. An exhausted queue reads as end of input.
    fn peek(&self) -> &str {
        self.tokens
            .front()
            .map_or(END_OF_INPUT, |t| t.text.as_str())
    }

    /// Take the next token. The sentinel is left in place so that every
    /// later peek still sees end of input.
    fn advance(&mut self) -> Token {
        match self.tokens.front() {
            Some(t) if t.is_end_of_input() => t.clone(),
            Some(_) => self.tokens.dequeue().unwrap_or_else(eof_token),
            None => eof_token(),
        }
    }

    fn expect(&mut self, keyword: &'static str) -> Result<Token, ParseError> {
        let token = self.advance();
        if token.is(keyword) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(keyword, token))
        }
    }

    fn expect_identifier(&mut self) -> Result<Token, ParseError> {
        let token = self.advance();
        if is_identifier(&token.text) {
            Ok(token)
        } else {
            Err(ParseError::unexpected("identifier", token))
        }
    }

    /// Consume the identifier after a closing `END`, which must repeat
    /// `name`.
    fn expect_closing(&mut self, name: &str) -> Result<(), ParseError> {
        let token = self.advance();
        if token.text == name {
            Ok(())
        } else {
            Err(ParseError::MismatchedCloseIdentifier {
                expected: name.to_string(),
                found: token,
            })
        }
    }
}

fn eof_token() -> Token {
    Token::new(END_OF_INPUT, 0)
}
