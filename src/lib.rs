//! Parser for BL, a small language for programming robot creatures.
//!
//! A BL program names itself, defines zero or more instructions, and has a
//! main body of calls, conditionals and loops. [`tokenize`] turns text into
//! [`Tokens`]; [`parse_program`] turns tokens into a [`Program`], stopping at
//! the first error.
//!
//! # Example
//!
//! ```rust
//! use blparse::{Condition, Source, Statement, parse_source};
//!
//! let source = Source::from_str(
//!     "PROGRAM walker IS
//!        INSTRUCTION step IS
//!          IF next-is-empty THEN move ELSE turnleft END IF
//!        END step
//!      BEGIN
//!        WHILE true DO step END WHILE
//!      END walker",
//! );
//! let program = parse_source(&source).unwrap();
//!
//! assert_eq!(program.name(), "walker");
//! assert_eq!(
//!     program.instruction("step"),
//!     Some(&Statement::Block(vec![Statement::if_else(
//!         Condition::NextIsEmpty,
//!         Statement::Block(vec![Statement::call("move")]),
//!         Statement::Block(vec![Statement::call("turnleft")]),
//!     )]))
//! );
//!
//! // Printed programs parse back to the same tree.
//! let again = parse_source(&Source::from_str(&program.to_string())).unwrap();
//! assert_eq!(again, program);
//! ```

mod condition;
mod parse_error;
pub mod parser;
pub mod pretty;
mod program;
mod source;
mod statement;
pub mod token;
mod tokenizer;

pub use condition::Condition;
pub use parse_error::ParseError;
pub use parser::{parse_block, parse_program, parse_source, parse_statement};
pub use pretty::PrettyConfig;
pub use program::{Context, Program};
pub use source::Source;
pub use statement::{Kind, Statement};
pub use token::{END_OF_INPUT, Token, Tokens};
pub use tokenizer::tokenize;
