//! Pretty printer producing BL source text that parses back to the same tree.

use std::fmt::{self, Write};

use itertools::Itertools;

use crate::program::Program;
use crate::statement::Statement;

/// Layout settings for printed programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render `stmt` with its first line indented by `offset` spaces.
pub fn pretty_statement(stmt: &Statement, offset: usize, config: &PrettyConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_statement(&mut out, stmt, offset, config);
    out
}

pub fn pretty_program(program: &Program, config: &PrettyConfig) -> String {
    let mut out = String::new();
    let _ = write_program(&mut out, program, config);
    out
}

/// Instructions are written in name order so output does not depend on
/// hash order.
pub fn write_program<W: Write>(
    out: &mut W,
    program: &Program,
    config: &PrettyConfig,
) -> fmt::Result {
    writeln!(out, "PROGRAM {} IS", program.name())?;
    writeln!(out)?;
    for (name, body) in program.context().iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        pad(out, config.indent)?;
        writeln!(out, "INSTRUCTION {name} IS")?;
        write_statement(out, body, 2 * config.indent, config)?;
        pad(out, config.indent)?;
        writeln!(out, "END {name}")?;
        writeln!(out)?;
    }
    writeln!(out, "BEGIN")?;
    write_statement(out, program.body(), config.indent, config)?;
    writeln!(out, "END {}", program.name())
}

pub fn write_statement<W: Write>(
    out: &mut W,
    stmt: &Statement,
    offset: usize,
    config: &PrettyConfig,
) -> fmt::Result {
    let inner = offset + config.indent;
    match stmt {
        Statement::Block(stmts) => {
            for s in stmts {
                write_statement(out, s, offset, config)?;
            }
            Ok(())
        }
        Statement::If { condition, body } => {
            pad(out, offset)?;
            writeln!(out, "IF {condition} THEN")?;
            write_statement(out, body, inner, config)?;
            pad(out, offset)?;
            writeln!(out, "END IF")
        }
        Statement::IfElse {
            condition,
            then_body,
            else_body,
        } => {
            pad(out, offset)?;
            writeln!(out, "IF {condition} THEN")?;
            write_statement(out, then_body, inner, config)?;
            pad(out, offset)?;
            writeln!(out, "ELSE")?;
            write_statement(out, else_body, inner, config)?;
            pad(out, offset)?;
            writeln!(out, "END IF")
        }
        Statement::While { condition, body } => {
            pad(out, offset)?;
            writeln!(out, "WHILE {condition} DO")?;
            write_statement(out, body, inner, config)?;
            pad(out, offset)?;
            writeln!(out, "END WHILE")
        }
        Statement::Call(name) => {
            pad(out, offset)?;
            writeln!(out, "{name}")
        }
    }
}

fn pad<W: Write>(out: &mut W, n: usize) -> fmt::Result {
    write!(out, "{:n$}", "")
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0, &PrettyConfig::default())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_program(f, self, &PrettyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::program::Context;

    #[test]
    fn test_call() {
        assert_eq!(Statement::call("move").to_string(), "move\n");
    }

    #[test]
    fn test_nested_if_else_in_while() {
        let stmt = Statement::while_do(
            Condition::True,
            Statement::Block(vec![Statement::if_else(
                Condition::NextIsEnemy,
                Statement::Block(vec![Statement::call("infect")]),
                Statement::Block(vec![Statement::call("move")]),
            )]),
        );
        let expected = "\
WHILE true DO
    IF next-is-enemy THEN
        infect
    ELSE
        move
    END IF
END WHILE
";
        assert_eq!(stmt.to_string(), expected);
    }

    #[test]
    fn test_offset_and_indent() {
        let stmt = Statement::if_then(
            Condition::Random,
            Statement::Block(vec![Statement::call("skip")]),
        );
        let config = PrettyConfig { indent: 2 };
        assert_eq!(
            pretty_statement(&stmt, 1, &config),
            " IF random THEN\n   skip\n END IF\n"
        );
    }

    #[test]
    fn test_empty_block_prints_nothing() {
        assert_eq!(Statement::empty_block().to_string(), "");
    }

    #[test]
    fn test_program_layout() {
        let context = Context::from([
            (
                "turn".to_string(),
                Statement::Block(vec![Statement::call("turnleft")]),
            ),
            ("around".to_string(), Statement::empty_block()),
        ]);
        let program = Program::new(
            "p",
            context,
            Statement::Block(vec![Statement::call("turn")]),
        );
        let expected = "\
PROGRAM p IS

    INSTRUCTION around IS
    END around

    INSTRUCTION turn IS
        turnleft
    END turn

BEGIN
    turn
END p
";
        assert_eq!(program.to_string(), expected);
        assert_eq!(pretty_program(&program, &PrettyConfig::default()), expected);
    }
}
