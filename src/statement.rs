//! Tree representation of parsed BL statements.

use crate::condition::Condition;

/// A BL statement. Each node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Statements run in order.
    Block(Vec<Statement>),
    /// `IF c THEN body END IF`
    If {
        condition: Condition,
        body: Box<Statement>,
    },
    /// `IF c THEN then_body ELSE else_body END IF`
    IfElse {
        condition: Condition,
        then_body: Box<Statement>,
        else_body: Box<Statement>,
    },
    /// `WHILE c DO body END WHILE`
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    /// A primitive or user-defined instruction; not resolved here.
    Call(String),
}

/// Discriminant of a [`Statement`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl Default for Statement {
    fn default() -> Self {
        Self::empty_block()
    }
}

impl Statement {
    pub fn empty_block() -> Self {
        Statement::Block(Vec::new())
    }

    pub fn call(name: impl Into<String>) -> Self {
        Statement::Call(name.into())
    }

    pub fn if_then(condition: Condition, body: Statement) -> Self {
        Statement::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn if_else(condition: Condition, then_body: Statement, else_body: Statement) -> Self {
        Statement::IfElse {
            condition,
            then_body: Box::new(then_body),
            else_body: Box::new(else_body),
        }
    }

    pub fn while_do(condition: Condition, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Statement::Block(_) => Kind::Block,
            Statement::If { .. } => Kind::If,
            Statement::IfElse { .. } => Kind::IfElse,
            Statement::While { .. } => Kind::While,
            Statement::Call(_) => Kind::Call,
        }
    }

    /// Number of statements in a block; `None` for anything else.
    pub fn block_len(&self) -> Option<usize> {
        match self {
            Statement::Block(stmts) => Some(stmts.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_block() {
        let s = Statement::default();
        assert_eq!(s.kind(), Kind::Block);
        assert_eq!(s.block_len(), Some(0));
    }

    #[test]
    fn test_constructors() {
        let s = Statement::if_else(
            Condition::Random,
            Statement::Block(vec![Statement::call("move")]),
            Statement::empty_block(),
        );
        assert_eq!(s.kind(), Kind::IfElse);
        assert_eq!(s.block_len(), None);
        match s {
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                assert_eq!(condition, Condition::Random);
                assert_eq!(then_body.block_len(), Some(1));
                assert_eq!(*else_body, Statement::empty_block());
            }
            _ => panic!("expected IfElse"),
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Statement::call("x").kind(), Kind::Call);
        assert_eq!(
            Statement::while_do(Condition::True, Statement::empty_block()).kind(),
            Kind::While
        );
        assert_eq!(
            Statement::if_then(Condition::True, Statement::empty_block()).kind(),
            Kind::If
        );
    }
}
