use std::collections::HashMap;

use crate::statement::Statement;

/// User-defined instructions, keyed by name.
pub type Context = HashMap<String, Statement>;

/// A complete BL program: its name, the instructions it defines, and the
/// main body run from `BEGIN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    name: String,
    context: Context,
    body: Statement,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            name: "Unnamed".to_string(),
            context: Context::new(),
            body: Statement::empty_block(),
        }
    }
}

impl Program {
    pub fn new(name: impl Into<String>, context: Context, body: Statement) -> Self {
        Self {
            name: name.into(),
            context,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn body(&self) -> &Statement {
        &self.body
    }

    /// Look up the body of a user-defined instruction.
    pub fn instruction(&self, name: &str) -> Option<&Statement> {
        self.context.get(name)
    }

    /// Replace the name, returning the old one.
    pub fn replace_name(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, name.into())
    }

    /// Replace the context, returning the old one.
    pub fn replace_context(&mut self, context: Context) -> Context {
        std::mem::replace(&mut self.context, context)
    }

    /// Replace the body, returning the old one.
    pub fn replace_body(&mut self, body: Statement) -> Statement {
        std::mem::replace(&mut self.body, body)
    }
}
