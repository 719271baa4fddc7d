// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared types for the bytecode compiler.

use std::fmt;

use rlox_lexer::Token;

/// Error during compilation.
///
/// Carries every diagnostic the parser reported before giving up, one
/// formatted line each, in source order. Panic-mode recovery means a single
/// bad statement contributes one line, not a cascade.
#[derive(Debug, Clone)]
pub struct CompileError {
    pub diagnostics: Vec<String>,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for CompileError {}

/// Local variable during compilation.
///
/// `depth == -1` marks a variable that is declared but not yet initialized,
/// which is how reads inside a variable's own initializer are caught.
#[derive(Debug, Clone, Copy)]
pub struct Local<'src> {
    pub name: Token<'src>,
    pub depth: i32,
}

/// What kind of function body is being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// The implicit top-level function wrapping a whole script.
    Script,
    /// A `fun` declaration body.
    Function,
}
