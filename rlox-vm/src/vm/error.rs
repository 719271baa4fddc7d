// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime errors for the VM.

use std::fmt;

use crate::compiler::CompileError;

/// Runtime error during VM execution.
#[derive(Debug, Clone)]
pub enum RuntimeError {
    /// Arithmetic or comparison on non-numbers.
    OperandsMustBeNumbers,
    /// Negation of a non-number.
    OperandMustBeNumber,
    /// `+` on anything other than two numbers or two strings.
    OperandsMustBeAddable,
    /// Read or write of a global that was never defined.
    UndefinedVariable(String),
    /// Call of a value that is not a function.
    NotCallable,
    /// Call with the wrong number of arguments.
    ArityMismatch { expected: u8, got: u8 },
    /// Call-frame depth limit exceeded.
    StackOverflow,
    /// Value stack popped past its base.
    StackUnderflow,
    /// Malformed bytecode; indicates a compiler bug.
    Internal(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::OperandsMustBeNumbers => write!(f, "Operands must be numbers."),
            RuntimeError::OperandMustBeNumber => write!(f, "Operand must be a number."),
            RuntimeError::OperandsMustBeAddable => {
                write!(f, "Operands must be two numbers or two strings.")
            }
            RuntimeError::UndefinedVariable(name) => {
                write!(f, "Undefined variable '{}'.", name)
            }
            RuntimeError::NotCallable => write!(f, "Can only call functions and classes."),
            RuntimeError::ArityMismatch { expected, got } => {
                write!(f, "Expected {} arguments but got {}.", expected, got)
            }
            RuntimeError::StackOverflow => write!(f, "Stack overflow."),
            RuntimeError::StackUnderflow => write!(f, "Stack underflow."),
            RuntimeError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for VM operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Why `interpret` gave up.
#[derive(Debug, Clone)]
pub enum InterpretError {
    /// The source did not compile.
    Compile(CompileError),
    /// Execution trapped; `trace` holds one `[line N] in name` entry per
    /// active call frame, innermost first.
    Runtime {
        error: RuntimeError,
        trace: Vec<String>,
    },
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::Compile(e) => write!(f, "{}", e),
            InterpretError::Runtime { error, trace } => {
                write!(f, "{}", error)?;
                for line in trace {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<CompileError> for InterpretError {
    fn from(e: CompileError) -> Self {
        InterpretError::Compile(e)
    }
}
