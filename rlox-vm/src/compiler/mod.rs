// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Single-pass bytecode compiler.
//!
//! A Pratt parser wired directly to a code emitter: there is no AST. Tokens
//! are pulled lazily from the lexer and bytecode comes out the other side,
//! one expression or statement at a time.

pub mod codegen;
pub mod types;

pub use codegen::compile;
pub use types::CompileError;
