// rlox-lexer - Lexer for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # rlox-lexer
//!
//! Lexer for the Lox programming language. Produces a lazy stream of
//! [`Token`]s from a source string; the bytecode compiler in `rlox-vm`
//! consumes them one at a time.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
