// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Bytecode compiler and stack-based virtual machine for Lox.
//!
//! Source text goes in one end, a top-level function full of bytecode comes
//! out of [`compiler::compile`], and [`vm::Vm`] executes it. The [`heap::Heap`]
//! is shared by both: the compiler interns string literals and identifier
//! names, the VM interns everything it builds at runtime, and handle equality
//! therefore coincides with string equality everywhere.

pub mod chunk;
pub mod compiler;
pub mod debug;
pub mod heap;
pub mod opcode;
pub mod table;
pub mod value;
pub mod vm;

pub use chunk::Chunk;
pub use compiler::{CompileError, compile};
pub use heap::{Handle, Heap, Obj, ObjFunction, ObjString};
pub use opcode::OpCode;
pub use value::{Value, format_value};
pub use vm::{InterpretError, RuntimeError, Vm};
