// rlox-vm - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for rlox-vm integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use rlox_vm::{InterpretError, Vm};

/// Interpret `source` in a fresh VM, returning everything it printed.
pub fn run(source: &str) -> Result<String, InterpretError> {
    let mut vm = Vm::new();
    run_with_vm(&mut vm, source)
}

/// Interpret `source` in an existing VM (globals and interned strings
/// persist across calls, like the REPL).
pub fn run_with_vm(vm: &mut Vm, source: &str) -> Result<String, InterpretError> {
    let mut out = Vec::new();
    vm.interpret(source, &mut out)?;
    Ok(String::from_utf8(out).expect("program output is UTF-8"))
}

/// Interpret `source`, panicking with the diagnostics if it fails.
pub fn run_ok(source: &str) -> String {
    match run(source) {
        Ok(out) => out,
        Err(e) => panic!("program failed: {}\nsource: {}", e, source),
    }
}

/// Interpret `source`, panicking if it unexpectedly succeeds.
pub fn run_err(source: &str) -> InterpretError {
    match run(source) {
        Ok(out) => panic!("expected failure, got output {:?}\nsource: {}", out, source),
        Err(e) => e,
    }
}

/// The compile diagnostics for `source`, which must fail to compile.
pub fn compile_error(source: &str) -> Vec<String> {
    match run_err(source) {
        InterpretError::Compile(e) => e.diagnostics,
        InterpretError::Runtime { error, .. } => {
            panic!("expected compile error, got runtime error: {}", error)
        }
    }
}

/// The runtime error message and stack trace for `source`, which must trap.
pub fn runtime_error(source: &str) -> (String, Vec<String>) {
    match run_err(source) {
        InterpretError::Runtime { error, trace } => (error.to_string(), trace),
        InterpretError::Compile(e) => panic!("expected runtime error, got compile error: {}", e),
    }
}
