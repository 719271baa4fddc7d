// rlox - A Lox bytecode compiler and virtual machine written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use rlox_vm::{InterpretError, Vm};

// Exit codes per BSD sysexits.h
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_SOFTWARE: i32 = 70;
const EX_IOERR: i32 = 74;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("rlox v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    match args.len() {
        1 => run_repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: rlox [path]");
            process::exit(EX_USAGE);
        }
    }
}

/// Execute a single source file.
fn run_file(path: &str) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading '{}': {}", path, e);
            process::exit(EX_IOERR);
        }
    };

    let mut vm = Vm::new();
    let mut stdout = io::stdout();
    if let Err(e) = vm.interpret(&source, &mut stdout) {
        eprintln!("{}", e);
        let code = match e {
            InterpretError::Compile(_) => EX_DATAERR,
            InterpretError::Runtime { .. } => EX_SOFTWARE,
        };
        process::exit(code);
    }
}

/// Run the interactive REPL.
///
/// One VM lives for the whole session, so globals defined on one line are
/// visible on the next.
fn run_repl() {
    let mut vm = Vm::new();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = vm.interpret(&line, &mut stdout) {
                    eprintln!("{}", e);
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
