// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Chunk disassembler.
//!
//! Renders bytecode in the classic column format:
//!
//! ```text
//! == <script> ==
//! 0000    1 OP_CONSTANT         0 '1'
//! 0002    | OP_PRINT
//! ```

use crate::chunk::Chunk;
use crate::heap::Heap;
use crate::opcode::OpCode;
use crate::value::format_value;

/// Disassemble a whole chunk to stderr under the given header.
pub fn disassemble_chunk(chunk: &Chunk, heap: &Heap, name: &str) {
    eprintln!("== {} ==", name);
    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(chunk, heap, offset);
    }
}

/// Disassemble the instruction at `offset`; returns the offset of the next
/// instruction.
pub fn disassemble_instruction(chunk: &Chunk, heap: &Heap, offset: usize) -> usize {
    eprint!("{:04} ", offset);
    if offset > 0 && chunk.line_of(offset) == chunk.line_of(offset - 1) {
        eprint!("   | ");
    } else {
        eprint!("{:4} ", chunk.line_of(offset));
    }

    let byte = chunk.code[offset];
    let Some(op) = OpCode::from_byte(byte) else {
        eprintln!("Unknown opcode {}", byte);
        return offset + 1;
    };

    match op {
        OpCode::Constant | OpCode::GetGlobal | OpCode::DefineGlobal | OpCode::SetGlobal => {
            constant_instruction(chunk, heap, op, offset)
        }
        OpCode::GetLocal | OpCode::SetLocal | OpCode::Call => byte_instruction(chunk, op, offset),
        OpCode::Jump | OpCode::JumpIfFalse => jump_instruction(chunk, op, 1, offset),
        OpCode::Loop => jump_instruction(chunk, op, -1, offset),
        _ => {
            eprintln!("{}", op.mnemonic());
            offset + 1
        }
    }
}

fn constant_instruction(chunk: &Chunk, heap: &Heap, op: OpCode, offset: usize) -> usize {
    let index = chunk.code[offset + 1];
    let rendered = chunk
        .constants
        .get(index as usize)
        .map(|&v| format_value(v, heap))
        .unwrap_or_else(|| "<bad constant>".to_string());
    eprintln!("{:<16} {:4} '{}'", op.mnemonic(), index, rendered);
    offset + 2
}

fn byte_instruction(chunk: &Chunk, op: OpCode, offset: usize) -> usize {
    let slot = chunk.code[offset + 1];
    eprintln!("{:<16} {:4}", op.mnemonic(), slot);
    offset + 2
}

fn jump_instruction(chunk: &Chunk, op: OpCode, sign: i64, offset: usize) -> usize {
    let jump = u16::from_be_bytes([chunk.code[offset + 1], chunk.code[offset + 2]]) as i64;
    let target = offset as i64 + 3 + sign * jump;
    eprintln!("{:<16} {:4} -> {}", op.mnemonic(), offset, target);
    offset + 3
}
