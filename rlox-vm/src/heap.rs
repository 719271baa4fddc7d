// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The object heap and string interning.
//!
//! All heap objects live in a single owner collection and are addressed by
//! [`Handle`] indices, so dropping the heap frees everything at once and
//! handles stay valid for the heap's whole lifetime (objects are never
//! reclaimed individually). Both the compiler and the VM route every string
//! they create through [`Heap::intern`], which is what makes handle equality
//! coincide with byte equality for strings.

use std::rc::Rc;

use crate::chunk::Chunk;
use crate::table::Table;
use crate::value::Value;

/// Index of a heap object. Valid for the lifetime of the heap that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(u32);

impl Handle {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A heap-allocated object.
#[derive(Debug)]
pub enum Obj {
    String(ObjString),
    Function(ObjFunction),
}

/// An immutable, interned string with its precomputed FNV-1a hash.
#[derive(Debug)]
pub struct ObjString {
    pub chars: String,
    pub hash: u32,
}

/// A compiled function.
///
/// The chunk is shared via `Rc`: it is never mutated after compilation, and
/// each call frame holds a cheap clone of it.
#[derive(Debug)]
pub struct ObjFunction {
    pub arity: u8,
    pub chunk: Rc<Chunk>,
    /// Interned function name; `None` for the top-level script.
    pub name: Option<Handle>,
}

/// The object heap.
#[derive(Debug, Default)]
pub struct Heap {
    objects: Vec<Obj>,
    /// Intern set: every live string keyed by itself.
    strings: Table,
}

impl Heap {
    /// Create a new empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// All live objects, for hash lookups keyed by handle.
    #[inline]
    pub fn objects(&self) -> &[Obj] {
        &self.objects
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn alloc(&mut self, obj: Obj) -> Handle {
        let handle = Handle(self.objects.len() as u32);
        self.objects.push(obj);
        handle
    }

    /// Allocate a function object.
    pub fn alloc_function(&mut self, function: ObjFunction) -> Handle {
        self.alloc(Obj::Function(function))
    }

    /// Intern a string: returns the existing handle if these bytes are
    /// already on the heap, otherwise allocates and registers a new object.
    pub fn intern(&mut self, chars: &str) -> Handle {
        let hash = hash_str(chars);
        if let Some(existing) = self.strings.find_string(&self.objects, chars, hash) {
            return existing;
        }
        let handle = self.alloc(Obj::String(ObjString {
            chars: chars.to_string(),
            hash,
        }));
        self.strings.set(&self.objects, handle, Value::Nil);
        handle
    }

    /// Get the object behind a handle.
    #[inline]
    pub fn get(&self, handle: Handle) -> &Obj {
        &self.objects[handle.index()]
    }

    /// Get the string behind a handle known to be a string.
    pub fn string(&self, handle: Handle) -> &ObjString {
        match self.get(handle) {
            Obj::String(s) => s,
            other => panic!("handle refers to {:?}, not a string", other),
        }
    }

    /// View a handle as a string, if it is one.
    pub fn as_string(&self, handle: Handle) -> Option<&ObjString> {
        match self.get(handle) {
            Obj::String(s) => Some(s),
            _ => None,
        }
    }

    /// View a handle as a function, if it is one.
    pub fn as_function(&self, handle: Handle) -> Option<&ObjFunction> {
        match self.get(handle) {
            Obj::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// 32-bit FNV-1a.
pub fn hash_str(s: &str) -> u32 {
    let mut hash = 2166136261u32;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16777619);
    }
    hash
}
