// rlox-vm - Bytecode compiler and virtual machine for the Lox programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Open-addressing hash table keyed by interned strings.
//!
//! Serves both the globals map and the string intern set. Keys are heap
//! handles to interned strings, so key equality is handle equality; the key's
//! hash is read from its `ObjString`, which is why every operation takes the
//! heap's object slice. Deleted slots become tombstones so probe sequences
//! keep walking past them.

use crate::heap::{Handle, Obj};
use crate::value::Value;

/// Grow when more than 3/4 of the slots are keys or tombstones.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

/// Smallest non-empty capacity.
const MIN_CAPACITY: usize = 8;

/// One slot. An empty slot is `(None, Nil)`; a tombstone is
/// `(None, Bool(true))`.
#[derive(Debug, Clone, Copy)]
struct Entry {
    key: Option<Handle>,
    value: Value,
}

const EMPTY: Entry = Entry {
    key: None,
    value: Value::Nil,
};

const TOMBSTONE: Entry = Entry {
    key: None,
    value: Value::Bool(true),
};

/// Open-addressing hash table with linear probing and tombstones.
#[derive(Debug, Default)]
pub struct Table {
    /// Slots holding a key or a tombstone. Never exceeds 3/4 of capacity.
    count: usize,
    entries: Vec<Entry>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`.
    pub fn get(&self, objects: &[Obj], key: Handle) -> Option<Value> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = &self.entries[find_slot(&self.entries, objects, key)];
        entry.key.map(|_| entry.value)
    }

    /// Insert or update `key`. Returns true if the key was not present.
    pub fn set(&mut self, objects: &[Obj], key: Handle, value: Value) -> bool {
        if (self.count + 1) * MAX_LOAD_DEN > self.entries.len() * MAX_LOAD_NUM {
            self.grow(objects);
        }

        let slot = find_slot(&self.entries, objects, key);
        let entry = &mut self.entries[slot];
        let is_new = entry.key.is_none();
        // Reusing a tombstone does not raise the load: it is already counted.
        if is_new && matches!(entry.value, Value::Nil) {
            self.count += 1;
        }
        *entry = Entry {
            key: Some(key),
            value,
        };
        is_new
    }

    /// Remove `key`, leaving a tombstone. Returns true if it was present.
    pub fn delete(&mut self, objects: &[Obj], key: Handle) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let slot = find_slot(&self.entries, objects, key);
        if self.entries[slot].key.is_none() {
            return false;
        }
        self.entries[slot] = TOMBSTONE;
        true
    }

    /// Bytewise lookup in the intern set: find the handle of an interned
    /// string equal to `chars`, if any. `hash` must be the FNV-1a hash of
    /// `chars`.
    pub fn find_string(&self, objects: &[Obj], chars: &str, hash: u32) -> Option<Handle> {
        if self.entries.is_empty() {
            return None;
        }
        let mut index = hash as usize % self.entries.len();
        loop {
            let entry = &self.entries[index];
            match entry.key {
                None => {
                    // Stop at a truly empty slot, keep probing past tombstones
                    if matches!(entry.value, Value::Nil) {
                        return None;
                    }
                }
                Some(key) => {
                    if let Obj::String(s) = &objects[key.index()] {
                        if s.hash == hash && s.chars == chars {
                            return Some(key);
                        }
                    }
                }
            }
            index = (index + 1) % self.entries.len();
        }
    }

    fn grow(&mut self, objects: &[Obj]) {
        let capacity = if self.entries.is_empty() {
            MIN_CAPACITY
        } else {
            self.entries.len() * 2
        };

        let old = std::mem::replace(&mut self.entries, vec![EMPTY; capacity]);
        // Tombstones are dropped by the rehash, so recount from scratch
        self.count = 0;
        for entry in old {
            if let Some(key) = entry.key {
                let slot = find_slot(&self.entries, objects, key);
                self.entries[slot] = entry;
                self.count += 1;
            }
        }
    }
}

/// Probe for `key`: returns the index of its slot, or of the slot where it
/// should be inserted (the first tombstone seen, else the empty slot that
/// ended the probe).
fn find_slot(entries: &[Entry], objects: &[Obj], key: Handle) -> usize {
    let mut index = key_hash(objects, key) as usize % entries.len();
    let mut tombstone: Option<usize> = None;

    loop {
        let entry = &entries[index];
        match entry.key {
            None => {
                if matches!(entry.value, Value::Nil) {
                    return tombstone.unwrap_or(index);
                }
                if tombstone.is_none() {
                    tombstone = Some(index);
                }
            }
            Some(existing) if existing == key => return index,
            Some(_) => {}
        }
        index = (index + 1) % entries.len();
    }
}

fn key_hash(objects: &[Obj], key: Handle) -> u32 {
    match &objects[key.index()] {
        Obj::String(s) => s.hash,
        other => {
            debug_assert!(false, "table key is not an interned string: {:?}", other);
            0
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::Heap;

    fn heap_with(names: &[&str]) -> (Heap, Vec<Handle>) {
        let mut heap = Heap::new();
        let handles = names.iter().map(|n| heap.intern(n)).collect();
        (heap, handles)
    }

    #[test]
    fn test_get_from_empty() {
        let (heap, keys) = heap_with(&["a"]);
        let table = Table::new();
        assert_eq!(table.get(heap.objects(), keys[0]), None);
    }

    #[test]
    fn test_set_then_get() {
        let (heap, keys) = heap_with(&["a", "b"]);
        let mut table = Table::new();
        assert!(table.set(heap.objects(), keys[0], Value::Number(1.0)));
        assert!(table.set(heap.objects(), keys[1], Value::Number(2.0)));
        assert_eq!(table.get(heap.objects(), keys[0]), Some(Value::Number(1.0)));
        assert_eq!(table.get(heap.objects(), keys[1]), Some(Value::Number(2.0)));
    }

    #[test]
    fn test_set_existing_returns_false_and_updates() {
        let (heap, keys) = heap_with(&["a"]);
        let mut table = Table::new();
        assert!(table.set(heap.objects(), keys[0], Value::Number(1.0)));
        assert!(!table.set(heap.objects(), keys[0], Value::Number(9.0)));
        assert_eq!(table.get(heap.objects(), keys[0]), Some(Value::Number(9.0)));
    }

    #[test]
    fn test_delete_leaves_reusable_tombstone() {
        let (heap, keys) = heap_with(&["a", "b"]);
        let mut table = Table::new();
        table.set(heap.objects(), keys[0], Value::Number(1.0));
        table.set(heap.objects(), keys[1], Value::Number(2.0));

        assert!(table.delete(heap.objects(), keys[0]));
        assert!(!table.delete(heap.objects(), keys[0]));
        assert_eq!(table.get(heap.objects(), keys[0]), None);
        // The surviving key still probes correctly past the tombstone
        assert_eq!(table.get(heap.objects(), keys[1]), Some(Value::Number(2.0)));

        // Re-inserting lands back in the table
        assert!(table.set(heap.objects(), keys[0], Value::Number(3.0)));
        assert_eq!(table.get(heap.objects(), keys[0]), Some(Value::Number(3.0)));
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut heap = Heap::new();
        let keys: Vec<Handle> = (0..64).map(|i| heap.intern(&format!("k{}", i))).collect();
        let mut table = Table::new();
        for (i, &k) in keys.iter().enumerate() {
            table.set(heap.objects(), k, Value::Number(i as f64));
        }
        for (i, &k) in keys.iter().enumerate() {
            assert_eq!(table.get(heap.objects(), k), Some(Value::Number(i as f64)));
        }
    }

    #[test]
    fn test_nil_value_is_distinguishable_from_absent() {
        let (heap, keys) = heap_with(&["a"]);
        let mut table = Table::new();
        table.set(heap.objects(), keys[0], Value::Nil);
        assert_eq!(table.get(heap.objects(), keys[0]), Some(Value::Nil));
    }

    #[test]
    fn test_find_string_misses_on_unseen_bytes() {
        let (heap, _keys) = heap_with(&["alpha"]);
        // The heap's own intern set is exercised through Heap::intern; here
        // probe a standalone table that never saw the string.
        let table = Table::new();
        assert_eq!(
            table.find_string(heap.objects(), "alpha", crate::heap::hash_str("alpha")),
            None
        );
    }
}
