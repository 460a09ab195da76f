//! Event identifier generation.

use std::cell::Cell;

/// Source of fresh, collision-free event identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` identifiers, unique within one generator
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        format!("{}-{}", self.prefix, id)
    }
}
