//! Deterministic adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::id_gen::IdGenerator;

/// Hands out GUID-shaped identifiers from a counter starting at 1.
///
/// Two generators fed the same sequence of calls produce the same ids, which
/// makes generated descriptors byte-for-byte reproducible.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id ends in `...000000000001`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("00000000-0000-0000-0000-{n:012x}")
    }
}
