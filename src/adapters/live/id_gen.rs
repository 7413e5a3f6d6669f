//! Random project and filter GUIDs.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Draws a fresh v4 UUID for every `ProjectGuid` and filter
/// `UniqueIdentifier`, in the bare hyphenated form the assembler braces.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a random GUID source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}
