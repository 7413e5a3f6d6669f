//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Project and filter GUIDs are drawn from this port so that tests can
/// substitute a predictable sequence and compare output byte for byte.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier in bare `8-4-4-4-12` hex form, without braces.
    fn generate_id(&self) -> String;
}
