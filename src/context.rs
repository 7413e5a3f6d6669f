//! Service context bundling the port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::sequential::SequentialIdGenerator;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter combinations (live disk, random
/// or sequential ids, in-memory output).
pub struct ServiceContext {
    /// Filesystem for listing sources and writing descriptors.
    pub fs: Box<dyn FileSystem>,
    /// Source of project and filter GUIDs.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Real disk, random GUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), id_gen: Box::new(LiveIdGenerator::new()) }
    }

    /// Real disk, sequential GUIDs, so reruns produce identical files.
    #[must_use]
    pub fn deterministic() -> Self {
        Self { fs: Box::new(LiveFileSystem), id_gen: Box::new(SequentialIdGenerator::new()) }
    }

    /// Custom filesystem with sequential GUIDs.
    #[must_use]
    pub fn with_filesystem(fs: Box<dyn FileSystem>) -> Self {
        Self { fs, id_gen: Box::new(SequentialIdGenerator::new()) }
    }

    /// Replaces the id source.
    #[must_use]
    pub fn with_id_generator(mut self, id_gen: Box<dyn IdGenerator>) -> Self {
        self.id_gen = id_gen;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn deterministic_context_repeats_ids() {
        let a = ServiceContext::deterministic();
        let b = ServiceContext::deterministic();
        assert_eq!(a.id_gen.generate_id(), b.id_gen.generate_id());
    }

    #[test]
    fn live_context_draws_random_ids() {
        let ctx = ServiceContext::live();
        assert_ne!(ctx.id_gen.generate_id(), ctx.id_gen.generate_id());
    }

    #[test]
    fn custom_filesystem_gets_sequential_ids() {
        let ctx = ServiceContext::with_filesystem(Box::new(MemoryFileSystem::new()));
        assert_eq!(ctx.id_gen.generate_id(), "00000000-0000-0000-0000-000000000001");
        assert!(!ctx.fs.exists(Path::new("/anything")));
    }

    #[test]
    fn id_generator_can_be_replaced() {
        let ctx = ServiceContext::deterministic().with_id_generator(Box::new(LiveIdGenerator::new()));
        assert_ne!(ctx.id_gen.generate_id(), "00000000-0000-0000-0000-000000000001");
    }
}
