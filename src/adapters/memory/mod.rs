//! In-memory adapters for tests and dry runs.

pub mod filesystem;
pub mod overlay;

pub use filesystem::MemoryFileSystem;
pub use overlay::OverlayFileSystem;
