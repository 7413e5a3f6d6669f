//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generation core and the
//! outside world (disk, identifier source). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::{FileSystem, PortError};
pub use id_gen::IdGenerator;
