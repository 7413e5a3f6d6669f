//! Deterministic adapters for reproducible output.

pub mod id_gen;

pub use id_gen::SequentialIdGenerator;
