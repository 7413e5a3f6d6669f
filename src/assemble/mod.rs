//! Builds the project and filter documents for a module.

pub mod filters;
pub mod project;

pub use filters::assemble_filters;
pub use project::{assemble_project, AssembledProject};

use crate::document::{Element, ElementBuilder};

/// Namespace of every MSBuild project document.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Wraps a bare GUID in braces, the form MSBuild stores.
#[must_use]
pub fn braced(id: &str) -> String {
    format!("{{{id}}}")
}

fn item_group() -> ElementBuilder {
    Element::builder("ItemGroup")
}
