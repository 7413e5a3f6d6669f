//! The `.vcxproj.filters` document.

use std::path::PathBuf;

use super::{braced, item_group, MSBUILD_NAMESPACE};
use crate::document::{Document, Element};
use crate::filters::FilterNode;
use crate::module::{FileCatalog, Module};

/// Assembles the filter document: filters in the given order, then headers,
/// then translation units, each file mapped to its directory's filter.
///
/// Files at the module root get no `Filter` element.
#[must_use]
pub fn assemble_filters(module: &Module, filters: &[FilterNode], catalog: &FileCatalog) -> Document {
    let filter_group = item_group().children(filters.iter().map(|node| {
        Element::builder("Filter")
            .attr("Include", node.relative_path.as_str())
            .text_child("UniqueIdentifier", braced(&node.identifier))
            .build()
    }));

    Document::new(
        Element::builder("Project")
            .attr("ToolsVersion", "4.0")
            .attr("xmlns", MSBUILD_NAMESPACE)
            .child(filter_group.build())
            .child(file_group(module, "ClInclude", catalog.non_compilable()))
            .child(file_group(module, "ClCompile", catalog.compilable()))
            .build(),
    )
}

fn file_group(module: &Module, item: &str, files: &[PathBuf]) -> Element {
    item_group()
        .children(files.iter().map(|file| {
            Element::builder(item)
                .attr("Include", file.display().to_string())
                .maybe_child(module.filter_of(file).map(|filter| Element::text("Filter", filter)))
                .build()
        }))
        .build()
}
