//! XML serialization for [`Document`].

use std::borrow::Cow;

use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{Content, Document, Element};

const INDENT_WIDTH: usize = 2;

/// Serializes `document` with an XML declaration and two-space indentation.
///
/// Elements and attributes are written exactly in the order they were
/// built. Empty child lists become self-closing tags.
///
/// # Errors
///
/// Returns the writer's message if an event cannot be written.
pub fn to_xml(document: &Document) -> Result<String, String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut writer, document.root())?;
    String::from_utf8(writer.into_inner()).map_err(|e| e.to_string())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), String> {
    let mut escaped = Vec::with_capacity(element.attributes().len());
    for (key, value) in element.attributes() {
        escaped.push((key.as_str(), escape_attribute(value)));
    }
    let mut start = BytesStart::new(element.name());
    for (key, value) in &escaped {
        start.push_attribute(Attribute::from((key.as_bytes(), value.as_bytes())));
    }

    match element.content() {
        Content::Children(children) if children.is_empty() => emit(writer, Event::Empty(start)),
        Content::Children(children) => {
            emit(writer, Event::Start(start))?;
            for child in children {
                write_element(writer, child)?;
            }
            emit(writer, Event::End(BytesEnd::new(element.name())))
        }
        Content::Text(text) => {
            emit(writer, Event::Start(start))?;
            emit(writer, Event::Text(BytesText::from_escaped(escape_text(text))))?;
            emit(writer, Event::End(BytesEnd::new(element.name())))
        }
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}

/// Escapes `&`, `<` and `>`. Quotes are left alone in text.
fn escape_text(raw: &str) -> Cow<'_, str> {
    partial_escape(raw)
}

/// Like [`escape_text`], plus `"` since attributes are double-quoted.
/// MSBuild conditions keep their single quotes verbatim.
fn escape_attribute(raw: &str) -> Cow<'_, str> {
    let escaped = partial_escape(raw);
    if escaped.contains('"') {
        Cow::Owned(escaped.replace('"', "&quot;"))
    } else {
        escaped
    }
}
