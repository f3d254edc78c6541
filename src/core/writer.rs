use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use crate::core::{
    data::{Catalog, Message, TranslationValue},
    parsers::locations::LocationEncoder,
};

/// Serialize a catalog in the layout lupdate produces.
///
/// Location attributes are re-derived from the resolved references, so
/// removing or adding messages keeps relative line deltas consistent.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut locations = LocationEncoder::new(catalog.location_style);

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");
    out.push_str("<TS");
    if let Some(version) = &catalog.version {
        push_attr(&mut out, "version", version);
    }
    if let Some(language) = &catalog.language {
        push_attr(&mut out, "language", language);
    }
    if let Some(source_language) = &catalog.source_language {
        push_attr(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", protect(&context.name));
        for message in &context.messages {
            write_message(&mut out, message, &mut locations);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Write a catalog back to its `file_path`.
pub fn save_catalog(catalog: &Catalog) -> Result<()> {
    let path = Path::new(&catalog.file_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, write_catalog(catalog))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

fn write_message(out: &mut String, message: &Message, locations: &mut LocationEncoder) {
    out.push_str("    <message");
    if let Some(id) = &message.id {
        push_attr(out, "id", id);
    }
    if message.numerus {
        push_attr(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for source_ref in &message.locations {
        let attrs = locations.encode(source_ref);
        out.push_str("        <location");
        if let Some(filename) = &attrs.filename {
            push_attr(out, "filename", filename);
        }
        if let Some(line) = &attrs.line {
            push_attr(out, "line", line);
        }
        out.push_str("/>\n");
    }

    let _ = writeln!(out, "        <source>{}</source>", protect(&message.source));
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            let _ = writeln!(out, "        <{tag}>{}</{tag}>", protect(value));
        }
    }

    out.push_str("        <translation");
    if let Some(kind) = message.translation.status.type_attr() {
        push_attr(out, "type", kind);
    }
    out.push('>');
    match &message.translation.value {
        TranslationValue::Single(text) => out.push_str(&protect(text)),
        TranslationValue::Plural(forms) if forms.is_empty() => {}
        TranslationValue::Plural(forms) => {
            out.push('\n');
            for form in forms {
                let _ = writeln!(
                    out,
                    "            <numerusform>{}</numerusform>",
                    protect(form)
                );
            }
            out.push_str("        ");
        }
    }
    out.push_str("</translation>\n");
    out.push_str("    </message>\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, protect(value));
}

/// Escape text for the catalog the way lupdate does: C0 controls other than
/// newline and tab, and non-ASCII whitespace, become `<byte>` elements.
fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;

    for (i, c) in text.char_indices() {
        if needs_byte_element(c) {
            out.push_str(&escape(&text[plain_start..i]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            plain_start = i + c.len_utf8();
        }
    }
    out.push_str(&escape(&text[plain_start..]));
    out
}

fn needs_byte_element(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        c if (c as u32) < 0x20 => true,
        c => !c.is_ascii() && c.is_whitespace(),
    }
}
