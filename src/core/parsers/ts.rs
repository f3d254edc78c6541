use std::{fmt::Display, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

use super::locations::LocationResolver;
use crate::core::data::{Catalog, Context, Message, Translation, TranslationStatus, TranslationValue};

/// Errors produced while reading a `.ts` catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: malformed XML: {message}")]
    Xml {
        path: String,
        line: usize,
        message: String,
    },
    #[error("{path}: root element is <{found}>, expected <TS>")]
    NotACatalog { path: String, found: String },
    #[error("{path}:{line}: {message}")]
    Invalid {
        path: String,
        line: usize,
        message: String,
    },
}

/// Read and parse a catalog file.
pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: file_path.clone(),
        source,
    })?;
    parse_catalog(&content, &file_path)
}

/// Parse catalog content. `file_path` is recorded on the catalog and used in
/// error messages.
pub fn parse_catalog(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    CatalogParser::new(content, file_path).parse()
}

/// Build an index of line start byte offsets for O(log n) line lookups.
pub(crate) fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset.
pub(crate) fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

struct CatalogParser<'a> {
    content: &'a str,
    file_path: &'a str,
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
    locations: LocationResolver,
}

impl<'a> CatalogParser<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        Self {
            content,
            file_path,
            reader: Reader::from_str(content),
            line_index: build_line_index(content),
            locations: LocationResolver::new(),
        }
    }

    fn parse(mut self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new(self.file_path);

        loop {
            match self.next_event()? {
                Event::Start(e) => {
                    self.expect_root(&e)?;
                    self.read_root_attributes(&e, &mut catalog)?;
                    self.parse_root_body(&mut catalog)?;
                    catalog.location_style = self.locations.style();
                    return Ok(catalog);
                }
                Event::Empty(e) => {
                    self.expect_root(&e)?;
                    self.read_root_attributes(&e, &mut catalog)?;
                    return Ok(catalog);
                }
                Event::Eof => return Err(self.invalid("missing <TS> root element")),
                _ => {}
            }
        }
    }

    fn expect_root(&self, e: &BytesStart<'_>) -> Result<(), CatalogError> {
        if e.name().as_ref() == b"TS" {
            Ok(())
        } else {
            Err(CatalogError::NotACatalog {
                path: self.file_path.to_string(),
                found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            })
        }
    }

    fn read_root_attributes(
        &self,
        e: &BytesStart<'_>,
        catalog: &mut Catalog,
    ) -> Result<(), CatalogError> {
        catalog.version = self.attribute(e, b"version")?;
        catalog.language = self.attribute(e, b"language")?;
        catalog.source_language = self.attribute(e, b"sourcelanguage")?;
        Ok(())
    }

    fn parse_root_body(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        loop {
            match self.next_event()? {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.parse_context()?;
                    catalog.contexts.push(context);
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(e) if e.name().as_ref() == b"TS" => return Ok(()),
                Event::Eof => return Err(self.invalid("unexpected end of file inside <TS>")),
                _ => {}
            }
        }
    }

    fn parse_context(&mut self) -> Result<Context, CatalogError> {
        let mut context = Context::new(String::new());

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => context.name = self.read_text(b"name")?,
                    b"message" => {
                        let offset = self.tag_offset("message");
                        let message = self.parse_message(&e, offset)?;
                        context.messages.push(message);
                    }
                    _ => self.skip(&e)?,
                },
                Event::End(e) if e.name().as_ref() == b"context" => return Ok(context),
                Event::Eof => {
                    return Err(self.invalid("unexpected end of file inside <context>"));
                }
                _ => {}
            }
        }
    }

    fn parse_message(
        &mut self,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<Message, CatalogError> {
        let (line, col) = self.line_col(offset);
        let numerus = self.attribute(start, b"numerus")?.as_deref() == Some("yes");
        let id = self.attribute(start, b"id")?;

        let mut source: Option<String> = None;
        let mut translation: Option<Translation> = None;
        let mut message = Message::new(String::new(), Translation::unfinished(""));

        loop {
            match self.next_event()? {
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => self.read_location(&e, &mut message)?,
                    b"source" => source = Some(String::new()),
                    b"translation" => {
                        let status = self.translation_status(&e)?;
                        translation = Some(Translation {
                            status,
                            value: empty_value(numerus),
                        });
                    }
                    _ => {}
                },
                Event::Start(e) => match e.name().as_ref() {
                    b"location" => {
                        self.read_location(&e, &mut message)?;
                        self.skip(&e)?;
                    }
                    b"source" => source = Some(self.read_text(b"source")?),
                    b"oldsource" => message.old_source = Some(self.read_text(b"oldsource")?),
                    b"comment" => message.comment = Some(self.read_text(b"comment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text(b"extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text(b"translatorcomment")?)
                    }
                    b"translation" => translation = Some(self.parse_translation(&e, numerus)?),
                    _ => self.skip(&e)?,
                },
                Event::End(e) if e.name().as_ref() == b"message" => break,
                Event::Eof => {
                    return Err(self.invalid("unexpected end of file inside <message>"));
                }
                _ => {}
            }
        }

        message.source = match source {
            Some(source) => source,
            None if id.is_some() => String::new(),
            None => {
                return Err(CatalogError::Invalid {
                    path: self.file_path.to_string(),
                    line,
                    message: "<message> has no <source>".to_string(),
                });
            }
        };
        message.translation = translation.unwrap_or(Translation {
            status: TranslationStatus::Unfinished,
            value: empty_value(numerus),
        });
        message.id = id;
        message.numerus = numerus;
        message.line = line;
        message.col = col;
        Ok(message)
    }

    fn read_location(
        &mut self,
        e: &BytesStart<'_>,
        message: &mut Message,
    ) -> Result<(), CatalogError> {
        let filename = self.attribute(e, b"filename")?;
        let line = self.attribute(e, b"line")?;
        let source_ref = self
            .locations
            .resolve(filename.as_deref(), line.as_deref())
            .map_err(|message| self.invalid(message))?;
        message.locations.push(source_ref);
        Ok(())
    }

    fn translation_status(&self, e: &BytesStart<'_>) -> Result<TranslationStatus, CatalogError> {
        match self.attribute(e, b"type")?.as_deref() {
            None | Some("") => Ok(TranslationStatus::Finished),
            Some("unfinished") => Ok(TranslationStatus::Unfinished),
            Some("vanished") => Ok(TranslationStatus::Vanished),
            Some("obsolete") => Ok(TranslationStatus::Obsolete),
            Some(other) => Err(self.invalid(format!("unknown translation type \"{}\"", other))),
        }
    }

    fn parse_translation(
        &mut self,
        start: &BytesStart<'_>,
        numerus: bool,
    ) -> Result<Translation, CatalogError> {
        let status = self.translation_status(start)?;
        let mut text = String::new();
        let mut forms: Vec<String> = Vec::new();
        let mut variants: Vec<String> = Vec::new();

        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|err| self.xml_error(err))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Start(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(self.read_text(b"numerusform")?),
                    b"lengthvariant" => variants.push(self.read_text(b"lengthvariant")?),
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"numerusform" => forms.push(String::new()),
                    b"byte" => text.push(self.byte_value(&e)?),
                    _ => {}
                },
                Event::End(e) if e.name().as_ref() == b"translation" => break,
                Event::Eof => {
                    return Err(self.invalid("unexpected end of file inside <translation>"));
                }
                _ => {}
            }
        }

        let value = if !forms.is_empty() {
            TranslationValue::Plural(forms)
        } else if let Some(first) = variants.into_iter().next() {
            TranslationValue::Single(first)
        } else if numerus && text.trim().is_empty() {
            TranslationValue::Plural(Vec::new())
        } else {
            TranslationValue::Single(text)
        };

        Ok(Translation { status, value })
    }

    /// Collect the text content of the element named `end`.
    ///
    /// Handles entities, CDATA and `<byte>` escapes. When the element holds
    /// `<lengthvariant>` children, the first variant is returned.
    fn read_text(&mut self, end: &[u8]) -> Result<String, CatalogError> {
        let mut text = String::new();
        let mut variant: Option<String> = None;

        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|err| self.xml_error(err))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Empty(e) if e.name().as_ref() == b"byte" => text.push(self.byte_value(&e)?),
                Event::Start(e) if e.name().as_ref() == b"lengthvariant" => {
                    let value = self.read_text(b"lengthvariant")?;
                    variant.get_or_insert(value);
                }
                Event::Start(e) => self.skip(&e)?,
                Event::End(e) if e.name().as_ref() == end => break,
                Event::Eof => {
                    return Err(self.invalid(format!(
                        "unexpected end of file inside <{}>",
                        String::from_utf8_lossy(end)
                    )));
                }
                _ => {}
            }
        }

        Ok(variant.unwrap_or(text))
    }

    /// Decode `<byte value="x1b"/>` (hex with `x` prefix, or decimal).
    fn byte_value(&self, e: &BytesStart<'_>) -> Result<char, CatalogError> {
        let raw = self.attribute(e, b"value")?.unwrap_or_default();
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .ok_or_else(|| self.invalid(format!("invalid <byte> value \"{}\"", raw)))
    }

    fn attribute(&self, e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, CatalogError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            if attr.key.as_ref() == name {
                let value = attr.unescape_value().map_err(|err| self.xml_error(err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn skip(&mut self, e: &BytesStart<'_>) -> Result<(), CatalogError> {
        self.reader
            .read_to_end(e.name())
            .map_err(|err| self.xml_error(err))?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Event<'a>, CatalogError> {
        self.reader.read_event().map_err(|err| self.xml_error(err))
    }

    fn position(&self) -> usize {
        self.reader.buffer_position() as usize
    }

    /// Byte offset of the start tag `<name` that was just read.
    fn tag_offset(&self, name: &str) -> usize {
        let end = self.position().min(self.content.len());
        self.content[..end]
            .rfind(&format!("<{}", name))
            .unwrap_or(end)
    }

    /// 1-based line and column of a byte offset.
    fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line - 1];
        let col = self.content[line_start..offset].chars().count() + 1;
        (line, col)
    }

    fn current_line(&self) -> usize {
        let offset = self.position().min(self.content.len());
        offset_to_line(&self.line_index, offset)
    }

    fn xml_error(&self, err: impl Display) -> CatalogError {
        CatalogError::Xml {
            path: self.file_path.to_string(),
            line: self.current_line(),
            message: err.to_string(),
        }
    }

    fn invalid(&self, message: impl Into<String>) -> CatalogError {
        CatalogError::Invalid {
            path: self.file_path.to_string(),
            line: self.current_line(),
            message: message.into(),
        }
    }
}

fn empty_value(numerus: bool) -> TranslationValue {
    if numerus {
        TranslationValue::Plural(Vec::new())
    } else {
        TranslationValue::Single(String::new())
    }
}
