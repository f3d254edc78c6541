use std::{fmt, path::Path};

/// A parsed Qt Linguist catalog (one `.ts` file, one locale).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Path of the `.ts` file this catalog was read from.
    pub file_path: String,
    /// Value of the `version` attribute on `<TS>` (e.g. "2.1").
    pub version: Option<String>,
    /// Value of the `language` attribute on `<TS>` (e.g. "ko_KR").
    pub language: Option<String>,
    /// Value of the `sourcelanguage` attribute on `<TS>`.
    pub source_language: Option<String>,
    /// Contexts in document order.
    pub contexts: Vec<Context>,
    /// How `<location>` elements were written in the file.
    pub location_style: LocationStyle,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            version: None,
            language: None,
            source_language: None,
            contexts: Vec::new(),
            location_style: LocationStyle::None,
        }
    }

    /// The catalog's locale: the `language` attribute, or the locale encoded
    /// in the file name when the attribute is missing.
    pub fn locale(&self) -> String {
        match &self.language {
            Some(language) if !language.is_empty() => language.clone(),
            _ => locale_from_file_name(&self.file_path),
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// All messages paired with the name of their context.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|context| context.messages.iter().map(move |m| (context, m)))
    }

    /// Messages that are neither vanished nor obsolete.
    pub fn live_messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.messages().filter(|(_, m)| m.translation.status.is_live())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Find a message by its identity, including vanished ones.
    pub fn find_message_mut(&mut self, key: &MessageKey) -> Option<&mut Message> {
        self.contexts
            .iter_mut()
            .filter(|c| c.name == key.context)
            .flat_map(|c| c.messages.iter_mut())
            .find(|m| m.source == key.source && m.comment_or_empty() == key.comment)
    }
}

/// Derive a locale from a catalog file name.
///
/// Qt projects name catalogs `<prefix>_<language>[_<TERRITORY>].ts`, so
/// `main_pt_BR.ts` yields `pt_BR` and `main_ko.ts` yields `ko`. A bare
/// `ko.ts` yields `ko`.
pub fn locale_from_file_name(file_path: &str) -> String {
    let stem = Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let segments: Vec<&str> = stem.split('_').collect();
    if segments.len() < 2 {
        return stem.to_string();
    }

    // The territory part is upper case; the language part is the first
    // segment after the prefix.
    let has_territory = segments.len() > 2
        && segments[segments.len() - 1]
            .chars()
            .all(|c| c.is_ascii_uppercase());
    let start = if has_territory {
        segments.len() - 2
    } else {
        segments.len() - 1
    };
    segments[start..].join("_")
}

/// A named group of messages, usually one UI class or dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A single translatable string and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Optional `id` attribute (id-based translations).
    pub id: Option<String>,
    pub source: String,
    /// Disambiguation comment (`<comment>`).
    pub comment: Option<String>,
    pub old_source: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    /// True for `numerus="yes"` messages.
    pub numerus: bool,
    /// Resolved source locations.
    pub locations: Vec<SourceRef>,
    pub translation: Translation,
    /// 1-based line of the `<message>` tag in the `.ts` file.
    pub line: usize,
    /// 1-based column of the `<message>` tag.
    pub col: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            id: None,
            source: source.into(),
            comment: None,
            old_source: None,
            extra_comment: None,
            translator_comment: None,
            numerus: false,
            locations: Vec::new(),
            translation,
            line: 0,
            col: 0,
        }
    }

    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, &self.source, self.comment_or_empty())
    }
}

/// Identity of a message inside a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    /// Disambiguation comment, empty when absent.
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::{}", self.context, self.source)
        } else {
            write!(f, "{}::{} ({})", self.context, self.source, self.comment)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub status: TranslationStatus,
    pub value: TranslationValue,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            value: TranslationValue::Single(text.into()),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            value: TranslationValue::Single(text.into()),
        }
    }

    pub fn plural(status: TranslationStatus, forms: Vec<String>) -> Self {
        Self {
            status,
            value: TranslationValue::Plural(forms),
        }
    }
}

/// The `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranslationStatus {
    /// No `type` attribute.
    Finished,
    Unfinished,
    /// The source string no longer exists in the application.
    Vanished,
    /// Pre-Qt-5 spelling of vanished.
    Obsolete,
}

impl TranslationStatus {
    pub fn is_live(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }

    /// Value of the `type` attribute, `None` for finished translations.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_attr().unwrap_or("finished"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Single(String),
    /// One entry per `<numerusform>`.
    Plural(Vec<String>),
}

impl TranslationValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Plural(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// Every text of this translation: the single value or each form.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Single(text) => vec![text.as_str()],
            Self::Plural(forms) => forms.iter().map(String::as_str).collect(),
        }
    }
}

/// A source location after relative line deltas have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceRef {
    pub file: String,
    pub line: Option<u32>,
}

impl SourceRef {
    pub fn new(file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => f.write_str(&self.file),
        }
    }
}

/// How `<location>` elements are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationStyle {
    /// No locations in the file.
    #[default]
    None,
    /// `filename` on every location, absolute line numbers.
    Absolute,
    /// `filename` only when it changes, signed line deltas.
    Relative,
}
