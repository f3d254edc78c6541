//! Runtime-style lookup over a loaded catalog.
//!
//! Mirrors what the Qt runtime does with a compiled catalog: exact
//! `(context, source, comment)` match first, then the same key without the
//! comment, and the source string itself when nothing matches.

use std::collections::HashMap;

use crate::core::{
    data::{Catalog, MessageKey, SourceRef, TranslationStatus, TranslationValue},
    plural::{PluralRule, split_locale},
};

/// Which messages take part in lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Use non-empty unfinished translations (lrelease does by default).
    pub include_unfinished: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Translated(String),
    /// No usable translation; carries the source text.
    Fallback(String),
}

impl Lookup {
    pub fn text(&self) -> &str {
        match self {
            Lookup::Translated(text) | Lookup::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Lookup::Translated(text) | Lookup::Fallback(text) => text,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, Lookup::Translated(_))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: TranslationValue,
    status: TranslationStatus,
    references: Vec<SourceRef>,
}

/// Lookup table built from one catalog.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    rule: Option<PluralRule>,
    entries: HashMap<MessageKey, Entry>,
}

impl Translator {
    pub fn from_catalog(catalog: &Catalog, options: LookupOptions) -> Self {
        let mut entries = HashMap::new();

        for (context, message) in catalog.live_messages() {
            let translation = &message.translation;
            if translation.value.is_empty() {
                continue;
            }
            if translation.status == TranslationStatus::Unfinished && !options.include_unfinished
            {
                continue;
            }

            // First occurrence wins, like lrelease.
            entries
                .entry(message.key(&context.name))
                .or_insert_with(|| Entry {
                    value: translation.value.clone(),
                    status: translation.status,
                    references: message.locations.clone(),
                });
        }

        let locale = catalog.locale();
        Self {
            rule: PluralRule::for_locale(&locale),
            locale,
            entries,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a source string, falling back to the source itself.
    pub fn translate(&self, context: &str, source: &str, comment: &str) -> Lookup {
        match self.find(context, source, comment) {
            Some(entry) => match &entry.value {
                TranslationValue::Single(text) => Lookup::Translated(text.clone()),
                TranslationValue::Plural(forms) => {
                    // Non-numerus call on a numerus message: Qt uses the
                    // first form.
                    Lookup::Translated(forms.first().cloned().unwrap_or_default())
                }
            },
            None => Lookup::Fallback(source.to_string()),
        }
    }

    /// Translate a numerus message for count `n`, substituting `%n`.
    pub fn translate_plural(&self, context: &str, source: &str, comment: &str, n: i64) -> Lookup {
        let lookup = match self.find(context, source, comment) {
            Some(entry) => match &entry.value {
                TranslationValue::Single(text) => Lookup::Translated(text.clone()),
                TranslationValue::Plural(forms) => {
                    let index = self.rule.map_or(0, |rule| rule.form_index(n));
                    let form = forms
                        .get(index)
                        .or_else(|| forms.last())
                        .cloned()
                        .unwrap_or_default();
                    Lookup::Translated(form)
                }
            },
            None => Lookup::Fallback(source.to_string()),
        };

        match lookup {
            Lookup::Translated(text) => Lookup::Translated(substitute_count(&text, n)),
            Lookup::Fallback(text) => Lookup::Fallback(substitute_count(&text, n)),
        }
    }

    /// Source locations recorded for a message.
    pub fn references(&self, context: &str, source: &str, comment: &str) -> &[SourceRef] {
        self.find(context, source, comment)
            .map(|e| e.references.as_slice())
            .unwrap_or_default()
    }

    /// Status of the translation used for a message, if any.
    pub fn status(&self, context: &str, source: &str, comment: &str) -> Option<TranslationStatus> {
        self.find(context, source, comment).map(|e| e.status)
    }

    fn find(&self, context: &str, source: &str, comment: &str) -> Option<&Entry> {
        let exact = MessageKey::new(context, source, comment);
        self.entries.get(&exact).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                self.entries.get(&MessageKey::new(context, source, ""))
            }
        })
    }
}

/// Replace `%n` and `%Ln` with the count.
pub fn substitute_count(text: &str, n: i64) -> String {
    let count = n.to_string();
    text.replace("%Ln", &count).replace("%n", &count)
}

/// All catalogs of a project, for picking a translator by locale.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: Vec<Catalog>,
    options: LookupOptions,
}

impl CatalogSet {
    pub fn new(catalogs: Vec<Catalog>, options: LookupOptions) -> Self {
        Self { catalogs, options }
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// The catalog that serves `locale`, see [`select_catalog`].
    pub fn catalog_for(&self, locale: &str) -> Option<&Catalog> {
        select_catalog(&self.catalogs, locale)
    }

    pub fn translator_for(&self, locale: &str) -> Option<Translator> {
        self.catalog_for(locale)
            .map(|catalog| Translator::from_catalog(catalog, self.options))
    }
}

/// Pick the catalog for a requested locale.
///
/// Exact locale match first (`-` and `_` are interchangeable, case does not
/// matter), then the first catalog with the same language.
pub fn select_catalog<'a>(catalogs: &'a [Catalog], locale: &str) -> Option<&'a Catalog> {
    let wanted = split_locale(locale);

    catalogs
        .iter()
        .find(|c| split_locale(&c.locale()) == wanted)
        .or_else(|| {
            catalogs
                .iter()
                .find(|c| split_locale(&c.locale()).0 == wanted.0)
        })
}
