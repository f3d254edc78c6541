use serde::Serialize;

use crate::core::data::{Catalog, TranslationStatus};

/// Completion numbers for one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub locale: String,
    pub file_path: String,
    /// Live (not vanished/obsolete) messages.
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete messages.
    pub vanished: usize,
    /// `finished * 100 / total`, 100 for a catalog with no live messages.
    pub percent: usize,
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let mut finished = 0;
    let mut unfinished = 0;
    let mut vanished = 0;

    for (_, message) in catalog.messages() {
        match message.translation.status {
            TranslationStatus::Finished => finished += 1,
            TranslationStatus::Unfinished => unfinished += 1,
            TranslationStatus::Vanished | TranslationStatus::Obsolete => vanished += 1,
        }
    }

    let total = finished + unfinished;
    let percent = if total == 0 {
        100
    } else {
        finished * 100 / total
    };

    CatalogStats {
        locale: catalog.locale(),
        file_path: catalog.file_path.clone(),
        total,
        finished,
        unfinished,
        vanished,
        percent,
    }
}
