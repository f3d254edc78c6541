//! Core catalog engine.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model and report locations
//! - `parsers`: `.ts` reader
//! - `writer`: `.ts` serializer
//! - `plural`: Numerus rules per locale
//! - `translator`: Runtime-style lookup with source fallback
//! - `stats`: Completion numbers
//! - `context`: Config loading, discovery and parallel parsing
//! - `file_scanner`: Catalog discovery

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod plural;
pub mod stats;
pub mod translator;
pub mod writer;

pub use context::{CheckContext, LoadedCatalog};
pub use data::*;
pub use parsers::{CatalogError, parse_catalog, read_catalog};
pub use plural::PluralRule;
pub use stats::{CatalogStats, catalog_stats};
pub use translator::{CatalogSet, Lookup, LookupOptions, Translator};
pub use writer::{save_catalog, write_catalog};
