//! Catalog file parsers.
//!
//! - `ts`: Qt Linguist `.ts` reader (streams XML with quick-xml)
//! - `locations`: Relative `<location>` resolution shared with the writer

pub mod locations;
pub mod ts;

pub use ts::{CatalogError, parse_catalog, read_catalog};
