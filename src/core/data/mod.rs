//! Core data types shared by the reader, writer, rules and lookup.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, Translation)
//! - `message`: Report locations inside `.ts` files (MessageLocation, MessageSite)

pub mod catalog;
pub mod message;

pub use catalog::{
    Catalog, Context, LocationStyle, Message, MessageKey, SourceRef, Translation,
    TranslationStatus, TranslationValue, locale_from_file_name,
};
pub use message::{MessageLocation, MessageSite};
