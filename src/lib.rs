//! tscat - Qt Linguist translation catalog toolkit
//!
//! tscat reads, checks, queries and rewrites the `.ts` catalogs produced by
//! `lupdate`. It answers lookups the way the Qt runtime would and reports
//! catalog problems (unfinished or vanished messages, broken placeholders,
//! wrong plural form counts, drift between locales).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: `.tscatrc.json` loading
//! - `core`: Catalog model, reader/writer, plural rules, lookup and discovery
//! - `issues`: Issue type definitions and reporting
//! - `logging`: tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Catalog checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod mcp;
pub mod rules;
