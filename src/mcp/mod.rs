//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog inspection, lookup and editing to AI assistants over
//! stdio.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading, pagination and issue conversion
//! - `server`: Tool definitions
//! - `types`: Tool parameters and results

mod helpers;
mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
