//! Actions for processing catalog issues.
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (in-memory catalog edit)
//!     ↓
//! execute (catalog rewritten with the writer)
//! ```
//!
//! ## Actions
//!
//! - [`RemoveMessage`]: Remove vanished/obsolete messages (clean)

mod operation;
mod remove_message;
mod traits;

pub use operation::Operation;
pub use remove_message::RemoveMessage;
pub use traits::{Action, ActionStats};
