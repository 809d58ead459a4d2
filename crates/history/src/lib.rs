//! Browser History
//!
//! Visited links, most recent first, with lookup, end deletes and
//! case-insensitive bulk removal by URL fragment.
//!
//! ```text
//! open(link) → [latest, ..., oldest]
//!               ↑ delete_last   ↑ delete_first
//! ```

pub mod error;
pub mod history;
pub mod link;

pub use error::{HistoryError, Result};
pub use history::{BrowserHistory, EMPTY_HISTORY_MESSAGE};
pub use link::Link;
