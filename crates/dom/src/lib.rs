//! In-memory DOM tree
//!
//! Typed elements in a rooted, ordered tree with attribute maps,
//! type / id lookups and attach / detach operations.
//!
//! ## Core Design
//!
//! ```text
//! ElementSpec (owned, serde) → DomArena (Vec<HtmlElement>) → DomTree ops → outline text
//!                                     ↓
//!                              NodeId (u32) = identity
//! ```
//!
//! Nodes are never freed while the tree lives. Detaching only unlinks a
//! subtree, so its `NodeId`s stay valid and can be inserted again.

pub mod arena;
pub mod document;
pub mod error;
pub mod serializer;
pub mod types;

pub use arena::DomArena;
pub use document::DomTree;
pub use error::{DomError, Result};
pub use serializer::{DomSerializer, SerializerConfig};
pub use types::*;
