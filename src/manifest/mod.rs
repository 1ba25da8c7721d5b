//! Manifest documents: typed views for pruning, raw JSON arrays for merging.

pub mod identity;
pub mod json;
pub mod types;

pub use identity::{union_by_identity, IdentityKey};
pub use types::{ContentIndex, Metadata, Section};
