//! Filesystem traversal
//!
//! Deterministic walks over guide and asset directories plus the path keys
//! the reachability engine and pruners compare against.

pub mod path;
pub mod walker;

pub use walker::{Entry, Walker, WalkerConfig};
