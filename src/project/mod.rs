//! Guide project model: where manifests and asset directories live, and
//! which manifest schema a project uses.

mod layout;
mod version;

pub use layout::Project;
pub use version::{detect_version, SchemaVersion};
