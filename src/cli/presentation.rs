//! CLI presentation: text and json formatters per command family.

mod clean;
mod merge;
mod shared;

pub use clean::{format_clean_json, format_clean_text};
pub use merge::{format_merge_json, format_merge_text};
