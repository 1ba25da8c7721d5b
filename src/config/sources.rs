//! Configuration file and environment sources.

pub mod global_file;
pub mod project_file;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Environment overrides: `GUIDES_CLEANER__LAYOUT__IMG_DIR=images`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("GUIDES_CLEANER")
            .prefix_separator("__")
            .separator("__"),
    )
}
