//! Config loading entry points.

use super::merge_policy::builder_with_defaults;
use super::sources::{self, global_file, project_file};
use super::CleanerConfig;
use crate::error::CleanerError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`CleanerConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, `<base_dir>/guides-cleaner.toml` and
    /// environment overrides, in that order.
    pub fn load(base_dir: &Path) -> Result<CleanerConfig, CleanerError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, base_dir)?;
        let builder = sources::add_environment(builder);

        let config: CleanerConfig = builder.build()?.try_deserialize()?;
        debug!(base_dir = %base_dir.display(), "Configuration loaded");
        config.into_validated()
    }

    /// Load defaults plus one explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<CleanerConfig, CleanerError> {
        if !path.is_file() {
            return Err(CleanerError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = sources::add_environment(builder);

        let config: CleanerConfig = builder.build()?.try_deserialize()?;
        config.into_validated()
    }
}
