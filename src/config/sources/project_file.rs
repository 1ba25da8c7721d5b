//! Project config file source: guides-cleaner.toml in the base directory.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// File name looked up in the directory the command runs from.
pub const PROJECT_CONFIG_FILE: &str = "guides-cleaner.toml";

/// Add the project config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = base_dir.join(PROJECT_CONFIG_FILE);
    if path.is_file() {
        return Ok(builder.add_source(File::from(path).required(false)));
    }
    Ok(builder)
}
