//! Configuration System
//!
//! Layered configuration for directory names, merge behaviour and logging.
//! Sources, lowest to highest precedence: built-in defaults, the global
//! config file, the project config file, then `GUIDES_CLEANER__*`
//! environment variables.

use crate::error::CleanerError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::project_file::PROJECT_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Directory names inside a project
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Merge settings
    #[serde(default)]
    pub merge: MergeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Directory names used to locate manifests and assets.
///
/// `img_dir` and `content_dir` are relative to the guides directory,
/// `code_dir` is relative to the assignment root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_guides_dir")]
    pub guides_dir: String,

    #[serde(default = "default_img_dir")]
    pub img_dir: String,

    #[serde(default = "default_code_dir")]
    pub code_dir: String,

    #[serde(default = "default_content_dir")]
    pub content_dir: String,
}

fn default_guides_dir() -> String {
    ".guides".to_string()
}

fn default_img_dir() -> String {
    "img".to_string()
}

fn default_code_dir() -> String {
    "code".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            guides_dir: default_guides_dir(),
            img_dir: default_img_dir(),
            code_dir: default_code_dir(),
            content_dir: default_content_dir(),
        }
    }
}

/// Merge settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Path components never copied from the merge source
    #[serde(default = "default_merge_exclude")]
    pub exclude: Vec<String>,
}

fn default_merge_exclude() -> Vec<String> {
    vec![".git".to_string()]
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            exclude: default_merge_exclude(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Layout(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Layout(field, msg) => write!(f, "layout.{}: {}", field, msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LayoutConfig {
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        let fields = [
            ("guides_dir", &self.guides_dir),
            ("img_dir", &self.img_dir),
            ("code_dir", &self.code_dir),
            ("content_dir", &self.content_dir),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError::Layout(
                    field.to_string(),
                    "must not be empty".to_string(),
                ));
            } else if Path::new(value).is_absolute() {
                errors.push(ValidationError::Layout(
                    field.to_string(),
                    format!("must be relative, got {}", value),
                ));
            }
        }
    }
}

impl CleanerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.layout.validate(&mut errors);
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one error.
    pub fn into_validated(self) -> Result<Self, CleanerError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CleanerError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
