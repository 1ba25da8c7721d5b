//! CLI route: single route table and run context. Dispatches to the command
//! service and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_clean_json, format_clean_text, format_merge_json, format_merge_text,
};
use crate::commands::{run_clean, run_merge, CleanCommand};
use crate::config::{CleanerConfig, ConfigLoader};
use crate::error::CleanerError;
use crate::merge::MergeOptions;
use crate::project::Project;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: resolved configuration and global flags.
pub struct RunContext {
    config: CleanerConfig,
    base_dir: PathBuf,
    dry_run: bool,
    format: OutputFormat,
}

impl RunContext {
    /// Create a run context from the base directory and optional config path.
    /// Uses ConfigLoader only.
    pub fn new(base_dir: PathBuf, config_path: Option<&Path>) -> Result<Self, CleanerError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&base_dir)?,
        };
        Ok(Self::from_config(config, base_dir))
    }

    /// Create a run context from an already resolved configuration.
    pub fn from_config(config: CleanerConfig, base_dir: PathBuf) -> Self {
        Self {
            config,
            base_dir,
            dry_run: false,
            format: OutputFormat::Text,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, CleanerError> {
        let started = Instant::now();
        let result = match command {
            Commands::CleanContent { path } => {
                self.handle_clean(CleanCommand::Content, path.as_deref())
            }
            Commands::CleanAssessments { path } => {
                self.handle_clean(CleanCommand::Assessments, path.as_deref())
            }
            Commands::CleanImages { path } => self.handle_clean(CleanCommand::Images, path.as_deref()),
            Commands::CleanCode { path } => self.handle_clean(CleanCommand::Code, path.as_deref()),
            Commands::CleanFull { path } => self.handle_clean(CleanCommand::Full, path.as_deref()),
            Commands::Merge { dest, src } => self.handle_merge(dest, src),
        };
        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_clean(&self, command: CleanCommand, path: Option<&Path>) -> Result<String, CleanerError> {
        let project = self.project(path);
        info!(
            command = command.name(),
            guides = %project.guides().display(),
            "Cleaning project"
        );
        let report = run_clean(&project, command, self.dry_run)?;
        match self.format {
            OutputFormat::Json => format_clean_json(&report),
            OutputFormat::Text => Ok(format_clean_text(&report, project.root())),
        }
    }

    fn handle_merge(&self, dest: &Path, src: &Path) -> Result<String, CleanerError> {
        let dest = self.project(Some(dest));
        let src = self.project(Some(src));
        let options = MergeOptions {
            exclude: self.config.merge.exclude.clone(),
        };
        let report = run_merge(&dest, &src, &options, self.dry_run)?;
        match self.format {
            OutputFormat::Json => format_merge_json(&report),
            OutputFormat::Text => Ok(format_merge_text(&report, dest.root())),
        }
    }

    /// Locate the project at `path`, defaulting to the configured guides
    /// directory below the base directory.
    fn project(&self, path: Option<&Path>) -> Project {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.base_dir.join(&self.config.layout.guides_dir),
        };
        Project::locate(&path, &self.config.layout)
    }
}
