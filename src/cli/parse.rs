//! CLI parse: clap types for guides-cleaner. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// guides-cleaner - remove unreferenced guide content, assessments and assets
#[derive(Parser, Debug)]
#[command(name = "guides-cleaner")]
#[command(version)]
#[command(about = "Clean and merge guide projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report what would change without touching the filesystem
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete content pages no manifest lists
    CleanContent {
        /// Guides directory or assignment root (default: the configured guides dir)
        path: Option<PathBuf>,
    },
    /// Remove assessments no document tags
    CleanAssessments {
        /// Guides directory or assignment root (default: the configured guides dir)
        path: Option<PathBuf>,
    },
    /// Delete images no document references
    CleanImages {
        /// Guides directory or assignment root (default: the configured guides dir)
        path: Option<PathBuf>,
    },
    /// Delete code files no document references
    CleanCode {
        /// Guides directory or assignment root (default: the configured guides dir)
        path: Option<PathBuf>,
    },
    /// Run content, assessment, image and code cleaning in one pass
    CleanFull {
        /// Guides directory or assignment root (default: the configured guides dir)
        path: Option<PathBuf>,
    },
    /// Merge the source project into the destination project
    Merge {
        /// Destination project (guides directory or assignment root)
        dest: PathBuf,
        /// Source project (guides directory or assignment root)
        src: PathBuf,
    },
}
