//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;
use crate::commands::CleanCommand;

/// Command name as typed on the command line (e.g. "clean-full").
pub fn command_name(command: &Commands) -> &'static str {
    match clean_command(command) {
        Some(clean) => clean.name(),
        None => "merge",
    }
}

/// Clean command a subcommand maps to, `None` for merge.
fn clean_command(command: &Commands) -> Option<CleanCommand> {
    match command {
        Commands::CleanContent { .. } => Some(CleanCommand::Content),
        Commands::CleanAssessments { .. } => Some(CleanCommand::Assessments),
        Commands::CleanImages { .. } => Some(CleanCommand::Images),
        Commands::CleanCode { .. } => Some(CleanCommand::Code),
        Commands::CleanFull { .. } => Some(CleanCommand::Full),
        Commands::Merge { .. } => None,
    }
}
