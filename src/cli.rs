//! CLI domain: parse, route, help, output, and presentation only.
//! No cleaning logic; the route table dispatches to the command service.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_clean_json, format_clean_text, format_merge_json, format_merge_text,
};
pub use route::RunContext;
