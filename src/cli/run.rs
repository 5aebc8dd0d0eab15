/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., invalid config, missing `res` directory)
use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, analyze::analyze, clean::clean, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
