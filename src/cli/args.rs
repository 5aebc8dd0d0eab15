//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Report duplicate, untranslated and unused strings
//! - `clean`: Remove unused strings from every locale file
//! - `init`: Initialize stringsweep configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory, where the config file is searched (default: current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Android `res` directory (overrides config file)
    #[arg(long)]
    pub res_root: Option<PathBuf>,

    /// Source directory to scan for R.string references (overrides config file)
    /// Can be specified multiple times: --source-dir app/src/main/java --source-dir app/src/main/kotlin
    #[arg(long = "source-dir")]
    pub source_dirs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory for the report files (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub args: AnalyzeArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete strings (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report duplicate, untranslated and unused strings (writes duplicates.txt,
    /// missing_translations.txt and unused_strings.txt)
    Analyze(AnalyzeCommand),
    /// Remove unused strings from every strings.xml
    Clean(CleanCommand),
    /// Initialize a new .stringsweeprc.json configuration file
    Init,
}
