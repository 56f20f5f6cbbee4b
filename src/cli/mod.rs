//! Command-line interface.

pub mod completions;
pub mod output;
pub mod sync;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;
use crate::error::Result;

/// Satchel - sync encrypted secrets and their metadata to AWS Parameter Store.
#[derive(Parser)]
#[command(
    name = "satchel",
    about = "Sync a directory of encrypted secrets and metadata with AWS Parameter Store",
    version,
    after_help = "By default satchel only prints secret metadata to stdout; \
                  pass --commit to upload.\n\
                  When no FILE arguments are given, paths are read from stdin, \
                  one per line."
)]
pub struct Cli {
    /// Secret files to sync (reads paths from stdin when omitted)
    #[arg(value_name = "FILE")]
    pub paths: Vec<String>,

    /// Sync changes to the parameter store rather than just printing metadata
    #[arg(long)]
    pub commit: bool,

    /// A prefix present in the FS but not in the parameter store
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Directory relative to which paths are interpreted
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Keep trailing whitespace in loaded data
    #[arg(long)]
    pub no_trim: bool,

    /// Executable used to decrypt secret files
    #[arg(long, env = constants::DECRYPT_ENV, default_value = constants::DEFAULT_DECRYPT)]
    pub decrypt: String,

    /// Suffix marking encrypted secret files
    #[arg(long, env = constants::SECRET_SUFFIX_ENV, default_value = constants::DEFAULT_SECRET_SUFFIX)]
    pub secret_suffix: String,

    /// Suffix marking description files
    #[arg(long, env = constants::DESCRIPTION_SUFFIX_ENV, default_value = constants::DEFAULT_DESCRIPTION_SUFFIX)]
    pub description_suffix: String,

    /// Suffix marking pattern files
    #[arg(long, env = constants::PATTERN_SUFFIX_ENV, default_value = constants::DEFAULT_PATTERN_SUFFIX)]
    pub pattern_suffix: String,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completions::execute(shell);
    }

    sync::execute(cli)
}
