//! The sync command.
//!
//! Collects input paths, loads every referenced secret, and drives them
//! through the chosen sink: the Parameter Store uploader under `--commit`,
//! the JSON metadata printer otherwise.

use std::io::BufRead;

use tracing::info;

use crate::cli::{output, Cli};
use crate::core::config::SyncConfig;
use crate::core::loader::Loader;
use crate::core::sink::{self, MetadataPrinter, ParameterStore};
use crate::error::Result;

/// Load the requested secrets and sync them.
pub fn execute(cli: Cli) -> Result<()> {
    let config = SyncConfig::new(
        cli.decrypt,
        &cli.secret_suffix,
        &cli.description_suffix,
        &cli.pattern_suffix,
        cli.prefix,
        cli.root,
        !cli.no_trim,
    )?;

    let paths = if cli.paths.is_empty() {
        read_stdin_paths()?
    } else {
        cli.paths
    };
    info!(paths = paths.len(), "collected input paths");

    let secrets = Loader::new(config).load_all(&paths)?;
    if secrets.is_empty() {
        output::dimmed("nothing to sync");
        return Ok(());
    }

    if cli.commit {
        let mut sink = ParameterStore::new()?;
        sink::sync_all(&secrets, &mut sink)?;
        output::success(&format!("synced {} secrets", secrets.len()));
    } else {
        let mut sink = MetadataPrinter::stdout();
        sink::sync_all(&secrets, &mut sink)?;
    }

    Ok(())
}

/// Read newline-separated paths from stdin, skipping blank lines.
fn read_stdin_paths() -> Result<Vec<String>> {
    if atty::is(atty::Stream::Stdin) {
        output::hint("reading secret paths from stdin, one per line");
    }

    let stdin = std::io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            paths.push(line);
        }
    }

    Ok(paths)
}
