//! Satchel - sync a directory of encrypted secrets to AWS Parameter Store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use satchel::cli::output;
use satchel::cli::{run, Cli};
use satchel::error::SatchelError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SATCHEL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("satchel=debug")
        } else {
            EnvFilter::new("satchel=warn")
        }
    });

    // Logs go to stderr: stdout is reserved for record output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        let suggestion = match &e {
            SatchelError::UnrecognizedPath(_) => {
                Some("check --secret-suffix, --description-suffix, and --pattern-suffix")
            }
            SatchelError::Config(_) => Some("see: satchel --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
