//! Satchel - sync a directory of encrypted secrets to AWS Parameter Store.
//!
//! Satchel takes a list of secret files, decrypts each through an external
//! command (gpg, age, or plain `cat`), picks up optional sibling metadata,
//! and either uploads the result to SSM Parameter Store or prints the
//! metadata as JSON for review.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── sync          # The one command: load, then sync
//! │   ├── completions   # Shell completions
//! │   └── output        # Styled terminal reporting
//! └── core/             # Core library components
//!     ├── config        # Resolved flag/env configuration
//!     ├── paths         # Suffix stripping, root resolution
//!     ├── resolve       # Decrypt subprocess + metadata reads
//!     ├── loader        # Dedup + per-secret assembly
//!     ├── secret        # The synchronized record
//!     └── sink/         # Destinations
//!         ├── mod       # Sink trait + driver
//!         ├── ssm       # Parameter Store uploader
//!         └── json      # Dry-run metadata printer
//! ```
//!
//! # Filesystem convention
//!
//! For a logical secret `db`, satchel expects `db.gpg` (required),
//! `db.description` (optional), and `db.pattern` (optional). Any of the
//! three file names refers to the same secret on the command line; satchel
//! loads each secret once no matter how many of its files are named.

pub mod cli;
pub mod core;
pub mod error;
