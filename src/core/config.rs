//! Loader configuration.
//!
//! Resolved once at startup from CLI flags merged with the environment,
//! then threaded read-only through the loader and sinks.

use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::error::{Result, SatchelError};

/// Resolved configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Suffix marking encrypted secret files (`.gpg` by default).
    pub secret_suffix: String,
    /// Suffix marking description files (`.description` by default).
    pub description_suffix: String,
    /// Suffix marking pattern files (`.pattern` by default).
    pub pattern_suffix: String,
    /// External executable invoked as `<decrypt_cmd> <path>`.
    pub decrypt_cmd: String,
    /// Prefix present on the filesystem but absent from parameter names.
    pub fs_prefix: String,
    /// Directory relative to which input paths are interpreted.
    pub root_dir: Option<PathBuf>,
    /// Strip trailing whitespace from loaded data.
    pub trim: bool,
}

impl SyncConfig {
    /// Build a validated config from raw flag/environment values.
    ///
    /// Suffixes are normalized to a single leading dot (empty values fall
    /// back to the defaults), the root directory is resolved to absolute
    /// form, and the decrypt command must resolve to an executable so a
    /// typo fails before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns `SatchelError::Config` when the decrypt command cannot be
    /// found or the root directory cannot be resolved.
    pub fn new(
        decrypt_cmd: impl Into<String>,
        secret_suffix: &str,
        description_suffix: &str,
        pattern_suffix: &str,
        fs_prefix: impl Into<String>,
        root_dir: Option<PathBuf>,
        trim: bool,
    ) -> Result<Self> {
        let decrypt_cmd = decrypt_cmd.into();
        which::which(&decrypt_cmd).map_err(|_| {
            SatchelError::Config(format!("decrypt command not found: {decrypt_cmd}"))
        })?;

        let root_dir = root_dir.map(absolute).transpose()?;

        let config = Self {
            secret_suffix: normalize_suffix(secret_suffix, constants::DEFAULT_SECRET_SUFFIX),
            description_suffix: normalize_suffix(
                description_suffix,
                constants::DEFAULT_DESCRIPTION_SUFFIX,
            ),
            pattern_suffix: normalize_suffix(pattern_suffix, constants::DEFAULT_PATTERN_SUFFIX),
            decrypt_cmd,
            fs_prefix: fs_prefix.into(),
            root_dir,
            trim,
        };

        debug!(?config, "resolved sync config");
        Ok(config)
    }
}

/// Force a single leading dot; an empty suffix falls back to the default.
fn normalize_suffix(raw: &str, default: &str) -> String {
    let bare = raw.trim_start_matches('.');
    if bare.is_empty() {
        default.to_string()
    } else {
        format!(".{bare}")
    }
}

/// Resolve a directory to absolute form against the current directory.
fn absolute(dir: PathBuf) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir()
        .map_err(|e| SatchelError::Config(format!("cannot resolve root directory: {e}")))?;
    Ok(cwd.join(dir))
}
