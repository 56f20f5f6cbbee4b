//! Filesystem secret loading.
//!
//! Walks a list of input paths, collapses sibling role files onto one
//! canonical identifier apiece, and assembles a [`Secret`] per identifier.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::core::config::SyncConfig;
use crate::core::paths::{resolve_under, strip_role_suffix};
use crate::core::resolve;
use crate::core::secret::Secret;
use crate::error::{Result, SatchelError};

/// Loads secrets from the filesystem per the resolved configuration.
pub struct Loader {
    config: SyncConfig,
}

impl Loader {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Load every distinct secret referenced by `paths`, in first-seen order.
    ///
    /// A path matching none of the configured suffixes fails the whole
    /// batch, and so does any individual load: callers get all records or
    /// none. Sibling files of one secret (value, description, pattern)
    /// collapse into a single record.
    pub fn load_all(&self, paths: &[String]) -> Result<Vec<Secret>> {
        let suffixes = [
            self.config.secret_suffix.as_str(),
            self.config.pattern_suffix.as_str(),
            self.config.description_suffix.as_str(),
        ];

        let mut seen = HashSet::new();
        let mut secrets = Vec::new();
        for path in paths {
            let id = strip_role_suffix(path, &suffixes)
                .ok_or_else(|| SatchelError::UnrecognizedPath(path.clone()))?;

            if seen.insert(id.to_string()) {
                secrets.push(self.load(id)?);
            } else {
                debug!(id, "already loaded, skipping");
            }
        }

        info!(secrets = secrets.len(), "loaded");
        Ok(secrets)
    }

    /// Assemble the secret for one canonical identifier.
    ///
    /// The value file is mandatory; description and pattern files may be
    /// absent. The parameter name is the identifier with the filesystem
    /// prefix removed and a leading separator guaranteed.
    fn load(&self, id: &str) -> Result<Secret> {
        if !id.starts_with(&self.config.fs_prefix) {
            return Err(SatchelError::PrefixMismatch {
                prefix: self.config.fs_prefix.clone(),
                path: id.to_string(),
            });
        }

        let root = self.config.root_dir.as_deref();

        let secret_path = resolve_under(root, &format!("{id}{}", self.config.secret_suffix));
        let value = resolve::decrypt(&self.config.decrypt_cmd, &secret_path)?;

        let description_path =
            resolve_under(root, &format!("{id}{}", self.config.description_suffix));
        let description = resolve::read_optional(&description_path)?;

        let pattern_path = resolve_under(root, &format!("{id}{}", self.config.pattern_suffix));
        let pattern = resolve::read_optional(&pattern_path)?;

        let mut name = id[self.config.fs_prefix.len()..].to_string();
        if !name.starts_with('/') {
            name.insert(0, '/');
        }

        debug!(id, name = %name, "assembled");

        Ok(Secret {
            name,
            value: resolve::sanitize(value, self.config.trim, &secret_path)?,
            description: resolve::sanitize(description, self.config.trim, &description_path)?,
            pattern: resolve::sanitize(pattern, self.config.trim, &pattern_path)?,
        })
    }
}
