//! Path normalization.
//!
//! Maps filesystem paths bearing role suffixes onto canonical secret
//! identifiers, and resolves identifiers against an optional root.

use std::path::{Path, PathBuf};

/// Strip the first matching suffix from `path`, yielding the canonical
/// identifier shared by a secret's value, description, and pattern files.
///
/// Suffixes are tried in order and must be non-empty. Returns `None` when
/// the path bears no known role suffix.
///
/// `/foo/bar/baz.gpg` with `[".gpg", ".pattern"]` -> `/foo/bar/baz`
pub fn strip_role_suffix<'a>(path: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| path.strip_suffix(suffix))
}

/// Resolve `path` under an optional root directory.
///
/// With no root the path is used as-is, matching the CLI's default of
/// interpreting inputs relative to the current directory.
pub fn resolve_under(root: Option<&Path>, path: &str) -> PathBuf {
    match root {
        Some(root) => root.join(path),
        None => PathBuf::from(path),
    }
}
