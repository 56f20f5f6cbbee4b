//! Reading secret material from disk.
//!
//! Two read paths: the secret value goes through the external decrypt
//! command, sibling metadata files are read directly and may be absent.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::{Result, SatchelError};

/// Decrypt `path` by running `<decrypt_cmd> <path>` and capturing stdout.
///
/// The file is opened first so a missing or unreadable secret surfaces as
/// a read error naming the file, rather than whatever the decrypt tool
/// prints. The subprocess inherits stderr for operator visibility; a
/// non-zero exit discards any captured output.
pub fn decrypt(decrypt_cmd: &str, path: &Path) -> Result<Vec<u8>> {
    File::open(path).map_err(|source| SatchelError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(cmd = decrypt_cmd, path = %path.display(), "decrypting");

    let output = Command::new(decrypt_cmd)
        .arg(path)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| SatchelError::Decrypt {
            path: path.to_path_buf(),
            message: format!("failed to run {decrypt_cmd}: {e}"),
        })?;

    if !output.status.success() {
        return Err(SatchelError::Decrypt {
            path: path.to_path_buf(),
            message: format!("{decrypt_cmd} exited with {}", output.status),
        });
    }

    trace!(bytes = output.stdout.len(), "decrypted");
    Ok(output.stdout)
}

/// Read an optional metadata file, treating absence as empty.
///
/// Any I/O error other than the file not existing still propagates.
pub fn read_optional(path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(SatchelError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode loaded bytes, stripping trailing whitespace when `trim` is set.
///
/// Leading whitespace is always preserved.
pub fn sanitize(bytes: Vec<u8>, trim: bool, path: &Path) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|source| SatchelError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    if trim {
        Ok(text.trim_end().to_string())
    } else {
        Ok(text)
    }
}
