//! Infrastructure implementation of the `ConfigSource` port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigSource;
use crate::domain::DiscoveryError;

/// Reads remctl configuration from a directory on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsConfigSource;

impl ConfigSource for FsConfigSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|source| match source.kind() {
            ErrorKind::NotFound => DiscoveryError::ConfigDirMissing {
                path: dir.to_path_buf(),
            },
            _ => DiscoveryError::ConfigDirUnreadable {
                path: dir.to_path_buf(),
                source,
            },
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), "skipping unreadable directory entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            } else {
                tracing::debug!(path = %path.display(), "not a regular file, skipping");
            }
        }

        // Listing order is filesystem-dependent; sort for stable output.
        files.sort();
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
