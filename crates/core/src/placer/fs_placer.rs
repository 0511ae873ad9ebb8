//! File system placer implementation.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};

use super::config::PlacerConfig;
use super::error::PlacerError;
use super::traits::Placer;
use super::types::PlacedFile;

/// Strips exactly one leading `/` from `relative_path` and checks that the
/// result stays inside the destination root.
///
/// With `reject_parent_segments` disabled only emptiness is checked.
pub fn normalize_relative_path(
    relative_path: &str,
    reject_parent_segments: bool,
) -> Result<String, PlacerError> {
    let normalized = relative_path.strip_prefix('/').unwrap_or(relative_path);

    if normalized.is_empty() {
        return Err(PlacerError::InvalidTarget {
            path: relative_path.to_string(),
        });
    }

    if reject_parent_segments {
        let escapes = Path::new(normalized).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(PlacerError::EscapesRoot {
                path: relative_path.to_string(),
            });
        }
    }

    Ok(normalized.to_string())
}

/// File system based placer implementation.
pub struct FsPlacer {
    root: PathBuf,
    config: PlacerConfig,
}

impl FsPlacer {
    /// Creates a new file system placer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: PlacerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Creates a placer with default configuration.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, PlacerConfig::default())
    }

    /// Copies a file, replacing any existing destination.
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, PlacerError> {
        let source_file = File::open(source).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlacerError::SourceNotFound {
                    path: source.to_path_buf(),
                }
            } else {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            }
        })?;

        let dest_file = File::create(destination).await.map_err(|e| {
            PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, dest_file);

        let mut total_bytes = 0u64;
        let mut buffer = vec![0u8; self.config.buffer_size];

        loop {
            let bytes_read = reader.read(&mut buffer).await.map_err(|e| {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            if bytes_read == 0 {
                break;
            }

            writer.write_all(&buffer[..bytes_read]).await.map_err(|e| {
                PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            total_bytes += bytes_read as u64;
        }

        writer.flush().await.map_err(|e| {
            PlacerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        Ok(total_bytes)
    }

    /// Creates parent directories for a path, returning how many were missing.
    async fn ensure_parent_dirs(&self, path: &Path) -> Result<usize, PlacerError> {
        let Some(parent) = path.parent() else {
            return Ok(0);
        };
        if parent.exists() {
            return Ok(0);
        }

        let mut missing = 0;
        let mut current = Some(parent);
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() || dir.exists() {
                break;
            }
            missing += 1;
            current = dir.parent();
        }

        fs::create_dir_all(parent)
            .await
            .map_err(|e| PlacerError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;

        Ok(missing)
    }
}

#[async_trait]
impl Placer for FsPlacer {
    fn name(&self) -> &str {
        "fs"
    }

    fn destination_root(&self) -> &Path {
        &self.root
    }

    async fn place(&self, source: &Path, relative_path: &str) -> Result<PlacedFile, PlacerError> {
        let relative_path =
            normalize_relative_path(relative_path, self.config.reject_parent_segments)?;
        let destination = self.root.join(&relative_path);

        let directories_created = self.ensure_parent_dirs(&destination).await?;
        if directories_created > 0 {
            tracing::debug!(
                "Created {} director{} for {}",
                directories_created,
                if directories_created == 1 { "y" } else { "ies" },
                relative_path
            );
        }

        let size_bytes = self.copy_file(source, &destination).await?;

        Ok(PlacedFile {
            relative_path,
            destination,
            size_bytes,
            directories_created,
        })
    }
}
