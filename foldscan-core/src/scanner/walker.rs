use std::fs::Metadata;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace, warn};

use super::extension::{NO_EXTENSION_LABEL, file_extension, normalize_extension};
use super::stats::ScanStatistics;
use crate::error::{Result, ScanError};
use crate::paths::absolute_path;

/// Scanner configuration
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Normalized extension filter (None = every file)
    pub extension_filter: Option<String>,
    /// Skip entries whose metadata cannot be read instead of failing the scan
    pub skip_unreadable: bool,
}

impl ScanConfig {
    /// Restrict the scan to one extension, given with or without the dot
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension_filter = normalize_extension(extension);
        self
    }

    pub fn with_skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }
}

/// Single-level directory scanner
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the direct children of a directory.
    ///
    /// Subdirectories are never descended into. Files are visited in the
    /// order the filesystem returns them, which decides ties for the
    /// largest file and is not stable across platforms.
    pub fn scan(&self, path: impl AsRef<Path>) -> Result<ScanStatistics> {
        let path = path.as_ref();
        let root_path = resolve_directory(path)?;
        // The walker is handed the link target when the folder is a symlink
        let walk_root = root_path.canonicalize().unwrap_or_else(|_| root_path.clone());

        debug!(
            path = %root_path.display(),
            walk_root = %walk_root.display(),
            filter = ?self.config.extension_filter,
            "scanning directory"
        );

        let mut stats =
            ScanStatistics::new(root_path.clone(), self.config.extension_filter.clone());

        let walker = WalkDir::new(&walk_root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(false)
            .max_depth(1)
            .parallelism(Parallelism::Serial);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    self.skip_or_fail(&mut stats, e.path().map(Path::to_path_buf), e.into())?;
                    continue;
                }
            };

            // Skip root (depth 0)
            if entry.depth == 0 {
                continue;
            }

            let entry_path = entry.path();
            let file_type = entry.file_type();

            let metadata = if file_type.is_symlink() {
                // A link counts as a file only when its target is one
                match std::fs::metadata(&entry_path) {
                    Ok(m) => m,
                    Err(e) => {
                        trace!(
                            path = %entry_path.display(),
                            error = %e,
                            "skipping dangling symlink"
                        );
                        continue;
                    }
                }
            } else if file_type.is_file() {
                match entry.metadata() {
                    Ok(m) => m,
                    Err(e) => {
                        self.skip_or_fail(&mut stats, Some(entry_path), e.into())?;
                        continue;
                    }
                }
            } else {
                continue;
            };

            if !metadata.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let extension = file_extension(&name);

            if let Some(filter) = &self.config.extension_filter
                && extension.as_deref() != Some(filter.as_str())
            {
                continue;
            }

            let size = file_size(&metadata);
            let bucket = extension.as_deref().unwrap_or(NO_EXTENSION_LABEL);
            trace!(file = %name, size, bucket, "counted file");
            stats.record_file(&name, bucket, size);
        }

        debug!(
            files = stats.total_files,
            bytes = stats.total_size,
            buckets = stats.file_types.len(),
            skipped = stats.skipped_entries,
            "scan complete"
        );

        Ok(stats)
    }

    fn skip_or_fail(
        &self,
        stats: &mut ScanStatistics,
        path: Option<PathBuf>,
        error: ScanError,
    ) -> Result<()> {
        if !self.config.skip_unreadable {
            return Err(error);
        }

        let shown = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        warn!(path = %shown, error = %error, "skipping unreadable entry");
        stats.skipped_entries += 1;
        Ok(())
    }
}

/// Check the path is an existing directory and make it absolute
fn resolve_directory(path: &Path) -> Result<PathBuf> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(ScanError::NotADirectory(path.to_path_buf())),
    }

    Ok(absolute_path(path)?)
}

/// Logical file size in bytes
fn file_size(metadata: &Metadata) -> u64 {
    metadata.len()
}
