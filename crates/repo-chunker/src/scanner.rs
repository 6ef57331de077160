use crate::classify::classify;
use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::patterns::IgnoreRules;
use crate::types::FileRecord;
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A file omitted from the scan because it could not be read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path as encountered during traversal
    pub path: String,

    /// Why the file was skipped
    pub reason: String,
}

/// Result of scanning one directory tree
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Surviving files in deterministic pre-order traversal order
    pub records: Vec<FileRecord>,

    /// Unreadable entries, recorded rather than aborting the scan
    pub skipped: Vec<SkippedFile>,
}

/// Scanner that walks a directory tree, applies the ignore rules, and
/// classifies every surviving regular file
pub struct FileScanner {
    root: PathBuf,
    rules: IgnoreRules,
}

impl FileScanner {
    /// Create a scanner for `root` with the given configuration
    pub fn new(root: impl AsRef<Path>, config: &ChunkerConfig) -> Result<Self> {
        config.validate()?;
        let rules = IgnoreRules::new(&config.ignore_patterns)?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            rules,
        })
    }

    /// Walk the tree and emit a [`FileRecord`] per non-ignored regular file.
    ///
    /// Hidden entries are included; traversal order is a sorted pre-order
    /// walk, so an unchanged tree always scans identically. Unreadable
    /// entries land in [`ScanOutcome::skipped`] and never abort the scan.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let root = fs::canonicalize(&self.root).map_err(|_| {
            ChunkerError::invalid_root(format!("{} does not exist", self.root.display()))
        })?;
        if !root.is_dir() {
            return Err(ChunkerError::invalid_root(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut outcome = ScanOutcome::default();

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let path = walk_error_path(&err);
                    if let Some(path) = path {
                        let relative = relative_slash_path(path, &root);
                        // An unreadable entry inside an excluded subtree
                        // loses nothing from the result set.
                        if self.rules.matches(&relative)
                            || self.rules.matches(&format!("{relative}/"))
                        {
                            continue;
                        }
                    }
                    let path = path.map_or_else(
                        || String::from("<unknown>"),
                        |p| p.display().to_string(),
                    );
                    log::warn!("Failed to read entry {path}: {err}");
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = relative_slash_path(path, &root);
            if self.rules.matches(&relative_path) {
                continue;
            }

            let size_bytes = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    log::warn!("Failed to stat {}: {err}", path.display());
                    outcome.skipped.push(SkippedFile {
                        path: path.display().to_string(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            outcome.records.push(FileRecord {
                path: path.to_path_buf(),
                relative_path,
                size_bytes,
                category: classify(path),
            });
        }

        log::debug!(
            "Scanned {}: {} files, {} skipped",
            root.display(),
            outcome.records.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}

/// Root-relative path with forward slashes regardless of platform
fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } => walk_error_path(err),
        _ => None,
    }
}
