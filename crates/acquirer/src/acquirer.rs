use crate::cache::RepoCache;
use crate::error::{AcquireError, Result};
use crate::git::{GitClient, SystemGit};
use crate::target::{RemoteRepo, Target};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of resolving a target: the local path plus how fresh it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Target was already a local directory
    Local(PathBuf),

    /// Remote working copy, freshly cloned or successfully updated
    Ready(PathBuf),

    /// Remote working copy whose update failed; the existing (possibly
    /// stale) copy is used as-is
    Stale { path: PathBuf, warning: String },
}

impl Resolution {
    /// The guaranteed-local directory
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Local(path) | Self::Ready(path) => path,
            Self::Stale { path, .. } => path,
        }
    }

    /// Warning attached to a stale-cache fallback, if any
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Stale { warning, .. } => Some(warning),
            _ => None,
        }
    }
}

/// Resolves a target string into a guaranteed-local directory, cloning and
/// caching remote repositories under one cache root
pub struct Acquirer<G: GitClient = SystemGit> {
    cache: RepoCache,
    git: G,
}

impl Acquirer<SystemGit> {
    /// Create an acquirer using the system `git` binary
    pub fn new(cache: RepoCache) -> Self {
        Self {
            cache,
            git: SystemGit,
        }
    }
}

impl Default for Acquirer<SystemGit> {
    fn default() -> Self {
        Self::new(RepoCache::default())
    }
}

impl<G: GitClient> Acquirer<G> {
    /// Create an acquirer with an explicit git client
    pub fn with_git(cache: RepoCache, git: G) -> Self {
        Self { cache, git }
    }

    /// Resolve `target` into a local directory.
    ///
    /// Local paths are validated and returned unchanged (absolutized).
    /// Remote URLs resolve through the cache: a miss clones fresh (failure
    /// is fatal and the partial directory is removed), a hit pulls the
    /// latest and falls back to the existing copy when the pull fails.
    pub fn resolve(&self, target: &str) -> Result<Resolution> {
        match Target::parse(target) {
            Target::Local(path) => self.resolve_local(target, &path),
            Target::Remote(remote) => self.resolve_remote(&remote),
        }
    }

    fn resolve_local(&self, raw: &str, path: &Path) -> Result<Resolution> {
        if !path.is_dir() {
            return Err(AcquireError::invalid_target(format!(
                "{raw} is neither an existing directory nor a repository URL"
            )));
        }
        let path = fs::canonicalize(path)?;
        log::debug!("Resolved local target {}", path.display());
        Ok(Resolution::Local(path))
    }

    fn resolve_remote(&self, remote: &RemoteRepo) -> Result<Resolution> {
        let dest = self.cache.entry_path(&remote.cache_key());

        if dest.is_dir() {
            log::info!("Using cached working copy at {}", dest.display());
            return match self.git.update(&dest) {
                Ok(()) => Ok(Resolution::Ready(fs::canonicalize(dest)?)),
                Err(err) => {
                    log::warn!(
                        "Could not update cached copy of {}, using existing version: {err}",
                        remote.url
                    );
                    Ok(Resolution::Stale {
                        path: fs::canonicalize(dest)?,
                        warning: err.0,
                    })
                }
            };
        }

        log::info!("Cloning {}/{}", remote.owner, remote.repo);
        fs::create_dir_all(self.cache.root())?;
        match self.git.clone_repo(&remote.url, &dest) {
            Ok(()) => Ok(Resolution::Ready(fs::canonicalize(dest)?)),
            Err(err) => {
                // Never leave a half-populated cache entry behind.
                if dest.exists() {
                    if let Err(cleanup) = fs::remove_dir_all(&dest) {
                        log::warn!(
                            "Failed to remove partial clone {}: {cleanup}",
                            dest.display()
                        );
                    }
                }
                Err(AcquireError::CloneFailed {
                    url: remote.url.clone(),
                    detail: err.0,
                })
            }
        }
    }
}
