use std::env;
use std::path::{Path, PathBuf};

/// On-disk cache of remote working copies: one subdirectory per cache key
/// under a single root. Entries persist across invocations and are never
/// evicted here.
#[derive(Debug, Clone)]
pub struct RepoCache {
    root: PathBuf,
}

impl RepoCache {
    /// Create a cache rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Conventional per-user cache root
    #[must_use]
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("repoprep")
            .join("repos")
    }

    /// Cache root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for one cache key
    #[must_use]
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Default for RepoCache {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entry_paths_hang_off_the_root() {
        let cache = RepoCache::new("/var/cache/repoprep/repos");
        assert_eq!(
            cache.entry_path("acme_widget"),
            PathBuf::from("/var/cache/repoprep/repos/acme_widget")
        );
    }

    #[test]
    fn default_root_is_per_user() {
        let root = RepoCache::default_root();
        assert!(root.ends_with("repoprep/repos"));
    }
}
