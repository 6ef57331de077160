use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

/// Matches `scheme://host/owner/repo`, tolerating a `.git` suffix and a
/// trailing slash on the repository segment.
static REMOTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^/]+/([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("remote url pattern compiles")
});

/// A parsed remote repository reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Clone URL, without any trailing slash
    pub url: String,

    /// Owner segment of the URL
    pub owner: String,

    /// Repository segment, with any `.git` suffix stripped
    pub repo: String,
}

impl RemoteRepo {
    /// Deterministic cache key for this repository
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}_{}", self.owner, self.repo)
    }
}

/// A resolution target: remote repository URL or local path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Filesystem path (anything that is not a remote URL)
    Local(PathBuf),

    /// Remote repository in the supported hosting convention
    Remote(RemoteRepo),
}

impl Target {
    /// Classify a raw target string.
    ///
    /// Strings matching the remote form become [`Target::Remote`]; every
    /// other string is treated as a local path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(captures) = REMOTE_URL.captures(raw) {
            return Self::Remote(RemoteRepo {
                url: raw.trim_end_matches('/').to_string(),
                owner: captures[1].to_string(),
                repo: captures[2].to_string(),
            });
        }
        Self::Local(PathBuf::from(raw))
    }
}
