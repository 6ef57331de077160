use crate::error::{ChunkerError, Result};
use regex::RegexSet;

/// Default ignore rules: VCS metadata, vendored dependencies, build output,
/// OS metadata, logs, temp files, and caches. Matched against the
/// slash-normalized root-relative path.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"\.git/",
    r"node_modules/",
    r"vendor/",
    r"\.bundle/",
    r"build/",
    r"dist/",
    r"\.DS_Store",
    r"Thumbs\.db",
    r"\.log$",
    r"\.tmp$",
    r"\.cache/",
];

/// Compiled set of ignore rules evaluated against relative paths
#[derive(Debug)]
pub struct IgnoreRules {
    set: RegexSet,
}

impl IgnoreRules {
    /// Compile a set of regex patterns into ignore rules
    pub fn new<P: AsRef<str>>(patterns: &[P]) -> Result<Self> {
        let set = RegexSet::new(patterns.iter().map(AsRef::as_ref))
            .map_err(|e| ChunkerError::invalid_config(format!("bad ignore pattern: {e}")))?;
        Ok(Self { set })
    }

    /// Check whether a slash-normalized relative path matches any rule
    #[must_use]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.set.is_match(relative_path)
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS).expect("default ignore patterns compile")
    }
}
