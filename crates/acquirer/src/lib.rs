//! # Repoprep Acquirer
//!
//! Resolves a target string (a local directory or a remote repository URL)
//! into a guaranteed-local, up-to-date working copy.
//!
//! ## Resolution
//!
//! ```text
//! target string
//!     │
//!     ├──> existing local directory ──────────────> Resolution::Local
//!     │
//!     └──> scheme://host/owner/repo[.git][/]
//!             │
//!             ├──> cache miss: fresh clone ───────> Resolution::Ready
//!             │        └─> clone failure is fatal (partial dir cleaned up)
//!             │
//!             └──> cache hit: pull latest ────────> Resolution::Ready
//!                      └─> pull failure falls back> Resolution::Stale
//! ```
//!
//! Cache entries live under one root directory, one subdirectory per
//! `"{owner}_{repo}"` key, and persist across invocations. Concurrent
//! invocations against the same cache key from separate processes are
//! unsupported; no inter-process locking is performed.

mod acquirer;
mod cache;
mod error;
mod git;
mod target;

pub use acquirer::{Acquirer, Resolution};
pub use cache::RepoCache;
pub use error::{AcquireError, Result};
pub use git::{GitClient, GitError, SystemGit};
pub use target::{RemoteRepo, Target};
