//! # Repoprep Chunker
//!
//! Partitions a codebase into bounded-size, type-grouped chunks for
//! sequential downstream analysis.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> File Scanner (deterministic pre-order walk)
//!     │      ├─> Ignore rules (regex over relative paths)
//!     │      └─> Classifier (extension/basename tables)
//!     │
//!     └──> Chunk Builder (first-fit-sequential per category)
//!            └─> Chunk[] with deterministic ids
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use repoprep_chunker::{ChunkerConfig, RepoChunker};
//!
//! let chunker = RepoChunker::new(ChunkerConfig::default())?;
//! let plan = chunker.chunk_directory("/path/to/project")?;
//!
//! for chunk in &plan.chunks {
//!     println!("{}: {} files, {} bytes", chunk.id, chunk.files.len(), chunk.total_size_bytes);
//! }
//! # Ok::<(), repoprep_chunker::ChunkerError>(())
//! ```

mod builder;
mod chunker;
mod classify;
mod config;
mod error;
mod patterns;
mod scanner;
mod stats;
mod types;

pub use builder::ChunkBuilder;
pub use chunker::{ChunkPlan, RepoChunker};
pub use classify::{classify, Category};
pub use config::{ChunkerConfig, DEFAULT_MAX_CHUNK_SIZE};
pub use error::{ChunkerError, Result};
pub use patterns::{IgnoreRules, DEFAULT_IGNORE_PATTERNS};
pub use scanner::{FileScanner, ScanOutcome, SkippedFile};
pub use stats::ScanStats;
pub use types::{Chunk, FileRecord};
