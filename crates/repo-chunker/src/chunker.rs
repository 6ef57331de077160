use crate::builder::ChunkBuilder;
use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::scanner::{FileScanner, SkippedFile};
use crate::stats::ScanStats;
use crate::types::Chunk;
use std::fs;
use std::path::{Path, PathBuf};

/// The complete chunk sequence for one scanned tree, plus everything the
/// downstream consumer needs to interpret it
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    /// Absolute root that was scanned
    pub root: PathBuf,

    /// Chunks in emission order
    pub chunks: Vec<Chunk>,

    /// Files omitted because they could not be read
    pub skipped: Vec<SkippedFile>,

    /// Aggregate scan statistics
    pub stats: ScanStats,
}

/// Facade tying the scanner and the chunk builder together
pub struct RepoChunker {
    config: ChunkerConfig,
}

impl RepoChunker {
    /// Create a chunker, validating the configuration up front
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scan `root` and pack its files into chunks
    pub fn chunk_directory(&self, root: impl AsRef<Path>) -> Result<ChunkPlan> {
        let scanner = FileScanner::new(root.as_ref(), &self.config)?;
        let outcome = scanner.scan()?;
        let stats = ScanStats::from(&outcome);

        let chunks = ChunkBuilder::from_config(&self.config).build(outcome.records);
        log::info!(
            "Built {} chunks from {} files ({} skipped)",
            chunks.len(),
            stats.files,
            stats.skipped
        );

        Ok(ChunkPlan {
            root: fs::canonicalize(root.as_ref())?,
            chunks,
            skipped: outcome.skipped,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn chunks_a_small_tree_end_to_end() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/main.rb"), b"puts 'hi'").unwrap();
        fs::write(root.join("README.md"), b"# readme").unwrap();

        let chunker = RepoChunker::new(ChunkerConfig::default()).unwrap();
        let plan = chunker.chunk_directory(root).unwrap();

        assert_eq!(plan.chunks.len(), 2);
        assert_eq!(plan.stats.files, 2);
        assert!(plan.skipped.is_empty());
        assert!(plan.root.is_absolute());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ChunkerConfig::default().with_max_chunk_size(0);
        assert!(RepoChunker::new(config).is_err());
    }
}
