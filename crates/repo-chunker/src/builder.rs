use crate::classify::Category;
use crate::config::ChunkerConfig;
use crate::types::{Chunk, FileRecord};
use std::collections::HashMap;
use std::mem;

/// Groups file records by category and bin-packs each group into
/// size-bounded chunks.
///
/// Packing is first-fit-sequential: records are taken in scan order and a
/// chunk is sealed as soon as the next record would push it past the bound.
/// Global optimality is not a goal; determinism is.
pub struct ChunkBuilder {
    max_chunk_size: u64,
}

impl ChunkBuilder {
    /// Create a builder with an explicit size bound
    #[must_use]
    pub const fn new(max_chunk_size: u64) -> Self {
        Self { max_chunk_size }
    }

    /// Create a builder from configuration
    #[must_use]
    pub const fn from_config(config: &ChunkerConfig) -> Self {
        Self::new(config.max_chunk_size)
    }

    /// Pack `records` into the complete chunk sequence for one scan.
    ///
    /// Categories are emitted in first-seen scan order; within a category,
    /// record order is preserved. Every record lands in exactly one chunk.
    #[must_use]
    pub fn build(&self, records: Vec<FileRecord>) -> Vec<Chunk> {
        let mut order: Vec<Category> = Vec::new();
        let mut groups: HashMap<Category, Vec<FileRecord>> = HashMap::new();

        for record in records {
            if !groups.contains_key(&record.category) {
                order.push(record.category);
            }
            groups.entry(record.category).or_default().push(record);
        }

        let mut chunks = Vec::new();
        for category in order {
            let group = groups.remove(&category).unwrap_or_default();
            log::debug!("Packing {} {} files", group.len(), category);
            self.pack_group(category, group, &mut chunks);
        }
        chunks
    }

    fn pack_group(&self, category: Category, group: Vec<FileRecord>, chunks: &mut Vec<Chunk>) {
        let mut sequence = 0usize;
        let mut current: Vec<FileRecord> = Vec::new();
        let mut current_size: u64 = 0;

        for record in group {
            if !current.is_empty() && current_size + record.size_bytes > self.max_chunk_size {
                sequence += 1;
                chunks.push(seal(category, sequence, mem::take(&mut current), current_size));
                current_size = 0;
            }

            // An oversized record starts (and will end) a chunk of its own.
            current_size += record.size_bytes;
            current.push(record);
        }

        if !current.is_empty() {
            sequence += 1;
            chunks.push(seal(category, sequence, current, current_size));
        }
    }
}

fn seal(category: Category, sequence: usize, files: Vec<FileRecord>, total: u64) -> Chunk {
    Chunk {
        id: format!("{}_{}", category.as_str(), sequence),
        category,
        files,
        total_size_bytes: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    const MAX: u64 = 50_000;

    fn record(rel: &str, size: u64, category: Category) -> FileRecord {
        FileRecord {
            path: PathBuf::from("/repo").join(rel),
            relative_path: rel.to_string(),
            size_bytes: size,
            category,
        }
    }

    fn ids(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn packs_sequentially_up_to_the_bound() {
        let builder = ChunkBuilder::new(MAX);
        let chunks = builder.build(vec![
            record("a.rb", 30_000, Category::SourceCode),
            record("b.rb", 30_000, Category::SourceCode),
            record("c.rb", 10_000, Category::SourceCode),
        ]);

        assert_eq!(ids(&chunks), vec!["source_code_1", "source_code_2"]);
        assert_eq!(chunks[0].total_size_bytes, 30_000);
        assert_eq!(chunks[0].files[0].relative_path, "a.rb");
        assert_eq!(chunks[1].total_size_bytes, 40_000);
        assert_eq!(
            chunks[1]
                .files
                .iter()
                .map(|f| f.relative_path.as_str())
                .collect::<Vec<_>>(),
            vec!["b.rb", "c.rb"]
        );
    }

    #[test]
    fn oversized_file_becomes_a_singleton_chunk() {
        let builder = ChunkBuilder::new(MAX);
        let chunks = builder.build(vec![record("huge.rb", 80_000, Category::SourceCode)]);

        assert_eq!(ids(&chunks), vec!["source_code_1"]);
        assert_eq!(chunks[0].file_count(), 1);
        assert_eq!(chunks[0].total_size_bytes, 80_000);
        assert!(chunks[0].is_oversized_singleton(MAX));
    }

    #[test]
    fn oversized_file_does_not_absorb_followers() {
        let builder = ChunkBuilder::new(MAX);
        let chunks = builder.build(vec![
            record("huge.rb", 80_000, Category::SourceCode),
            record("small.rb", 100, Category::SourceCode),
        ]);

        assert_eq!(ids(&chunks), vec!["source_code_1", "source_code_2"]);
        assert_eq!(chunks[0].file_count(), 1);
        assert_eq!(chunks[1].file_count(), 1);
        assert_eq!(chunks[1].total_size_bytes, 100);
    }

    #[test]
    fn sequences_are_independent_per_category() {
        let builder = ChunkBuilder::new(MAX);
        let chunks = builder.build(vec![
            record("a.rb", 10, Category::SourceCode),
            record("README.md", 10, Category::Documentation),
            record("b.rb", 10, Category::SourceCode),
        ]);

        assert_eq!(ids(&chunks), vec!["source_code_1", "documentation_1"]);
        assert_eq!(chunks[0].file_count(), 2);
    }

    #[test]
    fn totals_match_member_sums() {
        let builder = ChunkBuilder::new(100);
        let chunks = builder.build(vec![
            record("a.rb", 60, Category::SourceCode),
            record("b.rb", 60, Category::SourceCode),
            record("c.rb", 30, Category::SourceCode),
        ]);

        for chunk in &chunks {
            let sum: u64 = chunk.files.iter().map(|f| f.size_bytes).sum();
            assert_eq!(chunk.total_size_bytes, sum);
        }
    }

    #[test]
    fn size_bound_holds_for_multi_file_chunks() {
        let builder = ChunkBuilder::new(100);
        let sizes = [40, 40, 40, 150, 10, 90, 20];
        let records = sizes
            .iter()
            .enumerate()
            .map(|(i, s)| record(&format!("f{i}.rb"), *s, Category::SourceCode))
            .collect();

        let chunks = builder.build(records);

        let total_files: usize = chunks.iter().map(Chunk::file_count).sum();
        assert_eq!(total_files, sizes.len());
        for chunk in &chunks {
            assert!(chunk.total_size_bytes <= 100 || chunk.file_count() == 1);
        }
    }

    #[test]
    fn empty_input_builds_nothing() {
        let builder = ChunkBuilder::new(MAX);
        assert!(builder.build(Vec::new()).is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let records = vec![
            record("a.rb", 30_000, Category::SourceCode),
            record("notes.md", 5_000, Category::Documentation),
            record("b.rb", 25_000, Category::SourceCode),
        ];

        let builder = ChunkBuilder::new(MAX);
        let first = builder.build(records.clone());
        let second = builder.build(records);
        assert_eq!(first, second);
    }
}
