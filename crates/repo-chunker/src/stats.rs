use crate::scanner::ScanOutcome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics about one scan-and-chunk pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Number of files kept
    pub files: usize,

    /// Number of unreadable files skipped
    pub skipped: usize,

    /// Total bytes across kept files
    pub total_bytes: u64,

    /// Kept file counts per category name
    pub categories: HashMap<String, usize>,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, category: &str, bytes: u64) {
        self.files += 1;
        self.total_bytes += bytes;
        *self.categories.entry(category.to_string()).or_insert(0) += 1;
    }

    pub fn add_skip(&mut self) {
        self.skipped += 1;
    }
}

impl From<&ScanOutcome> for ScanStats {
    fn from(outcome: &ScanOutcome) -> Self {
        let mut stats = Self::new();
        for record in &outcome.records {
            stats.add_file(record.category.as_str(), record.size_bytes);
        }
        for _ in &outcome.skipped {
            stats.add_skip();
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::scanner::SkippedFile;
    use crate::types::FileRecord;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn aggregates_scan_outcome() {
        let outcome = ScanOutcome {
            records: vec![
                FileRecord {
                    path: PathBuf::from("/repo/a.rb"),
                    relative_path: "a.rb".to_string(),
                    size_bytes: 100,
                    category: Category::SourceCode,
                },
                FileRecord {
                    path: PathBuf::from("/repo/README.md"),
                    relative_path: "README.md".to_string(),
                    size_bytes: 50,
                    category: Category::Documentation,
                },
            ],
            skipped: vec![SkippedFile {
                path: "/repo/locked.rb".to_string(),
                reason: "permission denied".to_string(),
            }],
        };

        let stats = ScanStats::from(&outcome);
        assert_eq!(stats.files, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.total_bytes, 150);
        assert_eq!(stats.categories.get("source_code"), Some(&1));
        assert_eq!(stats.categories.get("documentation"), Some(&1));
    }
}
