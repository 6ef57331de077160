use repoprep_acquirer::Resolution;
use repoprep_chunker::{Chunk, ChunkPlan, ScanStats, SkippedFile};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// How the scanned root was obtained
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Target was already a local directory
    Local,
    /// Fresh or successfully updated working copy
    Ready,
    /// Working copy whose update failed; contents may be stale
    Stale,
}

/// Provenance of the scanned root
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub kind: SourceKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The boundary artifact handed to the downstream analysis engine: the
/// resolved root plus the complete chunk sequence
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub root: PathBuf,
    pub source: SourceInfo,
    pub chunks: Vec<Chunk>,
    pub skipped: Vec<SkippedFile>,
    pub stats: ScanStats,
}

impl Manifest {
    pub fn new(resolution: &Resolution, plan: ChunkPlan) -> Self {
        let source = match resolution {
            Resolution::Local(_) => SourceInfo {
                kind: SourceKind::Local,
                warning: None,
            },
            Resolution::Ready(_) => SourceInfo {
                kind: SourceKind::Ready,
                warning: None,
            },
            Resolution::Stale { warning, .. } => SourceInfo {
                kind: SourceKind::Stale,
                warning: Some(warning.clone()),
            },
        };

        Self {
            root: plan.root,
            source,
            chunks: plan.chunks,
            skipped: plan.skipped,
            stats: plan.stats,
        }
    }
}

/// Human-readable manifest summary
pub fn render_text(manifest: &Manifest) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Root: {}", manifest.root.display());
    if let Some(warning) = &manifest.source.warning {
        let _ = writeln!(out, "Warning: using stale cache ({warning})");
    }
    let _ = writeln!(
        out,
        "Files: {} ({} bytes), skipped: {}",
        manifest.stats.files, manifest.stats.total_bytes, manifest.stats.skipped
    );
    let _ = writeln!(out, "Chunks: {}", manifest.chunks.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "| chunk | files | bytes |");
    let _ = writeln!(out, "|---|---:|---:|");
    for chunk in &manifest.chunks {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            chunk.id,
            chunk.file_count(),
            chunk.total_size_bytes
        );
    }

    if !manifest.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped files:");
        for skip in &manifest.skipped {
            let _ = writeln!(out, "  {} ({})", skip.path, skip.reason);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use repoprep_chunker::Category;
    use std::path::PathBuf;

    fn sample_manifest() -> Manifest {
        let chunk = Chunk {
            id: "source_code_1".to_string(),
            category: Category::SourceCode,
            files: Vec::new(),
            total_size_bytes: 1234,
        };
        Manifest {
            root: PathBuf::from("/repo"),
            source: SourceInfo {
                kind: SourceKind::Stale,
                warning: Some("network down".to_string()),
            },
            chunks: vec![chunk],
            skipped: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    #[test]
    fn text_rendering_lists_chunks_and_warnings() {
        let text = render_text(&sample_manifest());
        assert!(text.contains("Root: /repo"));
        assert!(text.contains("stale cache (network down)"));
        assert!(text.contains("| source_code_1 | 0 | 1234 |"));
    }

    #[test]
    fn json_shape_is_stable() {
        let value = serde_json::to_value(sample_manifest()).unwrap();
        assert_eq!(value["source"]["kind"], "stale");
        assert_eq!(value["chunks"][0]["id"], "source_code_1");
        assert_eq!(value["chunks"][0]["category"], "source_code");
    }
}
