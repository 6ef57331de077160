use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Closed classification assigned to every scanned file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Program source files
    SourceCode,
    /// Prose and documentation files
    Documentation,
    /// Structured configuration and markup
    Configuration,
    /// Packaging specification files
    PackageSpec,
    /// Files whose purpose is declaring dependencies
    DependencyManifest,
    /// Everything that matched no rule
    Other,
}

impl Category {
    /// Stable name used in chunk ids and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceCode => "source_code",
            Self::Documentation => "documentation",
            Self::Configuration => "configuration",
            Self::PackageSpec => "package_spec",
            Self::DependencyManifest => "dependency_manifest",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SOURCE_EXTENSIONS: &[&str] = &[
    "rb", "py", "js", "ts", "java", "cpp", "c", "go", "rs", "php",
];

const DOC_EXTENSIONS: &[&str] = &["md", "txt", "rst", "adoc"];

const CONFIG_EXTENSIONS: &[&str] = &["json", "yml", "yaml", "toml", "xml"];

const PACKAGE_SPEC_EXTENSIONS: &[&str] = &["gemspec", "podspec"];

const CONFIG_BASENAMES: &[&str] = &["gemfile", "rakefile", "makefile", "dockerfile"];

const DOC_BASENAMES: &[&str] = &["readme", "license", "changelog"];

const DEPENDENCY_BASENAMES: &[&str] = &[
    "package.json",
    "composer.json",
    "requirements.txt",
    "pipfile",
];

/// Classify a file path into its [`Category`].
///
/// Pure and total: the extension table is consulted first (case-insensitive),
/// then the basename table, and anything unmatched is [`Category::Other`].
#[must_use]
pub fn classify(path: impl AsRef<Path>) -> Category {
    let path = path.as_ref();

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        if let Some(category) = classify_extension(&ext) {
            return category;
        }
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        let name = name.to_lowercase();
        if let Some(category) = classify_basename(&name) {
            return category;
        }
    }

    Category::Other
}

fn classify_extension(ext: &str) -> Option<Category> {
    if SOURCE_EXTENSIONS.contains(&ext) {
        Some(Category::SourceCode)
    } else if DOC_EXTENSIONS.contains(&ext) {
        Some(Category::Documentation)
    } else if CONFIG_EXTENSIONS.contains(&ext) {
        Some(Category::Configuration)
    } else if PACKAGE_SPEC_EXTENSIONS.contains(&ext) {
        Some(Category::PackageSpec)
    } else {
        None
    }
}

fn classify_basename(name: &str) -> Option<Category> {
    if CONFIG_BASENAMES.contains(&name) {
        Some(Category::Configuration)
    } else if DOC_BASENAMES.contains(&name) {
        Some(Category::Documentation)
    } else if DEPENDENCY_BASENAMES.contains(&name) {
        Some(Category::DependencyManifest)
    } else {
        None
    }
}
