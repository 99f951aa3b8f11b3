//! Filesystem content catalog for docnav.
//!
//! Maps slugs to canonical site paths by scanning a content directory
//! of `.md`/`.mdx` files, the way Starlight-style sites lay content out:
//!
//! | File | Slug | Path |
//! |------|------|------|
//! | `index.md` | `""` | `/` |
//! | `configuration.md` | `configuration` | `/configuration/` |
//! | `guides/meta-tools.md` | `guides/meta-tools` | `/guides/meta-tools/` |
//! | `reference/index.mdx` | `reference` | `/reference/` |
//!
//! The scan happens once in [`FsCatalog::scan`]; lookups afterwards are
//! in-memory, so one catalog can serve concurrent builds.

mod scanner;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use docnav_site::ContentCatalog;

use crate::scanner::{Scanner, slug_to_path};

/// Catalog entry for one content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical site path.
    pub path: String,
    /// Source file relative to the content directory.
    pub source: PathBuf,
}

/// Content catalog built from a directory scan.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    content_dir: PathBuf,
    entries: HashMap<String, CatalogEntry>,
}

impl FsCatalog {
    /// Scan `content_dir` and build the catalog.
    ///
    /// A missing directory yields an empty catalog. When two files map to
    /// the same slug (`guide.md` and `guide/index.md`), the one found first
    /// in name order wins.
    #[must_use]
    pub fn scan(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        let files = Scanner::new(content_dir.clone()).scan();

        let mut entries: HashMap<String, CatalogEntry> = HashMap::with_capacity(files.len());
        for file in files {
            if let Some(existing) = entries.get(&file.slug) {
                tracing::warn!(
                    slug = %file.slug,
                    kept = %existing.source.display(),
                    ignored = %file.source.display(),
                    "two content files share a slug"
                );
                continue;
            }
            entries.insert(
                file.slug.clone(),
                CatalogEntry {
                    path: slug_to_path(&file.slug),
                    source: file.source,
                },
            );
        }

        tracing::debug!(
            dir = %content_dir.display(),
            entries = entries.len(),
            "content catalog scanned"
        );

        Self {
            content_dir,
            entries,
        }
    }

    /// Scanned directory.
    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Entry for a slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.get(slug)
    }

    /// Source file for a slug, relative to the content directory.
    #[must_use]
    pub fn source_path(&self, slug: &str) -> Option<&Path> {
        self.entries.get(slug).map(|e| e.source.as_path())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no content was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All slugs, sorted.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

impl ContentCatalog for FsCatalog {
    fn lookup(&self, slug: &str) -> Option<String> {
        self.entries.get(slug).map(|e| e.path.clone())
    }
}
