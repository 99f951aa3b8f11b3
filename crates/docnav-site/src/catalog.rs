//! Content catalog abstraction.
//!
//! A catalog maps content slugs to canonical site paths. It is owned by
//! whatever discovers content (see `docnav-catalog-fs` for the filesystem
//! implementation) and is read-only for the duration of a build.

use std::collections::HashMap;

/// Slug to canonical path lookup.
///
/// Implementations must answer synchronously; they are expected to be an
/// in-memory map or a cache, not network I/O.
pub trait ContentCatalog: Send + Sync {
    /// Canonical site path (e.g. `/guides/security/`) for a slug.
    fn lookup(&self, slug: &str) -> Option<String>;
}

/// In-memory catalog.
///
/// # Example
///
/// ```
/// use docnav_site::{ContentCatalog, MemoryCatalog};
///
/// let catalog = MemoryCatalog::new().with_entry("guides/security", "/guides/security/");
/// assert_eq!(catalog.lookup("guides/security").as_deref(), Some("/guides/security/"));
/// assert_eq!(catalog.lookup("missing"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    paths: HashMap<String, String>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, slug: &str, path: &str) -> Self {
        self.insert(slug, path);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, slug: &str, path: &str) {
        self.paths.insert(slug.to_owned(), path.to_owned());
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ContentCatalog for MemoryCatalog {
    fn lookup(&self, slug: &str) -> Option<String> {
        self.paths.get(slug).cloned()
    }
}

impl FromIterator<(String, String)> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
