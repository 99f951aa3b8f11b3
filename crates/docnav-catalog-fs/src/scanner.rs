//! Content discovery by filesystem walking.
//!
//! The scanner only finds files and derives their slugs; [`FsCatalog`]
//! (crate root) owns the resulting lookup table.
//!
//! [`FsCatalog`]: crate::FsCatalog

use std::fs;
use std::path::{Path, PathBuf};

/// Content file extensions, compared case-insensitively.
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// A content file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentFile {
    /// Slug derived from the relative path.
    pub slug: String,
    /// Path relative to the content directory.
    pub source: PathBuf,
}

/// Walks a content directory and collects content files.
pub(crate) struct Scanner {
    content_dir: PathBuf,
}

impl Scanner {
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Scan the content directory.
    ///
    /// Returns an empty Vec if the directory doesn't exist. Entries are
    /// visited in name order so results are stable across platforms.
    pub fn scan(&self) -> Vec<ContentFile> {
        let mut files = Vec::new();
        if self.content_dir.is_dir() {
            Self::scan_directory(&self.content_dir, Path::new(""), &mut files);
        }
        files
    }

    fn scan_directory(dir: &Path, rel_dir: &Path, files: &mut Vec<ContentFile>) {
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::debug!(dir = %dir.display(), "skipping unreadable directory");
            return;
        };

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e, is_dir)
            })
            .collect();
        entries.sort_by_key(|(e, _)| e.file_name());

        for (entry, is_dir) in entries {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            // Hidden and partial files never become pages
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let rel_path = rel_dir.join(&*name);
            if is_dir {
                Self::scan_directory(&entry.path(), &rel_path, files);
            } else if is_content_file(&rel_path) {
                files.push(ContentFile {
                    slug: file_path_to_slug(&rel_path),
                    source: rel_path,
                });
            }
        }
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CONTENT_EXTENSIONS.iter().any(|c| c.eq_ignore_ascii_case(e)))
}

/// Convert a content-relative file path to a slug.
///
/// - `index.md` -> `""`
/// - `guides/meta-tools.md` -> `"guides/meta-tools"`
/// - `reference/index.mdx` -> `"reference"`
/// - `Getting Started.md` -> `"getting-started"`
pub(crate) fn file_path_to_slug(rel_path: &Path) -> String {
    let without_ext = rel_path.with_extension("");
    let segments: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase().replace(' ', "-"))
        .collect();

    let segments = match segments.split_last() {
        Some((last, rest)) if last == "index" => rest,
        _ => segments.as_slice(),
    };
    segments.join("/")
}

/// Canonical site path for a slug: `/` for the root, `/slug/` otherwise.
pub(crate) fn slug_to_path(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_owned()
    } else {
        format!("/{slug}/")
    }
}
