//! Sidebar navigation tree builder.
//!
//! Turns the raw `sidebar` entries into a [`NavigationTree`]. Each raw entry
//! is classified by shape: `link` or `slug` make a [`NavEntry::Link`] leaf,
//! `items` makes a [`NavEntry::Group`]. Declaration order is display order
//! and is preserved exactly.
//!
//! The tree is generic over its leaf target. [`build_tree`] produces a
//! `NavigationTree<LinkTarget>` whose slugs are still unresolved; the
//! resolver turns it into a `NavigationTree<ResolvedLink>`, the only form
//! handed to the rendering host.
//!
//! # Example
//!
//! ```
//! use docnav_config::RawNavEntry;
//! use docnav_site::build_tree;
//!
//! let raw = vec![
//!     RawNavEntry::link("Home", "/"),
//!     RawNavEntry::group("Guides", vec![RawNavEntry::slug("Security", "guides/security")]),
//! ];
//! let built = build_tree(&raw, 6).unwrap();
//! assert_eq!(built.tree.len(), 2);
//! assert_eq!(built.tree.link_count(), 2);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use docnav_config::RawNavEntry;
use serde::Serialize;
use url::Url;

use crate::error::SiteError;
use crate::identity::parse_absolute_url;

/// Labels from the root of the sidebar down to an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LabelPath(Vec<String>);

impl LabelPath {
    /// Path of a direct child.
    #[must_use]
    pub fn child(&self, label: &str) -> Self {
        let mut labels = self.0.clone();
        labels.push(label.to_owned());
        Self(labels)
    }

    /// Labels in root-to-leaf order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// True at the sidebar root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[&str; N]> for LabelPath {
    fn from(labels: [&str; N]) -> Self {
        Self(labels.iter().map(|&l| l.to_owned()).collect())
    }
}

impl fmt::Display for LabelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join(" > "))
    }
}

/// Content identifier with an optional in-page anchor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRef {
    slug: String,
    anchor: Option<String>,
}

impl ContentRef {
    /// Parse `guides/security#threats` style references.
    ///
    /// Surrounding slashes are stripped from the slug. Returns `None` if
    /// the slug is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (slug, anchor) = match raw.split_once('#') {
            Some((s, a)) => (s, Some(a)),
            None => (raw, None),
        };

        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return None;
        }

        Some(Self {
            slug: slug.to_owned(),
            anchor: anchor.filter(|a| !a.is_empty()).map(str::to_owned),
        })
    }

    /// Slug looked up in the content catalog.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// In-page anchor, without `#`.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{anchor}", self.slug),
            None => f.write_str(&self.slug),
        }
    }
}

/// Unresolved link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Slug to look up in the content catalog.
    Content(ContentRef),
    /// Site path written as `/...`, relative to the base path.
    Internal(String),
    /// Absolute URL to another site.
    External {
        /// Parsed form, for inspection.
        url: Url,
        /// Href exactly as written (trimmed), emitted unchanged.
        raw: String,
    },
}

/// Sidebar entry: a link leaf or a group of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry<T> {
    /// Leaf linking somewhere.
    Link {
        /// Display label.
        label: String,
        /// Link target.
        target: T,
    },
    /// Labelled group with at least one child.
    Group {
        /// Display label.
        label: String,
        /// Whether the group starts collapsed.
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        collapsed: bool,
        /// Child entries in declaration order.
        children: Vec<NavEntry<T>>,
    },
}

impl<T> NavEntry<T> {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Children of a group, empty for links.
    #[must_use]
    pub fn children(&self) -> &[NavEntry<T>] {
        match self {
            Self::Link { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// Link target, `None` for groups.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Link { target, .. } => Some(target),
            Self::Group { .. } => None,
        }
    }
}

/// Ordered sidebar entries.
///
/// Immutable once built; any configuration change rebuilds it from scratch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree<T> {
    entries: Vec<NavEntry<T>>,
}

impl<T> NavigationTree<T> {
    pub(crate) fn new(entries: Vec<NavEntry<T>>) -> Self {
        Self { entries }
    }

    /// Top-level entries.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry<T>] {
        &self.entries
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the sidebar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All link leaves in document order, with their label paths.
    #[must_use]
    pub fn links(&self) -> Vec<(LabelPath, &T)> {
        fn walk<'a, T>(
            entries: &'a [NavEntry<T>],
            parent: &LabelPath,
            out: &mut Vec<(LabelPath, &'a T)>,
        ) {
            for entry in entries {
                let path = parent.child(entry.label());
                match entry {
                    NavEntry::Link { target, .. } => out.push((path, target)),
                    NavEntry::Group { children, .. } => walk(children, &path, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.entries, &LabelPath::default(), &mut out);
        out
    }

    /// Number of link leaves.
    #[must_use]
    pub fn link_count(&self) -> usize {
        fn count<T>(entries: &[NavEntry<T>]) -> usize {
            entries
                .iter()
                .map(|e| match e {
                    NavEntry::Link { .. } => 1,
                    NavEntry::Group { children, .. } => count(children),
                })
                .sum()
        }
        count(&self.entries)
    }

    /// Deepest group nesting level (0 for a flat list of links).
    #[must_use]
    pub fn depth(&self) -> usize {
        fn depth<T>(entries: &[NavEntry<T>]) -> usize {
            entries
                .iter()
                .map(|e| match e {
                    NavEntry::Link { .. } => 0,
                    NavEntry::Group { children, .. } => 1 + depth(children),
                })
                .max()
                .unwrap_or(0)
        }
        depth(&self.entries)
    }
}

/// Non-fatal issue found while building the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavWarning {
    /// The same slug is linked from more than one leaf.
    DuplicateSlug {
        /// Slug without its anchor.
        slug: String,
        /// Leaf that linked it first.
        first: LabelPath,
        /// Later leaf linking it again.
        duplicate: LabelPath,
    },
    /// Two siblings share a label.
    DuplicateSiblingLabel {
        /// Repeated label.
        label: String,
        /// Group holding both siblings.
        parent: LabelPath,
    },
}

impl fmt::Display for NavWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlug {
                slug,
                first,
                duplicate,
            } => write!(
                f,
                "slug {slug:?} is linked from both {first} and {duplicate}"
            ),
            Self::DuplicateSiblingLabel { label, parent } => {
                write!(f, "label {label:?} appears more than once under {parent}")
            }
        }
    }
}

/// Result of [`build_tree`].
#[derive(Clone, Debug)]
pub struct TreeBuild {
    /// Tree with unresolved targets.
    pub tree: NavigationTree<LinkTarget>,
    /// Non-fatal warnings in document order.
    pub warnings: Vec<NavWarning>,
}

/// Build an unresolved navigation tree from raw sidebar entries.
///
/// Top-level groups are at depth 1; a group deeper than `max_depth` fails.
/// Links do not count towards depth.
///
/// # Errors
///
/// - [`SiteError::InvalidEntry`] for an empty label or ambiguous shape
/// - [`SiteError::EmptyGroup`] for a group with empty or absent `items`
/// - [`SiteError::MaxDepthExceeded`] for groups nested too deeply
/// - [`SiteError::InvalidUrl`] for a `link` that is neither `/...` nor absolute
pub fn build_tree(raw: &[RawNavEntry], max_depth: usize) -> Result<TreeBuild, SiteError> {
    let mut builder = TreeBuilder {
        max_depth,
        first_use: HashMap::new(),
        warnings: Vec::new(),
    };
    let entries = builder.build_entries(raw, &LabelPath::default(), 1)?;

    for warning in &builder.warnings {
        tracing::warn!("sidebar: {warning}");
    }

    Ok(TreeBuild {
        tree: NavigationTree::new(entries),
        warnings: builder.warnings,
    })
}

struct TreeBuilder {
    max_depth: usize,
    /// Slug -> first leaf linking it.
    first_use: HashMap<String, LabelPath>,
    warnings: Vec<NavWarning>,
}

impl TreeBuilder {
    fn build_entries(
        &mut self,
        raw: &[RawNavEntry],
        parent: &LabelPath,
        depth: usize,
    ) -> Result<Vec<NavEntry<LinkTarget>>, SiteError> {
        let mut labels = HashSet::new();
        let mut entries = Vec::with_capacity(raw.len());

        for item in raw {
            let entry = self.build_entry(item, parent, depth)?;
            if !labels.insert(entry.label().to_owned()) {
                self.warnings.push(NavWarning::DuplicateSiblingLabel {
                    label: entry.label().to_owned(),
                    parent: parent.clone(),
                });
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    fn build_entry(
        &mut self,
        raw: &RawNavEntry,
        parent: &LabelPath,
        depth: usize,
    ) -> Result<NavEntry<LinkTarget>, SiteError> {
        let label = raw.label.trim();
        if label.is_empty() {
            return Err(SiteError::InvalidEntry {
                path: parent.child("<unlabeled>"),
                reason: "label cannot be empty".to_owned(),
            });
        }
        let path = parent.child(label);

        let target = match (&raw.link, &raw.slug, &raw.items) {
            (Some(link), None, None) => Some(classify_link(link, &path)?),
            (None, Some(slug), None) => Some(self.content_ref(slug, &path)?),
            (None, None, _) => None,
            _ => {
                return Err(SiteError::InvalidEntry {
                    path,
                    reason: "link, slug and items are mutually exclusive".to_owned(),
                });
            }
        };

        if let Some(target) = target {
            if raw.collapsed.is_some() {
                return Err(SiteError::InvalidEntry {
                    path,
                    reason: "collapsed only applies to groups".to_owned(),
                });
            }
            return Ok(NavEntry::Link {
                label: label.to_owned(),
                target,
            });
        }

        if depth > self.max_depth {
            return Err(SiteError::MaxDepthExceeded {
                path,
                max_depth: self.max_depth,
            });
        }

        let items = raw.items.as_deref().unwrap_or_default();
        if items.is_empty() {
            return Err(SiteError::EmptyGroup { path });
        }

        let children = self.build_entries(items, &path, depth + 1)?;
        Ok(NavEntry::Group {
            label: label.to_owned(),
            collapsed: raw.collapsed.unwrap_or(false),
            children,
        })
    }

    fn content_ref(&mut self, raw: &str, path: &LabelPath) -> Result<LinkTarget, SiteError> {
        let content = ContentRef::parse(raw).ok_or_else(|| SiteError::InvalidEntry {
            path: path.clone(),
            reason: "slug cannot be empty".to_owned(),
        })?;

        match self.first_use.get(content.slug()) {
            Some(first) => self.warnings.push(NavWarning::DuplicateSlug {
                slug: content.slug().to_owned(),
                first: first.clone(),
                duplicate: path.clone(),
            }),
            None => {
                self.first_use
                    .insert(content.slug().to_owned(), path.clone());
            }
        }

        Ok(LinkTarget::Content(content))
    }
}

fn classify_link(raw: &str, path: &LabelPath) -> Result<LinkTarget, SiteError> {
    let link = raw.trim();
    if link.is_empty() {
        return Err(SiteError::InvalidEntry {
            path: path.clone(),
            reason: "link cannot be empty".to_owned(),
        });
    }

    let field = format!("sidebar entry {path}");
    if link.starts_with("//") {
        return Err(SiteError::url(
            &field,
            link,
            "protocol-relative URLs are not supported",
        ));
    }
    if link.starts_with('/') {
        return Ok(LinkTarget::Internal(link.to_owned()));
    }

    let url = parse_absolute_url(link, &field)?;
    Ok(LinkTarget::External {
        url,
        raw: link.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn nested_chain(levels: usize) -> Vec<RawNavEntry> {
        let mut entry = RawNavEntry::link("Leaf", "/leaf/");
        for level in (1..=levels).rev() {
            entry = RawNavEntry::group(&format!("L{level}"), vec![entry]);
        }
        vec![entry]
    }

    fn labels<T>(entries: &[NavEntry<T>]) -> Vec<&str> {
        entries.iter().map(NavEntry::label).collect()
    }

    #[test]
    fn test_build_link_and_group() {
        let raw = vec![
            RawNavEntry::link("Home", "/"),
            RawNavEntry::group(
                "Guides",
                vec![RawNavEntry::slug("Meta-Tools", "guides/meta-tools")],
            ),
        ];

        let built = build_tree(&raw, 6).unwrap();

        assert_eq!(
            built.tree.entries(),
            &[
                NavEntry::Link {
                    label: "Home".to_owned(),
                    target: LinkTarget::Internal("/".to_owned()),
                },
                NavEntry::Group {
                    label: "Guides".to_owned(),
                    collapsed: false,
                    children: vec![NavEntry::Link {
                        label: "Meta-Tools".to_owned(),
                        target: LinkTarget::Content(
                            ContentRef::parse("guides/meta-tools").unwrap()
                        ),
                    }],
                },
            ]
        );
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let raw = vec![
            RawNavEntry::link("Zeta", "/z/"),
            RawNavEntry::link("Alpha", "/a/"),
            RawNavEntry::group(
                "Middle",
                vec![
                    RawNavEntry::slug("Second", "b"),
                    RawNavEntry::slug("First", "a"),
                ],
            ),
        ];

        let tree = build_tree(&raw, 6).unwrap().tree;

        assert_eq!(labels(tree.entries()), vec!["Zeta", "Alpha", "Middle"]);
        assert_eq!(labels(tree.entries()[2].children()), vec!["Second", "First"]);
    }

    #[test]
    fn test_empty_group_rejected() {
        let raw = vec![RawNavEntry::group("Guides", Vec::new())];
        let err = build_tree(&raw, 6).unwrap_err();
        assert_eq!(
            err,
            SiteError::EmptyGroup {
                path: LabelPath::from(["Guides"])
            }
        );
    }

    #[test]
    fn test_label_only_entry_is_empty_group() {
        let raw = vec![RawNavEntry {
            label: "Orphan".to_owned(),
            ..RawNavEntry::default()
        }];
        assert_eq!(build_tree(&raw, 6).unwrap_err().kind(), ErrorKind::EmptyGroup);
    }

    #[test]
    fn test_nested_empty_group_reports_full_path() {
        let raw = vec![RawNavEntry::group(
            "Reference",
            vec![
                RawNavEntry::slug("API", "reference/api"),
                RawNavEntry::group("Internals", Vec::new()),
            ],
        )];
        let err = build_tree(&raw, 6).unwrap_err();
        assert_eq!(
            err,
            SiteError::EmptyGroup {
                path: LabelPath::from(["Reference", "Internals"])
            }
        );
    }

    #[test]
    fn test_depth_within_limit() {
        for n in 1..=4 {
            let tree = build_tree(&nested_chain(n), 4).unwrap().tree;
            assert_eq!(tree.depth(), n);
        }
    }

    #[test]
    fn test_depth_exceeded() {
        let err = build_tree(&nested_chain(4), 3).unwrap_err();
        assert_eq!(
            err,
            SiteError::MaxDepthExceeded {
                path: LabelPath::from(["L1", "L2", "L3", "L4"]),
                max_depth: 3,
            }
        );
    }

    #[test]
    fn test_flat_links_need_no_depth() {
        let raw = vec![RawNavEntry::link("Home", "/")];
        assert!(build_tree(&raw, 1).is_ok());
    }

    #[test]
    fn test_empty_label_rejected() {
        let raw = vec![RawNavEntry::link("  ", "/")];
        assert_eq!(build_tree(&raw, 6).unwrap_err().kind(), ErrorKind::InvalidEntry);
    }

    #[test]
    fn test_link_and_slug_together_rejected() {
        let raw = vec![RawNavEntry {
            slug: Some("guides".to_owned()),
            ..RawNavEntry::link("Both", "/guides/")
        }];
        let err = build_tree(&raw, 6).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_collapsed_on_link_rejected() {
        let raw = vec![RawNavEntry {
            collapsed: Some(true),
            ..RawNavEntry::slug("Page", "page")
        }];
        assert_eq!(build_tree(&raw, 6).unwrap_err().kind(), ErrorKind::InvalidEntry);
    }

    #[test]
    fn test_collapsed_group_kept() {
        let raw = vec![RawNavEntry {
            collapsed: Some(true),
            ..RawNavEntry::group("Ref", vec![RawNavEntry::slug("API", "api")])
        }];
        let tree = build_tree(&raw, 6).unwrap().tree;
        assert!(matches!(
            tree.entries()[0],
            NavEntry::Group {
                collapsed: true,
                ..
            }
        ));
    }

    #[test]
    fn test_link_classification() {
        let raw = vec![
            RawNavEntry::link("Internal", "/guides/"),
            RawNavEntry::link("External", "https://modelcontextprotocol.io/"),
        ];
        let tree = build_tree(&raw, 6).unwrap().tree;
        let targets: Vec<_> = tree.links().into_iter().map(|(_, t)| t.clone()).collect();

        assert_eq!(targets[0], LinkTarget::Internal("/guides/".to_owned()));
        assert!(matches!(
            &targets[1],
            LinkTarget::External { url, raw }
                if url.host_str() == Some("modelcontextprotocol.io")
                    && raw == "https://modelcontextprotocol.io/"
        ));
    }

    #[test]
    fn test_external_link_keeps_written_form() {
        let raw = vec![RawNavEntry::link("Upstream", "  https://Example.COM/a/../b c  ")];
        let tree = build_tree(&raw, 6).unwrap().tree;

        let links = tree.links();
        let LinkTarget::External { url, raw } = links[0].1 else {
            panic!("expected external link");
        };
        assert_eq!(raw, "https://Example.COM/a/../b c");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_target_with_items_rejected() {
        let raw = vec![RawNavEntry {
            slug: Some("reference".to_owned()),
            ..RawNavEntry::group("Reference", vec![RawNavEntry::slug("API", "api")])
        }];
        let err = build_tree(&raw, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEntry);
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_relative_link_rejected() {
        let raw = vec![RawNavEntry::group(
            "Guides",
            vec![RawNavEntry::link("Broken", "guides/security")],
        )];
        let err = build_tree(&raw, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
        assert!(err.to_string().contains("Guides > Broken"));
    }

    #[test]
    fn test_protocol_relative_link_rejected() {
        let raw = vec![RawNavEntry::link("CDN", "//cdn.example.com/x")];
        assert_eq!(build_tree(&raw, 6).unwrap_err().kind(), ErrorKind::InvalidUrl);
    }

    #[test]
    fn test_duplicate_slug_is_warning() {
        let raw = vec![
            RawNavEntry::slug("Security", "guides/security"),
            RawNavEntry::group(
                "Guides",
                vec![RawNavEntry::slug("Threats", "guides/security#threats")],
            ),
        ];

        let built = build_tree(&raw, 6).unwrap();

        assert_eq!(
            built.warnings,
            vec![NavWarning::DuplicateSlug {
                slug: "guides/security".to_owned(),
                first: LabelPath::from(["Security"]),
                duplicate: LabelPath::from(["Guides", "Threats"]),
            }]
        );
        assert_eq!(built.tree.link_count(), 2);
    }

    #[test]
    fn test_duplicate_sibling_label_is_warning() {
        let raw = vec![
            RawNavEntry::link("Docs", "/a/"),
            RawNavEntry::link("Docs", "/b/"),
        ];

        let built = build_tree(&raw, 6).unwrap();

        assert_eq!(
            built.warnings,
            vec![NavWarning::DuplicateSiblingLabel {
                label: "Docs".to_owned(),
                parent: LabelPath::default(),
            }]
        );
        assert_eq!(built.tree.len(), 2);
    }

    #[test]
    fn test_content_ref_parse() {
        let r = ContentRef::parse("/guides/security/#threat-model").unwrap();
        assert_eq!(r.slug(), "guides/security");
        assert_eq!(r.anchor(), Some("threat-model"));
        assert_eq!(r.to_string(), "guides/security#threat-model");

        assert_eq!(ContentRef::parse("faq#").unwrap().anchor(), None);
        assert!(ContentRef::parse("/").is_none());
        assert!(ContentRef::parse("#top").is_none());
    }

    #[test]
    fn test_empty_slug_rejected() {
        let raw = vec![RawNavEntry::slug("Nothing", " / ")];
        assert_eq!(build_tree(&raw, 6).unwrap_err().kind(), ErrorKind::InvalidEntry);
    }

    #[test]
    fn test_links_in_document_order() {
        let raw = vec![
            RawNavEntry::group(
                "A",
                vec![
                    RawNavEntry::slug("A1", "a1"),
                    RawNavEntry::group("B", vec![RawNavEntry::slug("B1", "b1")]),
                    RawNavEntry::slug("A2", "a2"),
                ],
            ),
            RawNavEntry::slug("C", "c"),
        ];

        let tree = build_tree(&raw, 6).unwrap().tree;
        let paths: Vec<String> = tree.links().iter().map(|(p, _)| p.to_string()).collect();

        assert_eq!(paths, vec!["A > A1", "A > B > B1", "A > A2", "C"]);
    }

    #[test]
    fn test_label_path_display() {
        assert_eq!(LabelPath::default().to_string(), "<root>");
        assert_eq!(LabelPath::from(["Guides", "Meta-Tools"]).to_string(), "Guides > Meta-Tools");
    }

    #[test]
    fn test_label_path_child() {
        let root = LabelPath::default();
        let path = root.child("Guides").child("Security");

        assert!(root.is_root());
        assert!(!path.is_root());
        assert_eq!(path.labels(), &["Guides".to_owned(), "Security".to_owned()]);
    }

    #[test]
    fn test_entry_accessors() {
        let raw = vec![RawNavEntry::group(
            "Guides",
            vec![RawNavEntry::link("Upstream", "/upstream/")],
        )];

        let tree = build_tree(&raw, 6).unwrap().tree;
        let group = &tree.entries()[0];

        assert_eq!(group.target(), None);
        assert_eq!(labels(group.children()), vec!["Upstream"]);
        assert_eq!(
            group.children()[0].target(),
            Some(&LinkTarget::Internal("/upstream/".to_owned()))
        );
        assert!(group.children()[0].children().is_empty());
    }
}
