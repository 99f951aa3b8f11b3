//! Reference resolution.
//!
//! Walks a built tree in document order and replaces every
//! [`LinkTarget`] with a [`ResolvedLink`]. Slugs are looked up in a
//! [`ContentCatalog`]; every missing slug is collected so a single pass
//! reports all broken references. Resolution is all-or-nothing.

use std::fmt;

use serde::Serialize;

use crate::catalog::ContentCatalog;
use crate::error::SiteError;
use crate::identity::BasePath;
use crate::navigation::{LabelPath, LinkTarget, NavEntry, NavigationTree};

/// Final link target handed to the rendering host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedLink {
    /// Site path relative to the base path, possibly with `#anchor`.
    Internal { path: String },
    /// Absolute URL.
    External { url: String },
}

impl ResolvedLink {
    /// Href as rendered: internal paths are prefixed with `base`.
    #[must_use]
    pub fn href(&self, base: &BasePath) -> String {
        match self {
            Self::Internal { path } => base.join(path),
            Self::External { url } => url.clone(),
        }
    }

    /// True for links leaving the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

/// Slug that the catalog does not know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Missing slug.
    pub slug: String,
    /// Labels from the root to the leaf that references it.
    pub path: LabelPath,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.slug, self.path)
    }
}

/// Resolve every link target in `tree`.
///
/// External URLs and internal paths pass through unchanged; content
/// references are looked up in `catalog`.
///
/// # Errors
///
/// Returns [`SiteError::UnresolvedReferences`] listing every slug the
/// catalog does not know, in document order. No partial tree is returned.
pub fn resolve_references(
    tree: &NavigationTree<LinkTarget>,
    catalog: &dyn ContentCatalog,
) -> Result<NavigationTree<ResolvedLink>, SiteError> {
    let mut resolver = Resolver {
        catalog,
        unresolved: Vec::new(),
    };
    let entries = resolver.resolve_entries(tree.entries(), &LabelPath::default());

    if !resolver.unresolved.is_empty() {
        tracing::debug!(
            count = resolver.unresolved.len(),
            "sidebar references unresolved"
        );
        return Err(SiteError::UnresolvedReferences(resolver.unresolved));
    }

    Ok(NavigationTree::new(entries))
}

struct Resolver<'a> {
    catalog: &'a dyn ContentCatalog,
    unresolved: Vec<UnresolvedReference>,
}

impl Resolver<'_> {
    fn resolve_entries(
        &mut self,
        entries: &[NavEntry<LinkTarget>],
        parent: &LabelPath,
    ) -> Vec<NavEntry<ResolvedLink>> {
        entries
            .iter()
            .filter_map(|entry| {
                let path = parent.child(entry.label());
                match entry {
                    NavEntry::Link { label, target } => {
                        self.resolve_target(target, path)
                            .map(|target| NavEntry::Link {
                                label: label.clone(),
                                target,
                            })
                    }
                    NavEntry::Group {
                        label,
                        collapsed,
                        children,
                    } => Some(NavEntry::Group {
                        label: label.clone(),
                        collapsed: *collapsed,
                        children: self.resolve_entries(children, &path),
                    }),
                }
            })
            .collect()
    }

    fn resolve_target(&mut self, target: &LinkTarget, path: LabelPath) -> Option<ResolvedLink> {
        match target {
            LinkTarget::Internal(p) => Some(ResolvedLink::Internal { path: p.clone() }),
            LinkTarget::External { raw, .. } => Some(ResolvedLink::External { url: raw.clone() }),
            LinkTarget::Content(content) => {
                let Some(resolved) = self.catalog.lookup(content.slug()) else {
                    self.unresolved.push(UnresolvedReference {
                        slug: content.slug().to_owned(),
                        path,
                    });
                    return None;
                };
                let path = match content.anchor() {
                    Some(anchor) => format!("{resolved}#{anchor}"),
                    None => resolved,
                };
                Some(ResolvedLink::Internal { path })
            }
        }
    }
}
