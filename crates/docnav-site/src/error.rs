//! Site build error types.

use std::fmt;

use crate::navigation::LabelPath;
use crate::resolve::UnresolvedReference;

/// Error raised while validating identity or building the sidebar.
///
/// Every variant is a configuration error: nothing here is transient, and
/// each carries the field, label path or slug needed to fix the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// Missing or malformed identity field.
    #[error("Invalid site identity: {field} {reason}")]
    InvalidIdentity {
        /// Config field (e.g. "title", "social[1].icon").
        field: String,
        /// What is wrong with it.
        reason: String,
    },
    /// URL that is not absolute or uses the wrong scheme.
    #[error("Invalid URL in {field}: {value:?} ({reason})")]
    InvalidUrl {
        /// Config field or sidebar location.
        field: String,
        /// Offending value.
        value: String,
        /// Parser or policy message.
        reason: String,
    },
    /// Two social links share a platform tag.
    #[error("Duplicate social platform: {0}")]
    DuplicateSocialPlatform(String),
    /// Sidebar entry with a shape that is neither a link nor a group.
    #[error("Invalid sidebar entry {path}: {reason}")]
    InvalidEntry {
        /// Labels from the root to the entry.
        path: LabelPath,
        /// What is wrong with it.
        reason: String,
    },
    /// Group without items.
    #[error("Sidebar group {path} has no items")]
    EmptyGroup {
        /// Labels from the root to the group.
        path: LabelPath,
    },
    /// Group nested deeper than allowed.
    #[error("Sidebar group {path} exceeds the maximum depth of {max_depth}")]
    MaxDepthExceeded {
        /// Labels from the root to the group.
        path: LabelPath,
        /// Configured limit.
        max_depth: usize,
    },
    /// Slugs missing from the content catalog, in document order.
    #[error("{} unresolved sidebar reference(s): {}", .0.len(), DisplayList(.0))]
    UnresolvedReferences(Vec<UnresolvedReference>),
}

/// Fieldless error category, for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidIdentity,
    InvalidUrl,
    DuplicateSocialPlatform,
    InvalidEntry,
    EmptyGroup,
    MaxDepthExceeded,
    UnresolvedReference,
}

impl SiteError {
    /// Error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentity { .. } => ErrorKind::InvalidIdentity,
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::DuplicateSocialPlatform(_) => ErrorKind::DuplicateSocialPlatform,
            Self::InvalidEntry { .. } => ErrorKind::InvalidEntry,
            Self::EmptyGroup { .. } => ErrorKind::EmptyGroup,
            Self::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
            Self::UnresolvedReferences(_) => ErrorKind::UnresolvedReference,
        }
    }

    pub(crate) fn identity(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn url(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field: field.to_owned(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}

struct DisplayList<'a>(&'a [UnresolvedReference]);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
