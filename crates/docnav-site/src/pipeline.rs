//! Site build pipeline.
//!
//! Runs identity resolution, tree building and reference resolution in
//! order over one immutable [`Config`] and produces the [`SiteManifest`]
//! consumed by the rendering host.
//!
//! ```text
//! Raw -> IdentityValidated -> TreeBuilt -> ReferencesResolved
//!   \__________________\______________\___> Failed
//! ```
//!
//! A failed build is never retried; the configuration has to be fixed and
//! the build started again from `Raw`.

use std::fmt;

use docnav_config::Config;
use serde::Serialize;

use crate::catalog::ContentCatalog;
use crate::error::SiteError;
use crate::identity::{SiteIdentity, resolve_identity};
use crate::navigation::{NavWarning, NavigationTree, TreeBuild, build_tree};
use crate::resolve::{ResolvedLink, resolve_references};

/// Build state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStage {
    Raw,
    IdentityValidated,
    TreeBuilt,
    ReferencesResolved,
    Failed,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Raw => "raw",
            Self::IdentityValidated => "identity validated",
            Self::TreeBuilt => "tree built",
            Self::ReferencesResolved => "references resolved",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Build error with the last stage that completed.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct BuildFailure {
    /// Last stage reached before the failure.
    pub stage: BuildStage,
    /// What went wrong.
    #[source]
    pub error: SiteError,
}

impl BuildFailure {
    /// State of the build that produced this failure, always [`BuildStage::Failed`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn state(&self) -> BuildStage {
        BuildStage::Failed
    }
}

/// "Edit this page" link template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLink {
    /// Prefix joined with a page's source path.
    pub base_url: String,
}

impl EditLink {
    /// Edit URL for a source path relative to the content directory.
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        let source = source_path.trim_start_matches('/');
        if self.base_url.ends_with('/') {
            format!("{}{source}", self.base_url)
        } else {
            format!("{}/{source}", self.base_url)
        }
    }
}

/// Everything the rendering host needs for one build.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    /// Validated site identity.
    pub identity: SiteIdentity,
    /// Resolved sidebar.
    pub navigation: NavigationTree<ResolvedLink>,
    /// Edit link template, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    /// Stylesheet references.
    pub custom_css: Vec<String>,
    /// Show last-updated dates.
    pub last_updated: bool,
    /// Non-fatal sidebar warnings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<NavWarning>,
}

/// Run the full pipeline for one configuration snapshot.
///
/// # Errors
///
/// Returns [`BuildFailure`] with the first failing stage's error. Reference
/// resolution reports every unresolved slug at once.
pub fn build_site(
    config: &Config,
    catalog: &dyn ContentCatalog,
) -> Result<SiteManifest, BuildFailure> {
    let mut run = BuildRun {
        stage: BuildStage::Raw,
    };

    let identity = run.advance(BuildStage::IdentityValidated, || {
        resolve_identity(&config.identity)
    })?;
    let TreeBuild { tree, warnings } = run.advance(BuildStage::TreeBuilt, || {
        build_tree(&config.sidebar, config.build_resolved.max_depth)
    })?;
    let navigation = run.advance(BuildStage::ReferencesResolved, || {
        resolve_references(&tree, catalog)
    })?;

    tracing::debug!(
        links = navigation.link_count(),
        warnings = warnings.len(),
        "site build complete"
    );

    Ok(SiteManifest {
        identity,
        navigation,
        edit_link: config.edit_link.as_ref().map(|e| EditLink {
            base_url: e.base_url.clone(),
        }),
        custom_css: config.custom_css.clone(),
        last_updated: config.last_updated,
        warnings,
    })
}

struct BuildRun {
    stage: BuildStage,
}

impl BuildRun {
    fn advance<T>(
        &mut self,
        next: BuildStage,
        step: impl FnOnce() -> Result<T, SiteError>,
    ) -> Result<T, BuildFailure> {
        match step() {
            Ok(value) => {
                tracing::debug!(from = %self.stage, to = %next, "build stage complete");
                self.stage = next;
                Ok(value)
            }
            Err(error) => {
                tracing::debug!(stage = %self.stage, kind = ?error.kind(), "build failed");
                Err(BuildFailure {
                    stage: self.stage,
                    error,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::error::ErrorKind;
    use docnav_config::{EditLinkConfig, RawIdentity, RawNavEntry};
    use std::path::Path;

    fn config() -> Config {
        let mut config = Config::from_toml_str("", Path::new("/p")).unwrap();
        config.identity = RawIdentity {
            title: Some("Docs".to_owned()),
            description: Some("Handbook".to_owned()),
            site: Some("https://docs.example.com".to_owned()),
            base: None,
            social: Vec::new(),
        };
        config.sidebar = vec![
            RawNavEntry::link("Home", "/"),
            RawNavEntry::group("Guides", vec![RawNavEntry::slug("Start", "start")]),
        ];
        config
    }

    #[test]
    fn test_build_site_success() {
        let catalog = MemoryCatalog::new().with_entry("start", "/start/");
        let manifest = build_site(&config(), &catalog).unwrap();

        assert_eq!(manifest.identity.title, "Docs");
        assert_eq!(manifest.navigation.link_count(), 2);
        assert!(manifest.warnings.is_empty());
        assert!(manifest.edit_link.is_none());
    }

    #[test]
    fn test_identity_failure_stops_at_raw() {
        let mut config = config();
        config.identity.title = None;

        let failure = build_site(&config, &MemoryCatalog::new()).unwrap_err();

        assert_eq!(failure.stage, BuildStage::Raw);
        assert_eq!(failure.state(), BuildStage::Failed);
        assert_eq!(failure.error.kind(), ErrorKind::InvalidIdentity);
    }

    #[test]
    fn test_tree_failure_stops_after_identity() {
        let mut config = config();
        config.sidebar.push(RawNavEntry::group("Empty", Vec::new()));

        let failure = build_site(&config, &MemoryCatalog::new()).unwrap_err();

        assert_eq!(failure.stage, BuildStage::IdentityValidated);
        assert_eq!(failure.error.kind(), ErrorKind::EmptyGroup);
    }

    #[test]
    fn test_resolution_failure_stops_after_tree() {
        let failure = build_site(&config(), &MemoryCatalog::new()).unwrap_err();

        assert_eq!(failure.stage, BuildStage::TreeBuilt);
        assert_eq!(failure.state(), BuildStage::Failed);
        assert_eq!(failure.error.kind(), ErrorKind::UnresolvedReference);
    }

    #[test]
    fn test_pass_through_options() {
        let mut config = config();
        config.custom_css = vec!["./src/styles/custom.css".to_owned()];
        config.last_updated = true;
        config.edit_link = Some(EditLinkConfig {
            base_url: "https://github.com/acme/docs/edit/main/docs/".to_owned(),
        });
        let catalog = MemoryCatalog::new().with_entry("start", "/start/");

        let manifest = build_site(&config, &catalog).unwrap();

        assert_eq!(manifest.custom_css, vec!["./src/styles/custom.css".to_owned()]);
        assert!(manifest.last_updated);
        assert_eq!(
            manifest.edit_link.unwrap().url_for("guides/start.md"),
            "https://github.com/acme/docs/edit/main/docs/guides/start.md"
        );
    }

    #[test]
    fn test_edit_link_adds_separator() {
        let link = EditLink {
            base_url: "https://git.example.com/edit".to_owned(),
        };
        assert_eq!(link.url_for("/index.md"), "https://git.example.com/edit/index.md");
    }

    #[test]
    fn test_manifest_serialization() {
        let catalog = MemoryCatalog::new().with_entry("start", "/start/");
        let manifest = build_site(&config(), &catalog).unwrap();

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["identity"]["title"], "Docs");
        assert_eq!(json["identity"]["base"], "/");
        assert_eq!(json["navigation"][1]["label"], "Guides");
        assert_eq!(json["lastUpdated"], false);
        assert!(json.get("editLink").is_none());
        assert!(json.get("warnings").is_none());
    }
}
