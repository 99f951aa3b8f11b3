//! Site identity and sidebar navigation for docnav.
//!
//! This crate provides:
//! - [`resolve_identity`]: validated [`SiteIdentity`] from raw config fields
//! - [`build_tree`]: [`NavigationTree`] from raw sidebar entries
//! - [`resolve_references`]: slug lookup against a [`ContentCatalog`]
//! - [`build_site`]: the three stages above as one pipeline
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use docnav_config::Config;
//! use docnav_site::{MemoryCatalog, build_site};
//!
//! let config = Config::from_toml_str(
//!     r#"
//! title = "Docs"
//! description = "Handbook"
//! site = "https://docs.example.com"
//!
//! [[sidebar]]
//! label = "Guides"
//! items = [{ label = "Start", slug = "start" }]
//! "#,
//!     Path::new("."),
//! )?;
//! let catalog = MemoryCatalog::new().with_entry("start", "/start/");
//!
//! let manifest = build_site(&config, &catalog)?;
//! assert_eq!(manifest.navigation.link_count(), 1);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod identity;
mod navigation;
mod pipeline;
mod resolve;

pub use catalog::{ContentCatalog, MemoryCatalog};
pub use error::{ErrorKind, SiteError};
pub use identity::{BasePath, SiteIdentity, SocialLink, SocialPlatform, resolve_identity};
pub use navigation::{
    ContentRef, LabelPath, LinkTarget, NavEntry, NavWarning, NavigationTree, TreeBuild, build_tree,
};
pub use pipeline::{BuildFailure, BuildStage, EditLink, SiteManifest, build_site};
pub use resolve::{ResolvedLink, UnresolvedReference, resolve_references};
