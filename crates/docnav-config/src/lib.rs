//! Configuration loading for docnav.
//!
//! Parses `docnav.toml` with serde and provides auto-discovery of the
//! config file in parent directories. The parsed values are *raw*: they
//! describe what the author wrote, and semantic validation of identity and
//! navigation happens later in `docnav-site`.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! URL-valued strings support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site`
//! - `base`
//! - `social[].href`
//! - `edit_link.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content directory used for slug lookups.
    pub content_dir: Option<PathBuf>,
    /// Override maximum group nesting depth.
    pub max_depth: Option<usize>,
    /// Override site base path.
    pub base: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Default content directory, relative to the config file.
const DEFAULT_CONTENT_DIR: &str = "src/content/docs";

/// Default maximum sidebar group nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity fields (`title`, `description`, `site`, `base`, `social`).
    #[serde(flatten)]
    pub identity: RawIdentity,
    /// Raw sidebar entries in declaration order.
    pub sidebar: Vec<RawNavEntry>,
    /// "Edit this page" link settings.
    #[serde(alias = "editLink")]
    pub edit_link: Option<EditLinkConfig>,
    /// Stylesheet references, passed through to the rendering host.
    #[serde(alias = "customCss")]
    pub custom_css: Vec<String>,
    /// Whether pages show a last-updated date.
    #[serde(alias = "lastUpdated")]
    pub last_updated: bool,
    /// Build settings (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site identity as written in the config file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawIdentity {
    /// Site title.
    pub title: Option<String>,
    /// Site description.
    pub description: Option<String>,
    /// Canonical site URL.
    pub site: Option<String>,
    /// Base path the site is served under.
    pub base: Option<String>,
    /// Social links in display order.
    pub social: Vec<RawSocialLink>,
}

/// Raw social link entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawSocialLink {
    /// Platform tag (e.g. "github").
    #[serde(alias = "platform")]
    pub icon: String,
    /// Accessible label.
    #[serde(default)]
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Raw sidebar entry.
///
/// The shape decides the meaning: `link` or `slug` make a leaf, `items`
/// makes a group. Shape checks happen when the navigation tree is built.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawNavEntry {
    /// Display label.
    pub label: String,
    /// Raw href: a site path (`/...`) or an absolute URL.
    pub link: Option<String>,
    /// Content identifier resolved against the content catalog.
    pub slug: Option<String>,
    /// Child entries of a group.
    pub items: Option<Vec<RawNavEntry>>,
    /// Whether a group starts collapsed.
    pub collapsed: Option<bool>,
}

impl RawNavEntry {
    /// Leaf pointing at a raw href.
    #[must_use]
    pub fn link(label: &str, link: &str) -> Self {
        Self {
            label: label.to_owned(),
            link: Some(link.to_owned()),
            ..Self::default()
        }
    }

    /// Leaf pointing at a content slug.
    #[must_use]
    pub fn slug(label: &str, slug: &str) -> Self {
        Self {
            label: label.to_owned(),
            slug: Some(slug.to_owned()),
            ..Self::default()
        }
    }

    /// Group containing `items`.
    #[must_use]
    pub fn group(label: &str, items: Vec<RawNavEntry>) -> Self {
        Self {
            label: label.to_owned(),
            items: Some(items),
            ..Self::default()
        }
    }
}

/// "Edit this page" link configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EditLinkConfig {
    /// URL prefix joined with a page's source path.
    #[serde(alias = "baseUrl")]
    pub base_url: String,
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    #[serde(alias = "contentDir")]
    content_dir: Option<String>,
    #[serde(alias = "maxDepth")]
    max_depth: Option<usize>,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding content files the slugs refer to.
    pub content_dir: PathBuf,
    /// Maximum sidebar group nesting depth.
    pub max_depth: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit_link.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_BRANCH`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.build_resolved.content_dir.clone_from(content_dir);
        }
        if let Some(max_depth) = settings.max_depth {
            self.build_resolved.max_depth = max_depth;
        }
        if let Some(base) = &settings.base {
            self.identity.base = Some(base.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            identity: RawIdentity::default(),
            sidebar: Vec::new(),
            edit_link: None,
            custom_css: Vec::new(),
            last_updated: false,
            build: BuildConfigRaw::default(),
            build_resolved: BuildConfig {
                content_dir: base.join(DEFAULT_CONTENT_DIR),
                max_depth: DEFAULT_MAX_DEPTH,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Only checks settings owned by the loader. Identity and sidebar
    /// content is validated when the site is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build_resolved.max_depth == 0 {
            return Err(ConfigError::Validation(
                "build.max_depth must be at least 1".to_owned(),
            ));
        }

        if let Some(idx) = self.custom_css.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "custom_css[{idx}] cannot be empty"
            )));
        }

        if let Some(edit_link) = &self.edit_link
            && edit_link.base_url.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "edit_link.base_url cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in URL-valued strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.identity.site, "site")?;
        expand::expand_opt(&mut self.identity.base, "base")?;

        for (idx, social) in self.identity.social.iter_mut().enumerate() {
            social.href = expand::expand_env(&social.href, &format!("social[{idx}].href"))?;
        }

        if let Some(ref mut edit_link) = self.edit_link {
            edit_link.base_url = expand::expand_env(&edit_link.base_url, "edit_link.base_url")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.build_resolved = BuildConfig {
            content_dir: config_dir.join(
                self.build
                    .content_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_CONTENT_DIR),
            ),
            max_depth: self.build.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        };
    }
}
