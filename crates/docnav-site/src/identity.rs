//! Site identity resolution.
//!
//! Turns the raw `title`/`description`/`site`/`base`/`social` fields into a
//! validated [`SiteIdentity`]. The canonical URL and base path are also used
//! to compute hrefs and absolute links for resolved sidebar entries.

use std::collections::HashSet;
use std::fmt;

use docnav_config::{RawIdentity, RawSocialLink};
use serde::de::IntoDeserializer;
use serde::de::value::StrDeserializer;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SiteError;

/// Validated site identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteIdentity {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Canonical `https` site URL.
    pub site: Url,
    /// Base path the site is served under.
    pub base: BasePath,
    /// Social links in declaration order, unique by platform.
    pub social: Vec<SocialLink>,
}

impl SiteIdentity {
    /// Site-relative href for a content path, prefixed with the base path.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        self.base.join(path)
    }

    /// Absolute URL for a content path.
    ///
    /// Any path on the canonical URL itself is replaced by the base path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        let href = self.href(path);
        let (path, fragment) = match href.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (href.as_str(), None),
        };

        let mut url = self.site.clone();
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(fragment);
        url.into()
    }
}

/// Normalized base path: starts with `/`, no trailing `/` unless root.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    /// The root base path, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Parse and normalize a base path. `None` means root.
    pub fn parse(raw: Option<&str>) -> Result<Self, SiteError> {
        let Some(raw) = raw else {
            return Ok(Self::root());
        };
        let raw = raw.trim();

        if !raw.starts_with('/') {
            return Err(SiteError::identity("base", "must start with /"));
        }

        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        for segment in trimmed.split('/').skip(1) {
            match segment {
                "" => return Err(SiteError::identity("base", "cannot contain empty segments")),
                "." | ".." => {
                    return Err(SiteError::identity(
                        "base",
                        "cannot contain . or .. segments",
                    ));
                }
                _ => {}
            }
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `/` base.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Prefix a site path with this base.
    ///
    /// `/portainer-mcp` joined with `/guides/` gives `/portainer-mcp/guides/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.is_root() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.0)
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known social platform tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Gitlab,
    Bitbucket,
    Codeberg,
    Discord,
    Slack,
    Mastodon,
    Bluesky,
    #[serde(rename = "x.com")]
    XCom,
    Twitter,
    Linkedin,
    Youtube,
    Twitch,
    Telegram,
    Reddit,
    Discourse,
    Matrix,
    StackOverflow,
    Rss,
    Email,
}

impl SocialPlatform {
    /// Canonical tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Codeberg => "codeberg",
            Self::Discord => "discord",
            Self::Slack => "slack",
            Self::Mastodon => "mastodon",
            Self::Bluesky => "bluesky",
            Self::XCom => "x.com",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Twitch => "twitch",
            Self::Telegram => "telegram",
            Self::Reddit => "reddit",
            Self::Discourse => "discourse",
            Self::Matrix => "matrix",
            Self::StackOverflow => "stackoverflow",
            Self::Rss => "rss",
            Self::Email => "email",
        }
    }

    /// Look up a tag, ignoring ASCII case (`stackOverflow` is accepted).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let de: StrDeserializer<'_, serde::de::value::Error> = tag.as_str().into_deserializer();
        Self::deserialize(de).ok()
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated social link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform tag.
    pub platform: SocialPlatform,
    /// Accessible label.
    pub label: String,
    /// Absolute link target, as written.
    pub href: String,
}

/// Validate and normalize raw identity fields.
///
/// # Errors
///
/// - [`SiteError::InvalidIdentity`] for missing or empty required fields,
///   a malformed base path, or an unknown social platform
/// - [`SiteError::InvalidUrl`] for a bad canonical URL or social href
/// - [`SiteError::DuplicateSocialPlatform`] when two social links share a platform
pub fn resolve_identity(raw: &RawIdentity) -> Result<SiteIdentity, SiteError> {
    let title = required_text(raw.title.as_deref(), "title")?;
    let description = required_text(raw.description.as_deref(), "description")?;

    let site_raw = raw
        .site
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SiteError::identity("site", "is required"))?;
    let site = parse_absolute_url(site_raw, "site")?;
    if site.scheme() != "https" {
        return Err(SiteError::url("site", site_raw, "must use https"));
    }

    let base = BasePath::parse(raw.base.as_deref())?;

    let mut seen = HashSet::new();
    let mut social = Vec::with_capacity(raw.social.len());
    for (idx, link) in raw.social.iter().enumerate() {
        let resolved = resolve_social(link, idx)?;
        if !seen.insert(resolved.platform) {
            return Err(SiteError::DuplicateSocialPlatform(
                resolved.platform.as_str().to_owned(),
            ));
        }
        social.push(resolved);
    }

    Ok(SiteIdentity {
        title,
        description,
        site,
        base,
        social,
    })
}

fn resolve_social(raw: &RawSocialLink, idx: usize) -> Result<SocialLink, SiteError> {
    let platform = SocialPlatform::from_tag(&raw.icon).ok_or_else(|| {
        SiteError::identity(
            &format!("social[{idx}].icon"),
            format!("has unknown platform {:?}", raw.icon),
        )
    })?;

    let label = raw.label.trim();
    if label.is_empty() {
        return Err(SiteError::identity(
            &format!("social[{idx}].label"),
            "cannot be empty",
        ));
    }

    let href = raw.href.trim();
    parse_absolute_url(href, &format!("social[{idx}].href"))?;

    Ok(SocialLink {
        platform,
        label: label.to_owned(),
        href: href.to_owned(),
    })
}

fn required_text(value: Option<&str>, field: &str) -> Result<String, SiteError> {
    match value.map(str::trim) {
        None => Err(SiteError::identity(field, "is required")),
        Some("") => Err(SiteError::identity(field, "cannot be empty")),
        Some(text) => Ok(text.to_owned()),
    }
}

/// Parse a URL that must be absolute.
///
/// `mailto:` is the only scheme allowed without a hierarchical path.
pub(crate) fn parse_absolute_url(value: &str, field: &str) -> Result<Url, SiteError> {
    let url = Url::parse(value).map_err(|e| SiteError::url(field, value, e.to_string()))?;
    if url.cannot_be_a_base() && url.scheme() != "mailto" {
        return Err(SiteError::url(field, value, "not an absolute URL"));
    }
    Ok(url)
}
