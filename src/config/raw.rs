//! Raw, unvalidated configuration documents.
//!
//! Every field is optional: a revision may declare only the fields it
//! changes, and the resolver fills the rest from older revisions.
//! Besides the snake_case keys, the camelCase names common in doc-site
//! tool configs are accepted (`themeConfig`, `socialLinks`, `text`, ...).
//!
//! Build toggles may also sit where VitePress keeps them:
//!
//! | Build option         | VitePress location              |
//! |----------------------|---------------------------------|
//! | `watch_polling`      | `vite.server.watch.usePolling`  |
//! | `watch_interval_ms`  | `vite.server.watch.interval`    |
//! | `line_numbers`       | `markdown.lineNumbers`          |
//! | `math`               | `markdown.math`                 |
//!
//! Within one document the `build` section wins over those locations.

use super::SiteDescriptor;
use super::section::{FooterConfig, NavItem, SidebarEntry, SidebarGroup, SocialLink};
use super::types::LoadError;
use serde::Deserialize;

/// One configuration revision.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub base: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "themeConfig")]
    pub theme: RawTheme,
    #[serde(alias = "buildOptions")]
    pub build: RawBuildOptions,
    pub vite: RawVite,
    pub markdown: RawMarkdown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTheme {
    #[serde(alias = "logoPath")]
    pub logo: Option<String>,
    pub nav: Option<Vec<RawNavItem>>,
    pub sidebar: Option<Vec<RawSidebarGroup>>,
    #[serde(alias = "socialLinks")]
    pub social_links: Option<Vec<RawSocialLink>>,
    pub footer: Option<RawFooter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    #[serde(alias = "text")]
    pub label: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSidebarGroup {
    #[serde(alias = "text")]
    pub label: Option<String>,
    pub items: Option<Vec<RawSidebarEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSidebarEntry {
    #[serde(alias = "text")]
    pub label: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    #[serde(alias = "icon")]
    pub kind: Option<String>,
    #[serde(alias = "link")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFooter {
    pub message: Option<String>,
    pub copyright: Option<String>,
}

/// Build toggles. The interval is signed so a negative value reaches the
/// resolver as an invalid build option instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawBuildOptions {
    #[serde(alias = "watchPolling", alias = "watchPollingEnabled")]
    pub watch_polling: Option<bool>,
    #[serde(alias = "watchIntervalMs")]
    pub watch_interval_ms: Option<i64>,
    #[serde(alias = "lineNumbers", alias = "lineNumbersInCode")]
    pub line_numbers: Option<bool>,
    #[serde(alias = "mathRenderingEnabled")]
    pub math: Option<bool>,
}

/// `vite` section: only the dev-server watch settings are read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawVite {
    pub server: RawViteServer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawViteServer {
    pub watch: RawViteWatch,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawViteWatch {
    #[serde(alias = "usePolling")]
    pub use_polling: Option<bool>,
    pub interval: Option<i64>,
}

/// `markdown` section: rendering toggles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMarkdown {
    #[serde(alias = "lineNumbers")]
    pub line_numbers: Option<bool>,
    pub math: Option<bool>,
}

// ============================================================================
// Parsing
// ============================================================================

impl RawConfig {
    /// Parse a TOML document, collecting any unknown fields.
    pub fn from_toml_str(content: &str) -> Result<(Self, Vec<String>), LoadError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse a JSON document, collecting any unknown fields.
    pub fn from_json_str(content: &str) -> Result<(Self, Vec<String>), LoadError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }
}

// ============================================================================
// Build option lookup
// ============================================================================

impl RawConfig {
    /// Watch polling from `build`, else `vite.server.watch.usePolling`.
    pub fn watch_polling(&self) -> Option<&bool> {
        let watch = &self.vite.server.watch;
        self.build.watch_polling.as_ref().or(watch.use_polling.as_ref())
    }

    /// Poll interval from `build`, else `vite.server.watch.interval`.
    pub fn watch_interval_ms(&self) -> Option<&i64> {
        let watch = &self.vite.server.watch;
        self.build.watch_interval_ms.as_ref().or(watch.interval.as_ref())
    }

    /// Code line numbers from `build`, else `markdown.lineNumbers`.
    pub fn line_numbers(&self) -> Option<&bool> {
        self.build.line_numbers.as_ref().or(self.markdown.line_numbers.as_ref())
    }

    /// Math rendering from `build`, else `markdown.math`.
    pub fn math(&self) -> Option<&bool> {
        self.build.math.as_ref().or(self.markdown.math.as_ref())
    }
}

// ============================================================================
// Descriptor -> RawConfig
// ============================================================================

impl From<&SiteDescriptor> for RawConfig {
    /// Lossless inverse of resolution: resolving the result yields the
    /// same descriptor again.
    fn from(site: &SiteDescriptor) -> Self {
        let theme = &site.theme;
        let build = &site.build_options;
        Self {
            base: Some(site.base.clone()),
            title: Some(site.title.clone()),
            description: Some(site.description.clone()),
            theme: RawTheme {
                logo: theme.logo_path.clone(),
                nav: Some(theme.nav.iter().map(RawNavItem::from).collect()),
                sidebar: Some(theme.sidebar.iter().map(RawSidebarGroup::from).collect()),
                social_links: Some(theme.social_links.iter().map(RawSocialLink::from).collect()),
                footer: theme.footer.as_ref().map(RawFooter::from),
            },
            build: RawBuildOptions {
                watch_polling: Some(build.watch_polling_enabled),
                watch_interval_ms: Some(i64::try_from(build.watch_interval_ms).unwrap_or(i64::MAX)),
                line_numbers: Some(build.line_numbers_in_code),
                math: Some(build.math_rendering_enabled),
            },
            ..Default::default()
        }
    }
}

impl From<SiteDescriptor> for RawConfig {
    fn from(site: SiteDescriptor) -> Self {
        Self::from(&site)
    }
}

impl From<&NavItem> for RawNavItem {
    fn from(item: &NavItem) -> Self {
        Self {
            label: Some(item.label.clone()),
            link: Some(item.link.clone()),
        }
    }
}

impl From<&SidebarGroup> for RawSidebarGroup {
    fn from(group: &SidebarGroup) -> Self {
        Self {
            label: Some(group.label.clone()),
            items: Some(group.items.iter().map(RawSidebarEntry::from).collect()),
        }
    }
}

impl From<&SidebarEntry> for RawSidebarEntry {
    fn from(entry: &SidebarEntry) -> Self {
        Self {
            label: Some(entry.label.clone()),
            link: Some(entry.link.clone()),
        }
    }
}

impl From<&SocialLink> for RawSocialLink {
    fn from(link: &SocialLink) -> Self {
        Self {
            kind: Some(link.kind.as_str().to_string()),
            url: Some(link.url.clone()),
        }
    }
}

impl From<&FooterConfig> for RawFooter {
    fn from(footer: &FooterConfig) -> Self {
        Self {
            message: Some(footer.message.clone()),
            copyright: Some(footer.copyright.clone()),
        }
    }
}
