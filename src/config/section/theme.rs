//! `[theme]` section of the resolved descriptor.
//!
//! Contains the logo, top navigation bar, sidebar tree, social links,
//! and footer.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/icon.png"
//! nav = [{ label = "Home", link = "/" }]
//!
//! [[theme.sidebar]]
//! label = "Started"
//! items = [{ label = "Intro", link = "/started" }]
//!
//! [[theme.social_links]]
//! kind = "github"
//! url = "https://github.com/plos-clan/OpenEX"
//!
//! [theme.footer]
//! message = "Released under the CC BY-SA 4.0 license."
//! copyright = "Copyright © 2023-2026"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme settings consumed by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Logo image URI.
    #[serde(rename = "logo", skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,

    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups, in display order.
    pub sidebar: Vec<SidebarGroup>,

    /// Social links shown in the header.
    pub social_links: Vec<SocialLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl ThemeConfig {
    /// Iterate every sidebar entry with its group and entry index.
    pub fn sidebar_entries(&self) -> impl Iterator<Item = (usize, usize, &SidebarEntry)> {
        self.sidebar
            .iter()
            .enumerate()
            .flat_map(|(g, group)| group.items.iter().enumerate().map(move |(i, e)| (g, i, e)))
    }
}

/// Top navigation bar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub link: String,
}

/// Titled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub label: String,
    pub items: Vec<SidebarEntry>,
}

/// Sidebar link to a content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub label: String,
    pub link: String,
}

/// Social platform link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

/// Footer text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FooterConfig {
    /// Footer message, may contain inline HTML.
    pub message: String,
    pub copyright: String,
}

// ============================================================================
// SocialKind
// ============================================================================

/// Social platform identifier.
///
/// Unknown identifiers are kept verbatim (lowercased) so themes with
/// their own icon sets still receive them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialKind {
    Github,
    Gitlab,
    Discord,
    Twitter,
    X,
    Mastodon,
    Linkedin,
    Youtube,
    Npm,
    Slack,
    Facebook,
    Instagram,
    Other(String),
}

impl SocialKind {
    /// Parse a platform identifier (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "github" => Self::Github,
            "gitlab" => Self::Gitlab,
            "discord" => Self::Discord,
            "twitter" => Self::Twitter,
            "x" => Self::X,
            "mastodon" => Self::Mastodon,
            "linkedin" => Self::Linkedin,
            "youtube" => Self::Youtube,
            "npm" => Self::Npm,
            "slack" => Self::Slack,
            "facebook" => Self::Facebook,
            "instagram" => Self::Instagram,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Discord => "discord",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Mastodon => "mastodon",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Other(name) => name,
        }
    }

    /// Returns true for identifiers outside the known platform set.
    #[inline]
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for SocialKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<SocialKind> for String {
    fn from(kind: SocialKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SocialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
