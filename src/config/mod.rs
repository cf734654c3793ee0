//! Site configuration: raw revisions in, one validated descriptor out.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw        # RawConfig (unvalidated revision, all fields optional)
//! ├── resolve    # ConfigResolver (merge + validate)
//! ├── section/   # Resolved sections
//! │   ├── build  # [build]
//! │   └── theme  # [theme]
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, LoadError, ConfigDiagnostics
//! │   └── field  # FieldPath
//! └── mod.rs     # SiteDescriptor, document loading (this file)
//! ```
//!
//! # Sections
//!
//! | Section                | Purpose                                  |
//! |------------------------|------------------------------------------|
//! | top level              | `base`, `title`, `description`           |
//! | `[theme]`              | Logo, top navigation                     |
//! | `[[theme.sidebar]]`    | Sidebar groups and entries               |
//! | `[[theme.social_links]]` | Social platform links                  |
//! | `[theme.footer]`       | Footer message and copyright             |
//! | `[build]`              | Watch polling, code line numbers, math   |
//! | `[vite.server.watch]`, `[markdown]` | Build toggles, VitePress layout |

pub mod raw;
mod resolve;
pub mod section;
pub mod types;
mod util;

pub use raw::RawConfig;
pub use resolve::{ConfigResolver, LinkPolicy, resolve};
pub use section::{
    BuildOptions, FooterConfig, NavItem, SidebarEntry, SidebarGroup, SocialKind, SocialLink,
    ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath, LoadError};
pub use util::{find_config_file, is_external_link};

use crate::{debug, log};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

// ============================================================================
// SiteDescriptor
// ============================================================================

/// Validated, normalized site configuration.
///
/// Only produced by [`ConfigResolver`]; serializes with the same keys a
/// raw TOML document uses, so a printed descriptor is itself a valid
/// single revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDescriptor {
    /// Root URL path, starts and ends with `/`.
    pub base: String,

    pub title: String,

    pub description: String,

    pub theme: ThemeConfig,

    #[serde(rename = "build")]
    pub build_options: BuildOptions,
}

impl SiteDescriptor {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Join a site-relative link with `base` (external links unchanged).
    ///
    /// ```ignore
    /// // base = "/OpenEX/"
    /// site.href("/started") == "/OpenEX/started"
    /// ```
    pub fn href(&self, link: &str) -> String {
        if is_external_link(link) {
            return link.to_string();
        }
        format!("{}{}", self.base, link.trim_start_matches('/'))
    }
}

// ============================================================================
// Loading
// ============================================================================

/// A raw revision read from disk.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub raw: RawConfig,
    /// Unknown field paths skipped during parsing.
    pub ignored: Vec<String>,
}

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// `.json` is JSON; `.toml` or no extension is TOML.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Some(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            Some(_) => None,
        }
    }

    pub fn parse(self, content: &str) -> Result<(RawConfig, Vec<String>), LoadError> {
        match self {
            Self::Toml => RawConfig::from_toml_str(content),
            Self::Json => RawConfig::from_json_str(content),
        }
    }
}

/// Load one revision, warning about unknown fields.
pub fn load_document(path: &Path) -> Result<LoadedDocument, LoadError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
    let content =
        fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;

    let (raw, ignored) = format.parse(&content)?;
    if !ignored.is_empty() {
        print_unknown_fields_warning(&ignored, path);
    }
    debug!("load"; "loaded {} ({:?})", path.display(), format);

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        raw,
        ignored,
    })
}

/// Load revisions in order, oldest first.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LoadedDocument>, LoadError> {
    paths.iter().map(|p| load_document(p.as_ref())).collect()
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a TOML revision.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_document(content: &str) -> RawConfig {
    let (parsed, ignored) = RawConfig::from_toml_str(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The complete OpenEX documentation config.
#[cfg(test)]
pub fn test_openex_document() -> RawConfig {
    test_document(include_str!("../../fixtures/openex.toml"))
}

// ============================================================================
// tests
// ============================================================================
