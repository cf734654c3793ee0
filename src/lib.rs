//! sitecfg - resolve layered documentation-site configs.
//!
//! A site config is written as one or more revisions (oldest first).
//! [`ConfigResolver`] merges them, newest wins, and validates the result
//! into a [`SiteDescriptor`] for the rendering pipeline.
//!
//! ```ignore
//! use sitecfg::{RawConfig, resolve};
//!
//! let (old, _) = RawConfig::from_toml_str(&old_toml)?;
//! let (new, _) = RawConfig::from_toml_str(&new_toml)?;
//! let site = resolve(&[old, new])?;
//! println!("{}", site.theme.nav[0].label);
//! ```

pub mod config;
pub mod logger;
pub mod route;
pub mod utils;

pub use config::{
    BuildOptions, ConfigDiagnostics, ConfigError, ConfigResolver, ErrorKind, FieldPath,
    FooterConfig, LinkPolicy, LoadError, NavItem, RawConfig, SidebarEntry, SidebarGroup,
    SiteDescriptor, SocialKind, SocialLink, ThemeConfig, resolve,
};
pub use route::{RouteSet, check_routes};
