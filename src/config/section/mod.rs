//! Resolved configuration sections.
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Watch polling, code line numbers, math   |
//! | `theme` | `[theme]`    | Logo, nav, sidebar, social links, footer |

mod build;
mod theme;

pub use build::{BuildOptions, DEFAULT_WATCH_INTERVAL_MS};
pub use theme::{
    FooterConfig, NavItem, SidebarEntry, SidebarGroup, SocialKind, SocialLink, ThemeConfig,
};
