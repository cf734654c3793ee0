//! Configuration resolution.
//!
//! Turns an ordered list of raw revisions (oldest first) into one
//! validated [`SiteDescriptor`]:
//!
//! ```text
//! revisions ──► merge (later wins, older fills gaps) ──► validate ──► descriptor
//!                 │                                        │
//!                 └── missing required fields              └── (a) link syntax
//!                                                              (b) empty groups
//!                                                              (c) duplicate links
//!                                                              (d) build options
//!                                                              (e) base path
//! ```
//!
//! Scalars are filled field by field. Collections (`nav`, `sidebar`,
//! `social_links`) are taken whole from the newest revision declaring
//! them, never concatenated.

use rustc_hash::{FxHashMap, FxHashSet};

use super::SiteDescriptor;
use super::raw::{RawConfig, RawNavItem, RawSidebarGroup, RawSocialLink};
use super::section::{
    BuildOptions, DEFAULT_WATCH_INTERVAL_MS, FooterConfig, NavItem, SidebarEntry, SidebarGroup,
    SocialKind, SocialLink, ThemeConfig,
};
use super::types::{ConfigDiagnostics, ConfigError, FieldPath};
use super::util::{absolute_url_problem, base_problem, link_problem};

const NO_DOCUMENTS: &str = "at least one config document is required";

/// Uniqueness scope for sidebar links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// A link may appear once per sidebar group.
    #[default]
    PerGroup,
    /// A link may appear once in the whole sidebar.
    SiteWide,
}

/// Validates, merges, and normalizes raw revisions.
///
/// Stateless: one resolver can serve any number of concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver {
    policy: LinkPolicy,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LinkPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LinkPolicy {
        self.policy
    }

    /// Resolve `documents` (oldest first) into one descriptor.
    ///
    /// Fails with the first error in validation order; no partial
    /// descriptor is ever returned.
    pub fn resolve(&self, documents: &[RawConfig]) -> Result<SiteDescriptor, ConfigError> {
        let (site, diag) = self.run(documents);
        diag.into_first_error()?;
        site.ok_or_else(|| ConfigError::missing(FieldPath::root(), NO_DOCUMENTS))
    }

    /// Run every check and collect all errors instead of stopping at the first.
    pub fn diagnose(&self, documents: &[RawConfig]) -> ConfigDiagnostics {
        self.run(documents).1
    }

    fn run(&self, documents: &[RawConfig]) -> (Option<SiteDescriptor>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        if documents.is_empty() {
            diag.error(ConfigError::missing(FieldPath::root(), NO_DOCUMENTS));
            return (None, diag);
        }

        let draft = Revisions(documents).merge(&mut diag);
        draft.validate(self.policy, &mut diag);
        (Some(draft.site), diag)
    }
}

/// Resolve with the default [`LinkPolicy::PerGroup`].
pub fn resolve(documents: &[RawConfig]) -> Result<SiteDescriptor, ConfigError> {
    ConfigResolver::new().resolve(documents)
}

// ============================================================================
// Merge
// ============================================================================

/// Revisions ordered oldest to newest.
struct Revisions<'a>(&'a [RawConfig]);

/// Merged descriptor plus the raw values validation still needs.
struct Draft {
    site: SiteDescriptor,
    /// Signed interval as written, so negatives can be reported.
    watch_interval_ms: i64,
}

impl<'a> Revisions<'a> {
    /// Value from the newest revision that sets the field.
    fn latest<T: ?Sized>(&self, field: impl Fn(&'a RawConfig) -> Option<&'a T>) -> Option<&'a T> {
        self.0.iter().rev().find_map(field)
    }

    fn merge(&self, diag: &mut ConfigDiagnostics) -> Draft {
        let root = FieldPath::root();

        let base = match self.latest(|d| d.base.as_deref()) {
            Some(base) => base.to_string(),
            None => {
                diag.error_with_hint(
                    ConfigError::missing(root.key("base"), "base is not set in any revision"),
                    "set `base`, e.g.: \"/\"",
                );
                String::new()
            }
        };
        let title = required_text(
            self.latest(|d| d.title.as_deref()),
            root.key("title"),
            "title",
            diag,
        );
        let description = self
            .latest(|d| d.description.as_deref())
            .unwrap_or_default()
            .to_string();

        let theme = self.merge_theme(diag);
        let (build_options, watch_interval_ms) = self.merge_build();

        Draft {
            site: SiteDescriptor {
                base,
                title,
                description,
                theme,
                build_options,
            },
            watch_interval_ms,
        }
    }

    fn merge_theme(&self, diag: &mut ConfigDiagnostics) -> ThemeConfig {
        let path = FieldPath::new("theme");

        let nav = self
            .latest(|d| d.theme.nav.as_deref())
            .map(|items| nav_items(items, &path.key("nav"), diag))
            .unwrap_or_default();
        let sidebar = self
            .latest(|d| d.theme.sidebar.as_deref())
            .map(|groups| sidebar_groups(groups, &path.key("sidebar"), diag))
            .unwrap_or_default();
        let social_links = self
            .latest(|d| d.theme.social_links.as_deref())
            .map(|links| social_links(links, &path.key("social_links"), diag))
            .unwrap_or_default();

        ThemeConfig {
            logo_path: self.latest(|d| d.theme.logo.as_deref()).map(String::from),
            nav,
            sidebar,
            social_links,
            footer: self.merge_footer(),
        }
    }

    /// Footer text is scalar: message and copyright fill independently.
    fn merge_footer(&self) -> Option<FooterConfig> {
        if !self.0.iter().any(|d| d.theme.footer.is_some()) {
            return None;
        }
        let text = |field: fn(&'a RawConfig) -> Option<&'a str>| {
            self.latest(field).unwrap_or_default().to_string()
        };
        Some(FooterConfig {
            message: text(|d| d.theme.footer.as_ref()?.message.as_deref()),
            copyright: text(|d| d.theme.footer.as_ref()?.copyright.as_deref()),
        })
    }

    fn merge_build(&self) -> (BuildOptions, i64) {
        let defaults = BuildOptions::default();
        let flag = |field: fn(&'a RawConfig) -> Option<&'a bool>, default: bool| {
            self.latest(field).copied().unwrap_or(default)
        };

        let interval = self
            .latest(|d| d.watch_interval_ms())
            .copied()
            .unwrap_or(DEFAULT_WATCH_INTERVAL_MS as i64);

        let options = BuildOptions {
            watch_polling_enabled: flag(|d| d.watch_polling(), defaults.watch_polling_enabled),
            watch_interval_ms: u64::try_from(interval).unwrap_or(0),
            line_numbers_in_code: flag(|d| d.line_numbers(), defaults.line_numbers_in_code),
            math_rendering_enabled: flag(|d| d.math(), defaults.math_rendering_enabled),
        };
        (options, interval)
    }
}

/// Required non-blank text. Records an error and yields `""` otherwise.
fn required_text(
    value: Option<&str>,
    path: FieldPath,
    what: &str,
    diag: &mut ConfigDiagnostics,
) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        Some(_) => {
            diag.error(ConfigError::missing(path, format!("{what} must not be empty")));
            String::new()
        }
        None => {
            diag.error(ConfigError::missing(path, format!("{what} is required")));
            String::new()
        }
    }
}

/// Required link. Emptiness is left to link syntax validation.
fn required_link(value: Option<&str>, path: FieldPath, diag: &mut ConfigDiagnostics) -> String {
    match value {
        Some(link) => link.to_string(),
        None => {
            diag.error(ConfigError::missing(path, "link is required"));
            String::new()
        }
    }
}

fn nav_items(items: &[RawNavItem], path: &FieldPath, diag: &mut ConfigDiagnostics) -> Vec<NavItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = path.index(i);
            NavItem {
                label: required_text(item.label.as_deref(), path.key("label"), "label", diag),
                link: required_link(item.link.as_deref(), path.key("link"), diag),
            }
        })
        .collect()
}

fn sidebar_groups(
    groups: &[RawSidebarGroup],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<SidebarGroup> {
    groups
        .iter()
        .enumerate()
        .map(|(g, group)| {
            let path = path.index(g);
            let label = required_text(group.label.as_deref(), path.key("label"), "label", diag);
            let items_path = path.key("items");
            let items = group
                .items
                .iter()
                .flatten()
                .enumerate()
                .map(|(i, entry)| {
                    let path = items_path.index(i);
                    SidebarEntry {
                        label: required_text(
                            entry.label.as_deref(),
                            path.key("label"),
                            "label",
                            diag,
                        ),
                        link: required_link(entry.link.as_deref(), path.key("link"), diag),
                    }
                })
                .collect();
            SidebarGroup { label, items }
        })
        .collect()
}

fn social_links(
    links: &[RawSocialLink],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<SocialLink> {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let path = path.index(i);
            let kind = required_text(link.kind.as_deref(), path.key("kind"), "kind", diag);
            let url = match link.url.as_deref() {
                Some(url) => url.to_string(),
                None => {
                    diag.error(ConfigError::missing(path.key("url"), "url is required"));
                    String::new()
                }
            };
            SocialLink {
                kind: SocialKind::from_name(&kind),
                url,
            }
        })
        .collect()
}

// ============================================================================
// Validate
// ============================================================================

impl Draft {
    /// Run checks (a) through (e) in order.
    ///
    /// Fields that already failed during merge are not reported twice.
    fn validate(&self, policy: LinkPolicy, diag: &mut ConfigDiagnostics) {
        self.check_links(diag);
        self.check_groups_not_empty(diag);
        self.check_duplicate_links(policy, diag);
        self.check_build_options(diag);
        self.check_base(diag);
    }

    /// (a) Link syntax for nav, sidebar, and social links.
    fn check_links(&self, diag: &mut ConfigDiagnostics) {
        let theme = &self.site.theme;
        let path = FieldPath::new("theme");

        for (i, item) in theme.nav.iter().enumerate() {
            check_link(&item.link, path.key("nav").index(i).key("link"), diag);
        }

        for (g, i, entry) in theme.sidebar_entries() {
            check_link(&entry.link, entry_link_path(g, i), diag);
        }

        for (i, social) in theme.social_links.iter().enumerate() {
            let url_path = path.key("social_links").index(i).key("url");
            if diag.has_error_at(&url_path) {
                continue;
            }
            if let Some(problem) = absolute_url_problem(&social.url) {
                diag.error_with_hint(
                    ConfigError::invalid_path(url_path, problem),
                    "use format like https://github.com/owner/repo",
                );
            }
        }
    }

    /// (b) Every sidebar group has at least one entry.
    fn check_groups_not_empty(&self, diag: &mut ConfigDiagnostics) {
        for (g, group) in self.site.theme.sidebar.iter().enumerate() {
            if group.items.is_empty() {
                diag.error(ConfigError::missing(
                    group_path(g).key("items"),
                    format!("sidebar group `{}` has no entries", group.label),
                ));
            }
        }
    }

    /// (c) No link repeats within a group, or within the sidebar under
    /// [`LinkPolicy::SiteWide`].
    fn check_duplicate_links(&self, policy: LinkPolicy, diag: &mut ConfigDiagnostics) {
        let sidebar = &self.site.theme.sidebar;
        // link -> index of the first group that used it
        let mut site_wide: FxHashMap<&str, usize> = FxHashMap::default();

        for (g, group) in sidebar.iter().enumerate() {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for (i, entry) in group.items.iter().enumerate() {
                let path = entry_link_path(g, i);
                if diag.has_error_at(&path) {
                    continue;
                }
                let link = entry.link.as_str();

                if !seen.insert(link) {
                    diag.error(ConfigError::duplicate_link(
                        path,
                        format!(
                            "link `{link}` appears more than once in sidebar group `{}`",
                            group.label
                        ),
                    ));
                    continue;
                }

                if policy == LinkPolicy::SiteWide {
                    match site_wide.get(link) {
                        Some(&first) if first != g => {
                            diag.error(ConfigError::duplicate_link(
                                path,
                                format!(
                                    "link `{link}` in sidebar group `{}` is already used by group `{}`",
                                    group.label, sidebar[first].label
                                ),
                            ));
                        }
                        Some(_) => {}
                        None => {
                            site_wide.insert(link, g);
                        }
                    }
                }
            }
        }
    }

    /// (d) Watch interval must be usable.
    fn check_build_options(&self, diag: &mut ConfigDiagnostics) {
        let path = FieldPath::new("build").key("watch_interval_ms");
        let interval = self.watch_interval_ms;

        if interval < 0 {
            diag.error(ConfigError::invalid_build_option(
                path,
                format!("watch interval must not be negative, got {interval}"),
            ));
        } else if interval == 0 && self.site.build_options.watch_polling_enabled {
            diag.error_with_hint(
                ConfigError::invalid_build_option(
                    path,
                    "watch interval must be positive when watch polling is enabled",
                ),
                format!("set a positive interval, e.g.: {DEFAULT_WATCH_INTERVAL_MS}"),
            );
        }
    }

    /// (e) Base must match `^/.*/$`.
    fn check_base(&self, diag: &mut ConfigDiagnostics) {
        let path = FieldPath::new("base");
        if diag.has_error_at(&path) {
            return;
        }
        if let Some(problem) = base_problem(&self.site.base) {
            diag.error_with_hint(
                ConfigError::invalid_path(path, problem),
                "use `/` for a root site or `/name/` for a sub-path",
            );
        }
    }
}

fn check_link(link: &str, path: FieldPath, diag: &mut ConfigDiagnostics) {
    if diag.has_error_at(&path) {
        return;
    }
    if let Some(problem) = link_problem(link) {
        diag.error(ConfigError::invalid_path(path, problem));
    }
}

fn group_path(group: usize) -> FieldPath {
    FieldPath::new("theme").key("sidebar").index(group)
}

fn entry_link_path(group: usize, entry: usize) -> FieldPath {
    group_path(group).key("items").index(entry).key("link")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ErrorKind;
    use crate::config::{test_document, test_openex_document};

    /// Minimal valid document with `extra` appended.
    fn minimal(extra: &str) -> RawConfig {
        test_document(&format!("base = \"/\"\ntitle = \"Docs\"\n{extra}"))
    }

    fn resolve_err(documents: &[RawConfig]) -> ConfigError {
        resolve(documents).unwrap_err()
    }

    #[test]
    fn test_openex_example() {
        let site = resolve(&[test_openex_document()]).unwrap();

        assert_eq!(site.base, "/OpenEX/");
        assert_eq!(site.title, "OpenEX");
        assert_eq!(site.description, "OpenEX RustEdition");
        assert_eq!(site.theme.logo_path.as_deref(), Some("/icon.png"));
        assert_eq!(site.theme.nav[0].label, "Home");
        assert_eq!(site.theme.nav[1].link, "/example/");
        assert_eq!(site.theme.sidebar.len(), 4);
        assert_eq!(site.theme.sidebar[0].label, "Started");
        assert_eq!(site.theme.sidebar[0].items[0].label, "简介");
        assert_eq!(site.theme.sidebar[0].items[0].link, "/started");
        assert_eq!(site.theme.social_links[0].kind, SocialKind::Github);

        let footer = site.theme.footer.as_ref().unwrap();
        assert!(footer.copyright.contains("MCPPL"));

        let build = &site.build_options;
        assert!(build.watch_polling_enabled);
        assert_eq!(build.watch_interval_ms, 100);
        assert!(build.line_numbers_in_code);
        assert!(build.math_rendering_enabled);
    }

    #[test]
    fn test_single_nav_and_sidebar_group() {
        let raw = test_document(
            r#"
base = "/OpenEX/"
title = "OpenEX"

[theme]
nav = [{ label = "Home", link = "/" }]

[[theme.sidebar]]
label = "Started"
items = [{ label = "简介", link = "/started" }]
"#,
        );
        let site = resolve(&[raw]).unwrap();
        assert_eq!(site.theme.nav[0].label, "Home");
        assert_eq!(site.theme.sidebar[0].items[0].link, "/started");
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let site = resolve(&[minimal("")]).unwrap();

        assert_eq!(site.description, "");
        assert_eq!(site.theme, ThemeConfig::default());
        assert_eq!(site.build_options, BuildOptions::default());
    }

    #[test]
    fn test_idempotent_through_raw() {
        let once = resolve(&[test_openex_document()]).unwrap();
        let twice = resolve(&[RawConfig::from(&once)]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_complete_later_document_wins() {
        let older = minimal(
            "description = \"old\"\n[theme]\nnav = [{ label = \"Old\", link = \"/old\" }]",
        );
        let newer = test_openex_document();

        assert_eq!(
            resolve(&[older, newer.clone()]).unwrap(),
            resolve(&[newer]).unwrap()
        );
    }

    #[test]
    fn test_absent_fields_fill_from_older() {
        let older = test_openex_document();
        let newer = test_document("title = \"OpenEX 2\"");

        let site = resolve(&[older, newer]).unwrap();
        assert_eq!(site.title, "OpenEX 2");
        assert_eq!(site.base, "/OpenEX/");
        assert_eq!(site.description, "OpenEX RustEdition");
        assert_eq!(site.theme.sidebar.len(), 4);
        assert_eq!(site.build_options.watch_interval_ms, 100);
    }

    #[test]
    fn test_fill_walks_from_newest_to_oldest() {
        let oldest = minimal("description = \"oldest\"");
        let middle = test_document("description = \"middle\"");
        let newest = test_document("title = \"Newest\"");

        let site = resolve(&[oldest, middle, newest]).unwrap();
        assert_eq!(site.title, "Newest");
        assert_eq!(site.description, "middle");
        assert_eq!(site.base, "/");
    }

    #[test]
    fn test_sidebar_replaced_not_concatenated() {
        let older = test_openex_document();
        let replacement = test_document(
            "[[theme.sidebar]]\nlabel = \"Only\"\nitems = [{ label = \"Intro\", link = \"/intro\" }]",
        );
        let mut newer = older.clone();
        newer.theme.sidebar = replacement.theme.sidebar;

        let site = resolve(&[older, newer.clone()]).unwrap();
        let expected = resolve(&[newer]).unwrap();
        assert_eq!(site.theme.sidebar.len(), 1);
        assert_eq!(site.theme.sidebar, expected.theme.sidebar);
    }

    #[test]
    fn test_empty_collection_overrides_older() {
        let older = test_openex_document();
        let newer = test_document("[theme]\nnav = []");

        let site = resolve(&[older, newer]).unwrap();
        assert!(site.theme.nav.is_empty());
        assert_eq!(site.theme.sidebar.len(), 4);
    }

    #[test]
    fn test_footer_fields_fill_independently() {
        let older = minimal("[theme.footer]\nmessage = \"old message\"\ncopyright = \"old\"");
        let newer = test_document("[theme.footer]\ncopyright = \"new\"");

        let footer = resolve(&[older, newer]).unwrap().theme.footer.unwrap();
        assert_eq!(footer.message, "old message");
        assert_eq!(footer.copyright, "new");
    }

    #[test]
    fn test_build_options_fill_independently() {
        let older = minimal("[build]\nmath = true\nwatch_interval_ms = 300");
        let newer = test_document("[build]\nwatch_polling = true\nmath = false");

        let build = resolve(&[older, newer]).unwrap().build_options;
        assert!(build.watch_polling_enabled);
        assert!(!build.math_rendering_enabled);
        assert_eq!(build.watch_interval_ms, 300);
    }

    #[test]
    fn test_no_documents() {
        let err = resolve_err(&[]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert!(err.path.is_root());
    }

    #[test]
    fn test_missing_title() {
        let err = resolve_err(&[test_document("base = \"/\"")]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "title");
    }

    #[test]
    fn test_blank_title_is_missing() {
        let err = resolve_err(&[test_document("base = \"/\"\ntitle = \"  \"")]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "title");
    }

    #[test]
    fn test_missing_base_in_every_revision() {
        let err = resolve_err(&[test_document("title = \"A\""), test_document("title = \"B\"")]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "base");
    }

    #[test]
    fn test_missing_entry_label() {
        let err = resolve_err(&[minimal(
            "[[theme.sidebar]]\nlabel = \"G\"\nitems = [{ link = \"/a\" }]",
        )]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "theme.sidebar[0].items[0].label");
    }

    #[test]
    fn test_missing_link_reported_once() {
        let diag = ConfigResolver::new().diagnose(&[minimal(
            "[theme]\nnav = [{ label = \"Home\" }]",
        )]);
        assert_eq!(diag.len(), 1);
        let err = diag.first_error().unwrap();
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "theme.nav[0].link");
    }

    #[test]
    fn test_invalid_nav_link() {
        let err = resolve_err(&[minimal(
            "[theme]\nnav = [{ label = \"Home\", link = \"/my page\" }]",
        )]);
        assert_eq!(err.kind, ErrorKind::InvalidPath);
        assert_eq!(err.path.as_str(), "theme.nav[0].link");
    }

    #[test]
    fn test_empty_sidebar_link() {
        let err = resolve_err(&[minimal(
            "[[theme.sidebar]]\nlabel = \"G\"\nitems = [{ label = \"a\", link = \"/a\" }, { label = \"b\", link = \"\" }]",
        )]);
        assert_eq!(err.kind, ErrorKind::InvalidPath);
        assert_eq!(err.path.as_str(), "theme.sidebar[0].items[1].link");
    }

    #[test]
    fn test_absolute_url_nav_link() {
        let site = resolve(&[minimal(
            "[theme]\nnav = [{ label = \"Repo\", link = \"https://github.com/plos-clan/OpenEX\" }]",
        )])
        .unwrap();
        assert_eq!(site.theme.nav[0].link, "https://github.com/plos-clan/OpenEX");
    }

    #[test]
    fn test_invalid_social_url() {
        let err = resolve_err(&[minimal(
            "[[theme.social_links]]\nkind = \"github\"\nurl = \"github.com/plos-clan\"",
        )]);
        assert_eq!(err.kind, ErrorKind::InvalidPath);
        assert_eq!(err.path.as_str(), "theme.social_links[0].url");
    }

    #[test]
    fn test_unknown_social_kind_kept() {
        let site = resolve(&[minimal(
            "[[theme.social_links]]\nkind = \"codeberg\"\nurl = \"https://codeberg.org/x\"",
        )])
        .unwrap();
        assert_eq!(
            site.theme.social_links[0].kind,
            SocialKind::Other("codeberg".into())
        );
    }

    #[test]
    fn test_empty_sidebar_group() {
        let err = resolve_err(&[minimal("[[theme.sidebar]]\nlabel = \"Empty\"\nitems = []")]);
        assert_eq!(err.kind, ErrorKind::MissingRequiredField);
        assert_eq!(err.path.as_str(), "theme.sidebar[0].items");
        assert!(err.detail.contains("Empty"));

        let err = resolve_err(&[minimal("[[theme.sidebar]]\nlabel = \"NoItems\"")]);
        assert_eq!(err.path.as_str(), "theme.sidebar[0].items");
    }

    #[test]
    fn test_duplicate_link_in_group() {
        let err = resolve_err(&[minimal(
            r#"
[[theme.sidebar]]
label = "Started"
items = [{ label = "a", link = "/a" }]

[[theme.sidebar]]
label = "Runtime API"
items = [
    { label = "Index", link = "/api" },
    { label = "Again", link = "/api" },
]
"#,
        )]);
        assert_eq!(err.kind, ErrorKind::DuplicateSidebarLink);
        assert_eq!(err.path.as_str(), "theme.sidebar[1].items[1].link");
        assert!(err.detail.contains("Runtime API"));
    }

    #[test]
    fn test_cross_group_duplicates_by_policy() {
        let raw = minimal(
            r#"
[[theme.sidebar]]
label = "One"
items = [{ label = "a", link = "/shared" }]

[[theme.sidebar]]
label = "Two"
items = [{ label = "b", link = "/shared" }]
"#,
        );

        assert!(resolve(std::slice::from_ref(&raw)).is_ok());

        let strict = ConfigResolver::with_policy(LinkPolicy::SiteWide);
        let err = strict.resolve(&[raw]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateSidebarLink);
        assert_eq!(err.path.as_str(), "theme.sidebar[1].items[0].link");
        assert!(err.detail.contains("Two"));
        assert!(err.detail.contains("One"));
    }

    #[test]
    fn test_polling_with_zero_interval() {
        let err = resolve_err(&[minimal("[build]\nwatch_polling = true\nwatch_interval_ms = 0")]);
        assert_eq!(err.kind, ErrorKind::InvalidBuildOption);
        assert_eq!(err.path.as_str(), "build.watch_interval_ms");
    }

    #[test]
    fn test_zero_interval_without_polling() {
        let site = resolve(&[minimal("[build]\nwatch_interval_ms = 0")]).unwrap();
        assert_eq!(site.build_options.watch_interval_ms, 0);
        assert_eq!(site.build_options.watch_interval(), None);
    }

    #[test]
    fn test_polling_with_zero_interval_camel_case() {
        let (raw, ignored) = RawConfig::from_json_str(
            r#"{
                "base": "/",
                "title": "T",
                "buildOptions": {
                    "watchPollingEnabled": true,
                    "watchIntervalMs": 0,
                    "lineNumbersInCode": true,
                    "mathRenderingEnabled": true
                }
            }"#,
        )
        .unwrap();
        assert!(ignored.is_empty());

        let err = resolve_err(&[raw]);
        assert_eq!(err.kind, ErrorKind::InvalidBuildOption);
        assert_eq!(err.path.as_str(), "build.watch_interval_ms");
    }

    #[test]
    fn test_vitepress_sections_feed_build_options() {
        let (raw, _) = RawConfig::from_json_str(
            r#"{
                "base": "/OpenEX/",
                "title": "OpenEX",
                "vite": { "server": { "watch": { "usePolling": true, "interval": 100 } } },
                "markdown": { "lineNumbers": true, "math": true }
            }"#,
        )
        .unwrap();

        let build = resolve(&[raw]).unwrap().build_options;
        assert!(build.watch_polling_enabled);
        assert_eq!(build.watch_interval_ms, 100);
        assert!(build.line_numbers_in_code);
        assert!(build.math_rendering_enabled);
    }

    #[test]
    fn test_vitepress_polling_with_zero_interval() {
        let err = resolve_err(&[minimal("[vite.server.watch]\nusePolling = true\ninterval = 0")]);
        assert_eq!(err.kind, ErrorKind::InvalidBuildOption);
    }

    #[test]
    fn test_newer_build_section_overrides_older_vite_section() {
        let older = minimal("[vite.server.watch]\nusePolling = true\ninterval = 300\n[markdown]\nmath = true");
        let newer = minimal("[build]\nmath = false");

        let build = resolve(&[older, newer]).unwrap().build_options;
        assert!(build.watch_polling_enabled);
        assert_eq!(build.watch_interval_ms, 300);
        assert!(!build.math_rendering_enabled);
    }

    #[test]
    fn test_negative_interval() {
        let err = resolve_err(&[minimal("[build]\nwatch_interval_ms = -1")]);
        assert_eq!(err.kind, ErrorKind::InvalidBuildOption);
    }

    #[test]
    fn test_invalid_base() {
        for base in ["", "OpenEX/", "/OpenEX", "/Open EX/"] {
            let err = resolve_err(&[test_document(&format!(
                "base = \"{base}\"\ntitle = \"Docs\""
            ))]);
            assert_eq!(err.kind, ErrorKind::InvalidPath, "base {base:?}");
            assert_eq!(err.path.as_str(), "base");
        }
    }

    #[test]
    fn test_first_error_follows_validation_order() {
        // (a) link, (c) duplicate, (d) build option, (e) base all fail
        let raw = test_document(
            r#"
base = "nope"
title = "Docs"

[[theme.sidebar]]
label = "G"
items = [
    { label = "a", link = "/a" },
    { label = "b", link = "/a" },
    { label = "c", link = "bad link" },
]

[build]
watch_polling = true
watch_interval_ms = 0
"#,
        );

        let diag = ConfigResolver::new().diagnose(std::slice::from_ref(&raw));
        let kinds: Vec<_> = diag.errors().iter().map(|d| d.error.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::InvalidPath,
                ErrorKind::DuplicateSidebarLink,
                ErrorKind::InvalidBuildOption,
                ErrorKind::InvalidPath,
            ]
        );

        let err = resolve_err(&[raw]);
        assert_eq!(err.path.as_str(), "theme.sidebar[0].items[2].link");
    }

    #[test]
    fn test_missing_fields_come_first() {
        let diag = ConfigResolver::new().diagnose(&[test_document(
            "base = \"bad\"\n[build]\nwatch_interval_ms = -3",
        )]);
        assert_eq!(
            diag.first_error().map(|e| e.kind),
            Some(ErrorKind::MissingRequiredField)
        );
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_inputs_untouched() {
        let documents = vec![test_openex_document(), test_document("title = \"New\"")];
        let before = documents.clone();
        let _ = resolve(&documents);
        assert_eq!(documents, before);
    }
}
