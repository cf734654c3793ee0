//! Content route set for link checking.
//!
//! Maps markdown pages under a content directory to the routes a
//! doc-site renderer serves them at:
//!
//! | File                | Route(s)          |
//! |---------------------|-------------------|
//! | `index.md`          | `/`               |
//! | `started.md`        | `/started`        |
//! | `api/index.md`      | `/api/`, `/api`   |
//! | `api/system.md`     | `/api/system`     |
//!
//! Missing routes are warnings: the renderer owns the content, so a link
//! to a page that does not exist yet never blocks resolution.

use std::fs;
use std::path::{Component, Path};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use crate::config::{ConfigDiagnostics, FieldPath, LoadError, SiteDescriptor, is_external_link};
use crate::debug;

/// Directories never scanned for pages.
const IGNORED_DIRS: &[&str] = &["node_modules", ".vitepress", ".git"];

/// Set of routes served by the content directory.
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: FxHashSet<String>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect routes for every markdown file under `content_dir`.
    ///
    /// Fails when `content_dir` itself cannot be read. Unreadable entries
    /// below it are skipped.
    pub fn scan(content_dir: &Path) -> Result<Self, LoadError> {
        fs::read_dir(content_dir).map_err(|err| LoadError::Io(content_dir.to_path_buf(), err))?;

        let mut set = Self::new();
        WalkDir::new(content_dir)
            .skip_hidden(false)
            .process_read_dir(|_, _, _, children| {
                children.retain(|entry| {
                    entry.as_ref().is_ok_and(|e| {
                        let name = e.file_name().to_str().unwrap_or_default();
                        !(e.file_type().is_dir() && IGNORED_DIRS.contains(&name))
                    })
                });
            })
            .into_iter()
            .filter_map(|entry| {
                entry
                    .map_err(|err| debug!("routes"; "skipping entry: {}", err))
                    .ok()
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
            .for_each(|e| {
                if let Ok(rel) = e.path().strip_prefix(content_dir) {
                    set.insert_page(rel);
                }
            });
        Ok(set)
    }

    /// Register the page at `rel` (relative to the content directory).
    pub fn insert_page(&mut self, rel: &Path) {
        let mut parts: Vec<String> = rel
            .with_extension("")
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        // Directory index serves the directory route
        if parts.last().is_some_and(|last| last == "index") {
            parts.pop();
        }
        self.routes.insert(normalize_route(&format!("/{}", parts.join("/"))));
    }

    /// Whether `link` points at a known page. External links always pass.
    pub fn contains(&self, link: &str) -> bool {
        if is_external_link(link) {
            return true;
        }
        self.routes.contains(&normalize_route(link))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Canonical route: drop `#fragment`/`?query`, a trailing `.html` or `.md`,
/// and a trailing slash (except for `/`). `/api/` and `/api` compare equal.
fn normalize_route(link: &str) -> String {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    let mut route = &link[..end];
    for ext in [".html", ".md"] {
        if let Some(stripped) = route.strip_suffix(ext) {
            route = stripped;
        }
    }
    let route = route.trim_end_matches('/');
    if route.is_empty() {
        "/".to_string()
    } else if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{route}")
    }
}

/// Warn for each nav or sidebar link without a matching page.
///
/// Returns the number of warnings added.
pub fn check_routes(site: &SiteDescriptor, routes: &RouteSet, diag: &mut ConfigDiagnostics) -> usize {
    let theme = FieldPath::new("theme");
    let mut missing = 0;

    let nav = site
        .theme
        .nav
        .iter()
        .enumerate()
        .map(|(i, item)| (theme.key("nav").index(i).key("link"), item.link.as_str()));
    let sidebar = site.theme.sidebar_entries().map(|(g, i, entry)| {
        (
            theme
                .key("sidebar")
                .index(g)
                .key("items")
                .index(i)
                .key("link"),
            entry.link.as_str(),
        )
    });

    for (path, link) in nav.chain(sidebar) {
        if !routes.contains(link) {
            diag.warn(path, format!("no content page for `{link}`"));
            missing += 1;
        }
    }
    missing
}
