//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Why a link is syntactically unusable, or `None` if it is fine.
///
/// Site-relative paths must be non-empty and free of whitespace;
/// links with a scheme must parse as absolute URLs.
pub fn link_problem(link: &str) -> Option<String> {
    if link.is_empty() {
        return Some("link is empty".into());
    }
    if link.chars().any(char::is_whitespace) {
        return Some(format!("link `{link}` contains whitespace"));
    }
    if is_external_link(link)
        && let Err(e) = url::Url::parse(link)
    {
        return Some(format!("invalid URL `{link}`: {e}"));
    }
    None
}

/// Why a social url is unusable, or `None` if it is an absolute http(s) URL.
pub fn absolute_url_problem(url_str: &str) -> Option<String> {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                Some(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ))
            } else if parsed.host_str().is_none() {
                Some("URL must have a valid host".into())
            } else {
                None
            }
        }
        Err(e) => Some(format!("invalid URL `{url_str}`: {e}")),
    }
}

/// Why a site base is unusable, or `None` if it matches `^/.*/$`.
///
/// The single slash `/` is accepted as the root base.
pub fn base_problem(base: &str) -> Option<String> {
    if !base.starts_with('/') || !base.ends_with('/') {
        return Some(format!("base `{base}` must start and end with `/`"));
    }
    if base.chars().any(char::is_whitespace) {
        return Some(format!("base `{base}` contains whitespace"));
    }
    None
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← cwd
/// /home/user/site/site.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
