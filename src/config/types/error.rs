//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// LoadError
// ============================================================================

/// Errors raised while reading raw documents, before resolution starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("TOML parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnknownFormat(PathBuf),
}

// ============================================================================
// ConfigError
// ============================================================================

/// Resolution failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is absent in every revision, or empty.
    MissingRequiredField,
    /// A link, url, or base path is syntactically invalid.
    InvalidPath,
    /// The same link appears twice where links must be unique.
    DuplicateSidebarLink,
    /// A build option holds an unusable value.
    InvalidBuildOption,
}

impl ErrorKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing required field",
            Self::InvalidPath => "invalid path",
            Self::DuplicateSidebarLink => "duplicate sidebar link",
            Self::InvalidBuildOption => "invalid build option",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A terminal resolution error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {path}: {detail}")]
pub struct ConfigError {
    pub kind: ErrorKind,
    /// Offending field (e.g. `theme.sidebar[1].items[0].link`).
    pub path: FieldPath,
    pub detail: String,
}

impl ConfigError {
    pub fn new(kind: ErrorKind, path: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            detail: detail.into(),
        }
    }

    pub fn missing(path: FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredField, path, detail)
    }

    pub fn invalid_path(path: FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath, path, detail)
    }

    pub fn duplicate_link(path: FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateSidebarLink, path, detail)
    }

    pub fn invalid_build_option(path: FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBuildOption, path, detail)
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub error: ConfigError,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(error: ConfigError) -> Self {
        Self { error, hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.error.path.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(
            f,
            "{} {}: {}",
            "→".red(),
            self.error.kind.label(),
            self.error.detail
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Ordered collection of resolution errors and warnings.
///
/// Errors keep insertion order, which is the validation order, so the
/// first error is the one `resolve` reports.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal findings (unknown routes, ignored fields).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ConfigError) {
        self.errors.push(ConfigDiagnostic::new(error));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, error: ConfigError, hint: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(error).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Whether an error was already recorded for `path`.
    pub fn has_error_at(&self, path: &FieldPath) -> bool {
        self.errors.iter().any(|d| &d.error.path == path)
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "{} found:", crate::utils::plural_count(self.warnings.len(), "warning"));
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// First recorded error, if any.
    pub fn first_error(&self) -> Option<&ConfigError> {
        self.errors.first().map(|d| &d.error)
    }

    /// Collapse into the first error, dropping the rest.
    pub fn into_first_error(self) -> Result<(), ConfigError> {
        match self.errors.into_iter().next() {
            Some(diag) => Err(diag.error),
            None => Ok(()),
        }
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind as IoErrorKind};

    #[test]
    fn test_load_error_display() {
        let io_err = LoadError::Io(
            PathBuf::from("site.toml"),
            Error::new(IoErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let format_err = LoadError::UnknownFormat(PathBuf::from("site.yaml"));
        assert!(format!("{format_err}").contains("site.yaml"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid_build_option(
            FieldPath::new("build.watch_interval_ms"),
            "must be positive",
        );
        assert_eq!(
            format!("{err}"),
            "invalid build option at `build.watch_interval_ms`: must be positive"
        );
    }

    #[test]
    fn test_diagnostics_keep_order() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(ConfigError::missing(FieldPath::new("title"), "required"));
        diag.error_with_hint(
            ConfigError::invalid_path(FieldPath::new("base"), "bad"),
            "use `/`",
        );
        diag.warn(FieldPath::new("theme.nav[0].link"), "no such route");

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.has_error_at(&FieldPath::new("base")));
        assert!(!diag.has_error_at(&FieldPath::new("description")));
        assert_eq!(
            diag.first_error().map(|e| e.kind),
            Some(ErrorKind::MissingRequiredField)
        );

        let err = diag.into_first_error().unwrap_err();
        assert_eq!(err.path.as_str(), "title");
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ConfigError::missing(FieldPath::new("title"), "required"));
        diag.error(ConfigError::missing(FieldPath::new("base"), "required"));
        let display = format!("{diag}");
        assert!(display.contains("config validation failed"));
        assert!(display.contains("title"));
        assert!(display.contains("base"));
    }

    #[test]
    fn test_warnings_alone_are_ok() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("theme.nav[0].link"), "no such route");
        assert!(diag.into_result().is_ok());
    }
}
