//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config serialization error")]
    SerializeJson(#[source] serde_json::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Validation diagnostics, if this is a validation failure.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// Fieldless discriminant of [`ValidationError`], for matching in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingField,
    EmptyField,
    InvalidType,
    DuplicateLocaleKey,
    MissingDefaultLocale,
    DuplicateSharedList,
    DanglingDropdownReference,
    EmptyDropdownItems,
    NestedDropdown,
    DuplicateTitle,
    UnknownItemType,
    EmptyIndexName,
}

/// A single validation failure, located by its field path.
///
/// All of these are produced at load time and reported as a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is missing")]
    MissingField { path: FieldPath },

    #[error("field must not be empty")]
    EmptyField { path: FieldPath },

    #[error("expected {expected}")]
    InvalidType {
        path: FieldPath,
        expected: &'static str,
    },

    #[error("locale `{key}` is declared more than once")]
    DuplicateLocaleKey { path: FieldPath, key: String },

    #[error("the `default` locale is required")]
    MissingDefaultLocale { path: FieldPath },

    #[error("shared list `{name}` is declared more than once")]
    DuplicateSharedList { path: FieldPath, name: String },

    #[error("dropdown refers to shared list `{name}`, which is not declared")]
    DanglingDropdownReference { path: FieldPath, name: String },

    #[error("dropdown has no links")]
    EmptyDropdownItems { path: FieldPath },

    #[error("dropdowns cannot contain dropdowns")]
    NestedDropdown { path: FieldPath },

    #[error("title `{title}` is already used in this menu")]
    DuplicateTitle { path: FieldPath, title: String },

    #[error("unknown item type `{kind}`")]
    UnknownItemType { path: FieldPath, kind: String },

    #[error("`indexName` must not be empty")]
    EmptyIndexName { path: FieldPath },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::EmptyField { .. } => ErrorKind::EmptyField,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::DuplicateLocaleKey { .. } => ErrorKind::DuplicateLocaleKey,
            Self::MissingDefaultLocale { .. } => ErrorKind::MissingDefaultLocale,
            Self::DuplicateSharedList { .. } => ErrorKind::DuplicateSharedList,
            Self::DanglingDropdownReference { .. } => ErrorKind::DanglingDropdownReference,
            Self::EmptyDropdownItems { .. } => ErrorKind::EmptyDropdownItems,
            Self::NestedDropdown { .. } => ErrorKind::NestedDropdown,
            Self::DuplicateTitle { .. } => ErrorKind::DuplicateTitle,
            Self::UnknownItemType { .. } => ErrorKind::UnknownItemType,
            Self::EmptyIndexName { .. } => ErrorKind::EmptyIndexName,
        }
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            Self::MissingField { path }
            | Self::EmptyField { path }
            | Self::InvalidType { path, .. }
            | Self::DuplicateLocaleKey { path, .. }
            | Self::MissingDefaultLocale { path }
            | Self::DuplicateSharedList { path, .. }
            | Self::DanglingDropdownReference { path, .. }
            | Self::EmptyDropdownItems { path }
            | Self::NestedDropdown { path }
            | Self::DuplicateTitle { path, .. }
            | Self::UnknownItemType { path, .. }
            | Self::EmptyIndexName { path } => path,
        }
    }

    /// Fix hint shown under the message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingDefaultLocale { .. } => {
                Some("add a `default` menu under `nav`, e.g.: [[nav.default]]".into())
            }
            Self::DanglingDropdownReference { name, .. } => {
                Some(format!("declare it under `lists`, e.g.: [[lists.{name}]]"))
            }
            Self::UnknownItemType { .. } => Some("use \"link\" or \"dropdown\"".into()),
            Self::NestedDropdown { .. } => Some("flatten the inner dropdown into links".into()),
            Self::EmptyIndexName { .. } => Some("set the Algolia index name".into()),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected over one load attempt.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ValidationError>,
    /// Collected warnings (unknown fields), never fatal.
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Move everything collected by `other` into `self`.
    pub fn merge(&mut self, other: ConfigDiagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "unknown fields, ignoring:");
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

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Whether any collected error has the given kind.
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
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

impl From<ValidationError> for ConfigDiagnostics {
    fn from(error: ValidationError) -> Self {
        let mut diag = Self::new();
        diag.error(error);
        diag
    }
}

/// Render one error as `[path]`, message, optional hint.
fn fmt_error(f: &mut fmt::Formatter<'_>, err: &ValidationError) -> fmt::Result {
    let path = err.path();
    let shown = if path.is_root() { "<root>" } else { path.as_str() };
    writeln!(f, "{}{}{}", "[".dimmed(), shown.cyan(), "]".dimmed())?;
    write!(f, "{} {}", "→".red(), err)?;
    if let Some(hint) = err.hint() {
        write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
    }
    Ok(())
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            fmt_error(f, err)?;
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
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("nav.toml"),
            Error::new(IoErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("nav.toml"));
    }

    #[test]
    fn test_json_parse_and_serialize_distinct() {
        let parse = ConfigError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(matches!(parse, ConfigError::Json(_)));
        assert!(parse.to_string().contains("parsing"));

        let write = ConfigError::SerializeJson(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(write.to_string().contains("serialization"));
        assert!(std::error::Error::source(&write).is_some());
    }

    #[test]
    fn test_kind_and_path() {
        let err = ValidationError::DanglingDropdownReference {
            path: FieldPath::new("nav.zh[1].items"),
            name: "langs".into(),
        };
        assert_eq!(err.kind(), ErrorKind::DanglingDropdownReference);
        assert_eq!(err.path().as_str(), "nav.zh[1].items");
        assert!(err.hint().unwrap().contains("lists.langs"));
        assert!(err.to_string().contains("`langs`"));
    }

    #[test]
    fn test_diagnostics_collect_all() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error(ValidationError::MissingDefaultLocale {
            path: FieldPath::new("nav"),
        });
        diag.error(ValidationError::EmptyIndexName {
            path: FieldPath::new("plugins[0].indexName"),
        });
        diag.warn(FieldPath::new("sidebar"), "unknown field");

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.contains(ErrorKind::MissingDefaultLocale));
        assert!(diag.contains(ErrorKind::EmptyIndexName));
        assert!(!diag.contains(ErrorKind::DuplicateTitle));

        let rendered = diag.to_string();
        assert!(rendered.contains("plugins[0].indexName"));

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut a = ConfigDiagnostics::new();
        let b = ConfigDiagnostics::from(ValidationError::EmptyField {
            path: FieldPath::new("nav.default[0].title"),
        });
        a.merge(b);
        assert!(a.has_errors());
        assert!(a.into_result().is_err());
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
