use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hard failures. Missing locales and missing keys are not errors; they are
/// reported through the registry's [`WarningSink`](crate::WarningSink).
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read locale file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse locale file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl I18nError {
    /// Path of the locale file that failed. Empty for in-memory documents.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

pub type Result<T, E = I18nError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = I18nError::Io {
            path: PathBuf::from("./locales/fr.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        let msg = err.to_string();
        assert!(msg.contains("./locales/fr.json"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.path(), Path::new("./locales/fr.json"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = I18nError::Parse {
            path: PathBuf::from("en.json"),
            source,
        };

        assert!(err.to_string().starts_with("failed to parse locale file en.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
