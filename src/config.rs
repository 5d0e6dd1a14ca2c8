use serde::Deserialize;
use std::path::PathBuf;

/// Locale used when none is requested or the requested one is not loaded.
pub const DEFAULT_LOCALE: &str = "en";

/// Extension appended to the locale name when locating a locale file.
pub const DEFAULT_EXTENSION: &str = ".json";

/// Directory searched for locale files.
pub const DEFAULT_DIRECTORY: &str = "./locales";

/// Construction options. Every field is optional and falls back to its default.
///
/// Deserializes from the camelCase keys `defaultLocale`, `extension` and
/// `directory`, so hosts can embed it in their own configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Fallback locale (default: `en`)
    pub default_locale: Option<String>,
    /// Locale file extension including the dot (default: `.json`)
    pub extension: Option<String>,
    /// Directory holding locale files (default: `./locales`)
    pub directory: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback locale
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Set the locale file extension (including the leading dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the directory locale files are looked up in
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }
}

/// Resolved registry configuration. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale used when a scope asks for none or for one without a table
    pub default_locale: String,
    /// Appended to the locale name to form the file name, e.g. `.json`
    pub extension: String,
    /// Default directory for [`load_file`](crate::TranslationRegistry::load_file)
    pub directory: PathBuf,
}

impl Config {
    /// Resolve options, filling every unset field with its default.
    ///
    /// # Arguments
    /// * `options` - Partially filled options
    ///
    /// # Returns
    /// A `Config` with all fields set
    pub fn from_options(options: &Options) -> Self {
        Self {
            default_locale: options
                .default_locale
                .clone()
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            extension: options
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
            directory: options
                .directory
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}
