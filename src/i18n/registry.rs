//! Translation registry: per-locale tables plus the resolution rules.
//!
//! Lookups never fail. An unknown locale falls back to the default one, and an
//! unknown key is registered as its own translation so the miss is reported
//! once and served from the table afterwards.

use super::entry::{parse_document, TranslationEntry, TranslationMap};
use super::reader::{FileReader, FsReader};
use super::scope::Scope;
use super::sink::{TracingSink, Warning, WarningSink};
use crate::config::{Config, Options};
use crate::error::{I18nError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Registry of loaded locales.
///
/// Every operation takes `&self`; the locale table lives behind a `RefCell`, so
/// a registry is confined to one thread and scopes over it observe each
/// other's loads. Use one registry per isolation domain.
pub struct TranslationRegistry {
    config: Config,
    locales: RefCell<HashMap<String, TranslationMap>>,
    sink: Box<dyn WarningSink>,
    reader: Box<dyn FileReader>,
}

impl TranslationRegistry {
    /// Create a registry from options, falling back to defaults for unset fields.
    ///
    /// No I/O happens here; locales are loaded explicitly afterwards.
    pub fn new(options: &Options) -> Self {
        Self::from_config(Config::from_options(options))
    }

    /// Create a registry from an already resolved configuration.
    ///
    /// # Arguments
    /// * `config` - Resolved settings, see [`Config::from_options`]
    ///
    /// # Returns
    /// An empty registry that logs through [`TracingSink`] and reads with [`FsReader`]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            locales: RefCell::new(HashMap::new()),
            sink: Box::new(TracingSink),
            reader: Box::new(FsReader),
        }
    }

    /// Replace the warning sink (defaults to [`TracingSink`]).
    pub fn with_sink(mut self, sink: impl WarningSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the file reader used by [`load_file`](Self::load_file) (defaults to [`FsReader`]).
    pub fn with_reader(mut self, reader: impl FileReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Resolved configuration this registry was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locale used for fallback.
    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    /// Extension appended to locale names when locating files.
    pub fn extension(&self) -> &str {
        &self.config.extension
    }

    /// Directory searched when `load_file` gets no directory.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Translator bound to `locale`, or to the default locale when `None`.
    ///
    /// The locale is captured now and never changes for the returned scope.
    pub fn scope(&self, locale: Option<&str>) -> Scope<'_> {
        let locale = locale.unwrap_or(self.config.default_locale.as_str());
        Scope::new(self, locale.to_string())
    }

    /// Look up the entry for `key`, registering whatever is missing on the way.
    ///
    /// 1. An empty or unloaded `locale` falls back to the default locale.
    /// 2. An unloaded default locale gets an empty table.
    /// 3. A missing key gets an identity entry shaped by `plural`.
    ///
    /// Each step that applies emits one warning.
    pub fn resolve(&self, locale: &str, key: &str, plural: bool) -> TranslationEntry {
        let mut warnings = Vec::new();

        let entry = {
            let mut locales = self.locales.borrow_mut();

            let mut locale: &str = locale;
            if locale.is_empty() || !locales.contains_key(locale) {
                warnings.push(Warning::MissingLocale {
                    requested: (!locale.is_empty()).then(|| locale.to_string()),
                    fallback: self.config.default_locale.clone(),
                });
                locale = self.config.default_locale.as_str();
            }

            if !locales.contains_key(locale) {
                warnings.push(Warning::LocaleNotLoaded {
                    locale: locale.to_string(),
                });
            }
            let table = locales.entry(locale.to_string()).or_default();

            if !table.contains_key(key) {
                warnings.push(Warning::MissingTranslation {
                    locale: locale.to_string(),
                    key: key.to_string(),
                });
            }
            table
                .entry(key.to_string())
                .or_insert_with(|| TranslationEntry::identity(key, plural))
                .clone()
        };

        // Emitted after the table borrow ends so sinks may inspect the registry
        for warning in &warnings {
            self.sink.warn(warning);
        }

        entry
    }

    /// Install `data` as the table for `locale`.
    ///
    /// A locale that already has a table keeps it; the new data is dropped and
    /// a [`Warning::DuplicateLoad`] is emitted.
    pub fn load_locale(&self, locale: &str, data: TranslationMap) {
        let inserted = {
            let mut locales = self.locales.borrow_mut();
            if locales.contains_key(locale) {
                false
            } else {
                debug!("Loaded locale {} ({} entries)", locale, data.len());
                locales.insert(locale.to_string(), data);
                true
            }
        };

        if !inserted {
            self.sink.warn(&Warning::DuplicateLoad {
                locale: locale.to_string(),
            });
        }
    }

    /// Read and parse a locale file, then hand it to [`load_locale`](Self::load_locale).
    ///
    /// Without an explicit `path` the file is found with [`locate_file`](Self::locate_file).
    /// Read and parse failures propagate and leave the table untouched.
    pub fn load_file(&self, locale: &str, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.locate_file(locale),
        };
        debug!("Reading locale {} from {}", locale, path.display());

        let contents = self
            .reader
            .read_to_string(&path)
            .map_err(|source| I18nError::Io {
                path: path.clone(),
                source,
            })?;
        let data =
            parse_document(&contents).map_err(|source| I18nError::Parse { path, source })?;

        self.load_locale(locale, data);
        Ok(())
    }

    /// Parse an in-memory locale document and load it for `locale`.
    pub fn load_str(&self, locale: &str, contents: &str) -> Result<()> {
        let data = parse_document(contents).map_err(|source| I18nError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        self.load_locale(locale, data);
        Ok(())
    }

    /// `{directory}/{locale}{extension}`
    pub fn locate_file(&self, locale: &str) -> PathBuf {
        self.config
            .directory
            .join(format!("{}{}", locale, self.config.extension))
    }

    /// Whether `locale` has a table, including one registered by a failed lookup.
    pub fn is_locale_loaded(&self, locale: &str) -> bool {
        self.locales.borrow().contains_key(locale)
    }

    /// Locales that have a table, sorted.
    pub fn loaded_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.borrow().keys().cloned().collect();
        locales.sort_unstable();
        locales
    }

    /// Snapshot of the table for `locale`.
    pub fn translations(&self, locale: &str) -> Option<TranslationMap> {
        self.locales.borrow().get(locale).cloned()
    }
}

impl Default for TranslationRegistry {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl fmt::Debug for TranslationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationRegistry")
            .field("config", &self.config)
            .field("locales", &self.loaded_locales())
            .finish_non_exhaustive()
    }
}
