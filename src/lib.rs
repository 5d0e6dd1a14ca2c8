//! Minimal runtime string lookup.
//!
//! Source strings double as their own keys: a missing translation degrades to
//! the original text instead of failing. Translations are loaded per locale from
//! in-memory maps or flat JSON files and read back through locale-bound scopes.
//!
//! ```
//! use dumb_i18n::{Translate, TranslationEntry, TranslationMap, TranslationRegistry};
//!
//! let registry = TranslationRegistry::default();
//!
//! let mut en = TranslationMap::new();
//! en.insert("Hello".into(), TranslationEntry::simple("Hello!"));
//! en.insert("%s cats".into(), TranslationEntry::plural("%s cat", "%s cats"));
//! registry.load_locale("en", en);
//!
//! let t = registry.scope(Some("en"));
//! assert_eq!(t.translate_singular("Hello", &[]), "Hello!");
//! assert_eq!(t.translate_plural("%s cats", &2, &[]), "2 cats");
//! ```

pub mod config;
pub mod error;
pub mod i18n;

pub use config::{Config, Options};
pub use error::{I18nError, Result};
pub use i18n::{
    format_positional, parse_count, BindTarget, BoundTranslator, FileReader, FsReader,
    RecordingSink, Scope, TracingSink, Translate, TranslationEntry, TranslationMap,
    TranslationRegistry, Warning, WarningSink,
};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
