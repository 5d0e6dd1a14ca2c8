//! Internationalization (i18n) module: locale registry and translation lookup.
//!
//! # Architecture
//!
//! - `entry`: Translation entries and parsing of flat JSON locale documents
//! - `format`: `%s` positional substitution and count parsing
//! - `reader`: File reading capability used by `load_file`
//! - `sink`: Warning reporting for misses and duplicate loads
//! - `registry`: Per-locale tables, resolution with fallback and auto-registration
//! - `scope`: Locale-bound translators and binding them into host objects
//!
//! # Example
//!
//! ```rust,ignore
//! use dumb_i18n::{Options, Translate, TranslationRegistry};
//!
//! let registry = TranslationRegistry::new(&Options::new().with_directory("./locales"));
//! registry.load_file("en", None)?;
//!
//! let t = registry.scope(Some("en"));
//! let greeting = t.translate_singular("Hello, %s", &[&"John"]);
//! let cats = t.translate_plural("%s cats are at %s", &2, &[&"the bar"]);
//! ```

mod entry;
mod format;
mod reader;
mod registry;
mod scope;
mod sink;

pub use entry::{TranslationEntry, TranslationMap};
pub use format::{format_positional, parse_count};
pub use reader::{FileReader, FsReader};
pub use registry::TranslationRegistry;
pub use scope::{BindTarget, BoundTranslator, Scope, Translate};
pub use sink::{RecordingSink, TracingSink, Warning, WarningSink};
