//! Translation entries and locale documents.
//!
//! A locale document is a flat JSON object mapping each source string to
//! either a plain string or an object carrying `one` and `other` forms:
//!
//! ```json
//! {
//!   "Hello": "¡Hola!",
//!   "%s cats": { "one": "%s gato", "other": "%s gatos" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Translations for a single locale, keyed by the literal source string.
pub type TranslationMap = HashMap<String, TranslationEntry>;

/// A single translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationEntry {
    /// Used by singular lookups
    Simple(String),
    /// Used by plural lookups; `other` is selected when the count is greater than one
    Plural { one: String, other: String },
}

impl TranslationEntry {
    /// Entry with one text for every count.
    pub fn simple(text: impl Into<String>) -> Self {
        Self::Simple(text.into())
    }

    /// Entry with separate singular and plural templates.
    ///
    /// # Arguments
    /// * `one` - Template used when the count is not greater than one
    /// * `other` - Template used when the count is greater than one
    pub fn plural(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self::Plural {
            one: one.into(),
            other: other.into(),
        }
    }

    /// Identity entry registered for a key that has no translation yet.
    pub(crate) fn identity(key: &str, plural: bool) -> Self {
        if plural {
            Self::plural(key, key)
        } else {
            Self::simple(key)
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural { .. })
    }

    /// Template for a singular lookup. Plural entries answer with their `other` form.
    pub fn singular_text(&self) -> &str {
        match self {
            Self::Simple(text) => text,
            Self::Plural { other, .. } => other,
        }
    }

    /// Template for a plural lookup. Simple entries answer with their text for both forms.
    pub fn plural_text(&self, use_other: bool) -> &str {
        match self {
            Self::Simple(text) => text,
            Self::Plural { other, .. } if use_other => other,
            Self::Plural { one, .. } => one,
        }
    }
}

/// Parse a locale document.
pub(crate) fn parse_document(contents: &str) -> serde_json::Result<TranslationMap> {
    serde_json::from_str(contents)
}
