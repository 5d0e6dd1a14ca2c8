//! Warning reporting.
//!
//! Misses never fail a lookup. Each one is reported once through the
//! registry's [`WarningSink`] and then degrades to the untranslated string.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// A recoverable condition hit while resolving or loading translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The requested locale was empty or has no table; the default is used instead
    MissingLocale {
        requested: Option<String>,
        fallback: String,
    },
    /// The default locale itself had no table; an empty one was registered
    LocaleNotLoaded { locale: String },
    /// The key had no entry; an identity entry was registered
    MissingTranslation { locale: String, key: String },
    /// A second load for an already loaded locale was ignored
    DuplicateLoad { locale: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLocale { requested, fallback } => match requested {
                Some(locale) => write!(
                    f,
                    "no locale found for `{locale}`, falling back to default ({fallback})"
                ),
                None => write!(f, "no locale found, falling back to default ({fallback})"),
            },
            Self::LocaleNotLoaded { locale } => write!(f, "locale `{locale}` not loaded"),
            Self::MissingTranslation { locale, key } => {
                write!(f, "no translation for string `{key}` in locale `{locale}`")
            }
            Self::DuplicateLoad { locale } => {
                write!(f, "locale `{locale}` was already initialized")
            }
        }
    }
}

/// Receiver for [`Warning`]s emitted by a registry.
pub trait WarningSink {
    fn warn(&self, warning: &Warning);
}

impl<T: WarningSink + ?Sized> WarningSink for Rc<T> {
    fn warn(&self, warning: &Warning) {
        (**self).warn(warning)
    }
}

/// Default sink: logs every warning through `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: &Warning) {
        match warning {
            Warning::MissingLocale {
                requested,
                fallback,
            } => warn!(
                locale = %requested.as_deref().unwrap_or(""),
                fallback = %fallback,
                "{}",
                warning
            ),
            Warning::LocaleNotLoaded { locale } | Warning::DuplicateLoad { locale } => {
                warn!(locale = %locale, "{}", warning)
            }
            Warning::MissingTranslation { locale, key } => {
                warn!(locale = %locale, key = %key, "{}", warning)
            }
        }
    }
}

/// Sink that keeps warnings in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: RefCell<Vec<Warning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.borrow().clone()
    }

    /// Drain the recorded warnings
    pub fn take(&self) -> Vec<Warning> {
        self.warnings.take()
    }

    /// Number of warnings recorded and not yet taken
    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    // ==================== Display Tests ====================

    #[test]
    fn test_warning_messages() {
        let missing = Warning::MissingLocale {
            requested: Some("ch".into()),
            fallback: "en".into(),
        };
        assert_eq!(
            missing.to_string(),
            "no locale found for `ch`, falling back to default (en)"
        );

        let unnamed = Warning::MissingLocale {
            requested: None,
            fallback: "en".into(),
        };
        assert_eq!(
            unnamed.to_string(),
            "no locale found, falling back to default (en)"
        );

        let key = Warning::MissingTranslation {
            locale: "en".into(),
            key: "Bye".into(),
        };
        assert_eq!(key.to_string(), "no translation for string `Bye` in locale `en`");

        let dup = Warning::DuplicateLoad { locale: "es".into() };
        assert_eq!(dup.to_string(), "locale `es` was already initialized");
    }

    // ==================== RecordingSink Tests ====================

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.warn(&Warning::LocaleNotLoaded { locale: "en".into() });
        sink.warn(&Warning::DuplicateLoad { locale: "en".into() });

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.warnings(),
            vec![
                Warning::LocaleNotLoaded { locale: "en".into() },
                Warning::DuplicateLoad { locale: "en".into() },
            ]
        );
    }

    #[test]
    fn test_recording_sink_take_drains() {
        let sink = RecordingSink::new();
        sink.warn(&Warning::LocaleNotLoaded { locale: "en".into() });

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_rc_sink_shares_records() {
        let sink = Rc::new(RecordingSink::new());
        let handle = Rc::clone(&sink);

        handle.warn(&Warning::DuplicateLoad { locale: "uk".into() });
        assert_eq!(sink.len(), 1);
    }

    // ==================== TracingSink Tests ====================

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(warning: &Warning) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || TracingSink.warn(warning));

        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).expect("Should be UTF-8")
    }

    #[test]
    fn test_tracing_sink_logs_at_warn_level() {
        let output = capture(&Warning::MissingTranslation {
            locale: "en".into(),
            key: "Bye".into(),
        });

        assert!(output.contains("WARN"));
        assert!(output.contains("no translation for string `Bye`"));
        assert!(output.contains("key=Bye"));
    }

    #[test]
    fn test_tracing_sink_missing_locale_fields_unquoted() {
        let output = capture(&Warning::MissingLocale {
            requested: Some("ch".into()),
            fallback: "en".into(),
        });

        assert!(output.contains("locale=ch"));
        assert!(output.contains("fallback=en"));
        assert!(!output.contains("locale=\"ch\""));
    }
}
