//! Locale-bound translators.

use super::format::{format_positional, parse_count};
use super::registry::TranslationRegistry;
use std::fmt::Display;

/// Translation calls without a locale argument.
///
/// Implemented by [`Scope`], and by every [`BoundTranslator`] host so a scope
/// bound through [`Scope::bind_into`] answers the same calls.
pub trait Translate {
    /// Translate `key`, substituting `args` into its `%s` placeholders.
    ///
    /// With no `args` the translation is returned verbatim.
    fn translate_singular(&self, key: &str, args: &[&dyn Display]) -> String;

    /// Translate `key` in its `one` or `other` form depending on `count`.
    ///
    /// `count` selects `other` only when it reads as an integer greater than
    /// one, so `0`, negative and non-numeric counts all use `one`. The count is
    /// substituted into the first `%s` of the selected form; `args` then fill
    /// the remaining placeholders in a second pass.
    fn translate_plural(&self, key: &str, count: &dyn Display, args: &[&dyn Display]) -> String;
}

/// A view over a [`TranslationRegistry`] fixed to one locale.
#[derive(Debug, Clone)]
pub struct Scope<'r> {
    registry: &'r TranslationRegistry,
    locale: String,
}

impl<'r> Scope<'r> {
    pub(crate) fn new(registry: &'r TranslationRegistry, locale: String) -> Self {
        Self { registry, locale }
    }

    /// Locale captured when the scope was created.
    ///
    /// # Returns
    /// The locale as requested, even when lookups fall back to the default.
    pub fn current_locale(&self) -> &str {
        &self.locale
    }

    /// Registry this scope reads from.
    pub fn registry(&self) -> &'r TranslationRegistry {
        self.registry
    }

    /// Hand a copy of this scope to `target`, bound to the same locale.
    ///
    /// # Arguments
    /// * `target` - Host that stores the scope, e.g. an `Option<Scope>` field
    pub fn bind_into<T>(&self, target: &mut T)
    where
        T: BindTarget<'r> + ?Sized,
    {
        target.bind_translator(self.clone());
    }
}

impl Translate for Scope<'_> {
    fn translate_singular(&self, key: &str, args: &[&dyn Display]) -> String {
        let entry = self.registry.resolve(&self.locale, key, false);
        render_singular(entry.singular_text(), args)
    }

    fn translate_plural(&self, key: &str, count: &dyn Display, args: &[&dyn Display]) -> String {
        let entry = self.registry.resolve(&self.locale, key, true);
        let use_other = parse_count(&count.to_string()).is_some_and(|n| n > 1);
        render_plural(entry.plural_text(use_other), count, args)
    }
}

fn render_singular(text: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        text.to_string()
    } else {
        format_positional(text, args)
    }
}

fn render_plural(template: &str, count: &dyn Display, args: &[&dyn Display]) -> String {
    let msg = format_positional(template, &[count]);

    if args.is_empty() {
        msg
    } else {
        format_positional(&msg, args)
    }
}

/// Something a [`Scope`] can be bound into.
pub trait BindTarget<'r> {
    fn bind_translator(&mut self, translator: Scope<'r>);
}

/// A slot a host keeps for its translator; binding fills or replaces it.
impl<'r> BindTarget<'r> for Option<Scope<'r>> {
    fn bind_translator(&mut self, translator: Scope<'r>) {
        *self = Some(translator);
    }
}

/// Host that exposes the scope bound into it.
///
/// Implementing this gives the host [`Translate`]. While nothing is bound,
/// calls render the key as its own translation, exactly like a lookup miss.
pub trait BoundTranslator {
    /// # Returns
    /// * `Some(&Scope)` once a scope has been bound
    /// * `None` before that
    fn translator(&self) -> Option<&Scope<'_>>;
}

impl BoundTranslator for Option<Scope<'_>> {
    fn translator(&self) -> Option<&Scope<'_>> {
        self.as_ref()
    }
}

impl<T: BoundTranslator + ?Sized> Translate for T {
    fn translate_singular(&self, key: &str, args: &[&dyn Display]) -> String {
        match self.translator() {
            Some(scope) => scope.translate_singular(key, args),
            None => render_singular(key, args),
        }
    }

    fn translate_plural(&self, key: &str, count: &dyn Display, args: &[&dyn Display]) -> String {
        match self.translator() {
            Some(scope) => scope.translate_plural(key, count, args),
            None => render_plural(key, count, args),
        }
    }
}
