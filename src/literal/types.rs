//! Multilingual literal value

use std::collections::BTreeMap;

use crate::error::LiteralError;
use crate::locale::Locale;

/// A piece of text expressed in several locales, with one default locale.
///
/// Literals are immutable: [`Literal::with_locale`] and [`Literal::with_translation`]
/// return a new value and leave the receiver untouched.
///
/// # Examples
/// ```
/// use translated_literal::Literal;
///
/// let hello = Literal::new("fr-ca", "Bonjour le monde").unwrap();
/// let both = hello.with_translation("en_US", "Hello world").unwrap();
///
/// assert_eq!(both.locale(), "fr_CA");
/// assert_eq!(both.default_text(), "Bonjour le monde");
/// assert_eq!(both.translate("EN-us"), "Hello world");
/// assert_eq!(hello.translate("en-us"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Locale returned by [`Literal::default_text`]
    pub(super) default_locale: Locale,
    /// Translated text keyed by locale
    pub(super) translations: BTreeMap<Locale, String>,
}

impl Literal {
    /// Creates a literal whose default locale is `locale`, translated as `text`.
    pub fn new(locale: &str, text: impl Into<String>) -> Result<Self, LiteralError> {
        let locale = Locale::parse(locale)?;
        Ok(Self::with_default(locale, text))
    }

    /// Same as [`Literal::new`] for an already validated locale.
    #[must_use]
    pub fn with_default(locale: Locale, text: impl Into<String>) -> Self {
        Self { default_locale: locale, translations: BTreeMap::from([(locale, text.into())]) }
    }

    /// Translation for the default locale.
    #[must_use]
    pub fn default_text(&self) -> &str {
        self.translations.get(&self.default_locale).map_or("", String::as_str)
    }

    /// Canonical form (`fr_CA`) of the default locale.
    #[must_use]
    pub const fn locale(&self) -> &'static str {
        self.default_locale.canonical()
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Translation for `locale`, or an empty string if there is none.
    ///
    /// Never fails, even when `locale` is not a supported locale.
    #[must_use]
    pub fn translate(&self, locale: &str) -> &str {
        Locale::lookup(locale)
            .and_then(|locale| self.translations.get(&locale))
            .map_or("", String::as_str)
    }

    /// Every stored translation, ordered by locale key.
    pub fn translations(&self) -> impl Iterator<Item = (Locale, &str)> {
        self.translations.iter().map(|(locale, text)| (*locale, text.as_str()))
    }

    /// Returns a copy whose default locale is `locale`.
    ///
    /// The new default does not need an existing translation.
    pub fn with_locale(&self, locale: &str) -> Result<Self, LiteralError> {
        let locale = Locale::parse(locale)?;
        tracing::debug!("Deriving literal with default locale {}", locale);
        Ok(Self { default_locale: locale, translations: self.translations.clone() })
    }

    /// Returns a copy with the translation for `locale` added or replaced.
    pub fn with_translation(
        &self,
        locale: &str,
        text: impl Into<String>,
    ) -> Result<Self, LiteralError> {
        let locale = Locale::parse(locale)?;
        let mut translations = self.translations.clone();
        translations.insert(locale, text.into());
        Ok(Self { default_locale: self.default_locale, translations })
    }
}
