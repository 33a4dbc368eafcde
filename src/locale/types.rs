//! Validated locale value.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use super::registry;
use crate::error::LiteralError;

/// A supported locale.
///
/// Can only be obtained from the registry, so holding a `Locale` proves the identifier
/// is valid. Ordering, equality and hashing follow the normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// Lowercase, hyphenated key (`fr-ca`)
    key: &'static str,
    /// Underscore form with an uppercase region (`fr_CA`)
    canonical: &'static str,
}

impl Locale {
    pub(super) const fn from_entry(key: &'static str, canonical: &'static str) -> Self {
        Self { key, canonical }
    }

    /// Parses any case/separator variant of a supported locale.
    ///
    /// # Examples
    /// ```
    /// use translated_literal::locale::Locale;
    ///
    /// let locale = Locale::parse("FR_ca").unwrap();
    /// assert_eq!(locale.key(), "fr-ca");
    /// assert_eq!(locale.canonical(), "fr_CA");
    /// assert!(Locale::parse("xx-yy").is_err());
    /// ```
    pub fn parse(locale: &str) -> Result<Self, LiteralError> {
        registry::lookup(locale).ok_or_else(|| {
            tracing::debug!("Rejected unsupported locale: {:?}", locale);
            LiteralError::invalid_locale(locale)
        })
    }

    /// Finds a supported locale without reporting a rejection.
    #[must_use]
    pub fn lookup(locale: &str) -> Option<Self> {
        registry::lookup(locale)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn canonical(self) -> &'static str {
        self.canonical
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical)
    }
}

impl FromStr for Locale {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LiteralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// parse: all spellings of one locale
    #[rstest]
    #[case::hyphen_lower("fr-ca")]
    #[case::underscore_mixed("fr_CA")]
    #[case::upper("FR-CA")]
    #[case::underscore_lower("fr_ca")]
    fn parse_accepts_every_variant(#[case] input: &str) {
        let locale = Locale::parse(input).unwrap();

        assert_that!(locale.key(), eq("fr-ca"));
        assert_that!(locale.canonical(), eq("fr_CA"));
    }

    /// PartialEq: spellings compare equal
    #[rstest]
    fn variants_are_equal() {
        assert_eq!(Locale::parse("en_US").unwrap(), Locale::parse("en-us").unwrap());
    }

    /// parse: unsupported locale
    #[rstest]
    #[case::unknown("xx-yy")]
    #[case::empty("")]
    #[case::language_only("en")]
    fn parse_rejects_unsupported(#[case] input: &str) {
        assert!(matches!(Locale::parse(input), Err(LiteralError::InvalidLocale(_))));
    }

    /// Display: canonical form
    #[rstest]
    fn display_uses_canonical_form() {
        let locale: Locale = "pt-br".parse().unwrap();

        assert_that!(locale.to_string(), eq("pt_BR"));
    }

    /// serde: writes canonical, reads any spelling
    #[rstest]
    fn serde_uses_canonical_form() {
        let locale = Locale::try_from("de-ch").unwrap();

        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(r#""DE-ch""#).unwrap();

        assert_that!(json, eq(r#""de_CH""#));
        assert_eq!(back, locale);
    }

    /// Deserialize: unsupported locale
    #[rstest]
    fn deserialize_rejects_unsupported() {
        let result = serde_json::from_str::<Locale>(r#""xx_YY""#);

        assert_that!(result.unwrap_err().to_string(), contains_substring("not a valid locale"));
    }
}
