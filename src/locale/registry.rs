//! Lookups against the fixed set of supported locales.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Locale;
use super::table::LOCALE_TABLE;
use crate::error::LiteralError;

/// Normalized key -> canonical form, built once from [`LOCALE_TABLE`]
static LOCALES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LOCALE_TABLE.iter().copied().collect());

/// Normalize a locale identifier (lowercase and replace `_` with `-`)
///
/// # Examples
/// ```
/// use translated_literal::locale::normalize_locale;
///
/// assert_eq!(normalize_locale("fr_CA"), "fr-ca");
/// assert_eq!(normalize_locale("FR-CA"), "fr-ca");
/// ```
#[must_use]
pub fn normalize_locale(locale: &str) -> String {
    locale.to_ascii_lowercase().replace('_', "-")
}

/// Finds the registry entry for any case/separator variant of `locale`.
pub(super) fn lookup(locale: &str) -> Option<Locale> {
    let normalized = normalize_locale(locale);
    LOCALES
        .get_key_value(normalized.as_str())
        .map(|(key, canonical)| Locale::from_entry(*key, *canonical))
}

/// Returns true if `locale` is a supported locale.
#[must_use]
pub fn exists(locale: &str) -> bool {
    lookup(locale).is_some()
}

/// Returns the canonical (`fr_CA`) form of `locale`.
pub fn canonical_form_of(locale: &str) -> Result<&'static str, LiteralError> {
    Locale::parse(locale).map(Locale::canonical)
}

/// All supported locales, ordered by key.
#[must_use]
pub fn supported_locales() -> Vec<Locale> {
    let mut locales: Vec<Locale> = LOCALE_TABLE
        .iter()
        .map(|&(key, canonical)| Locale::from_entry(key, canonical))
        .collect();
    locales.sort_unstable();
    locales
}
