//! Test helpers shared by the unit test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::literal::Literal;

/// Builds a literal from a default `(locale, text)` pair plus extra translations.
///
/// # Panics
/// When any locale is not supported.
pub(crate) fn literal(default: (&str, &str), translations: &[(&str, &str)]) -> Literal {
    let (locale, text) = default;
    translations
        .iter()
        .fold(Literal::new(locale, text).unwrap(), |literal, (locale, text)| {
            literal.with_translation(locale, *text).unwrap()
        })
}
