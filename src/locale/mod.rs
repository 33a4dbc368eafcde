//! Supported locale set and locale normalization
/// Registry lookups
mod registry;
/// Embedded locale data
mod table;
/// Validated locale type
mod types;

pub use registry::{
    canonical_form_of,
    exists,
    normalize_locale,
    supported_locales,
};
pub use types::Locale;
