//! translated-literal
//!
//! Immutable multilingual text values: one piece of content in several locales, with a
//! default locale, strict locale validation and a JSON round-trip contract.

pub mod cli;
pub mod config;
pub mod error;
pub mod literal;
pub mod locale;
mod test_utils;

pub use error::LiteralError;
pub use literal::{
    JsonOptions,
    Literal,
};
pub use locale::Locale;
