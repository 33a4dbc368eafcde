//! Multilingual literal and its JSON contract
/// JSON rendering and parsing
mod json;
/// Literal value type
mod types;

pub use json::{
    JsonOptions,
    SerializedLiteral,
};
pub use types::Literal;
