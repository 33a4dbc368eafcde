//! JSON representation of a literal
//!
//! A literal serializes as
//! `{"locale": "<canonical default locale>", "content": {"<locale key>": "<text>", ...}}`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use serde_json::ser::PrettyFormatter;
use serde_json::{
    Map,
    Value,
};

use super::Literal;
use crate::error::LiteralError;
use crate::locale::Locale;

/// Formatting options for [`Literal::to_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonOptions {
    /// Pretty print with one entry per line
    pub pretty: bool,
    /// Spaces per indentation level when pretty printing
    pub indent: usize,
}

impl JsonOptions {
    /// Pretty printing with the default indentation.
    #[must_use]
    pub const fn pretty_printed() -> Self {
        Self { pretty: true, indent: 4 }
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: false, indent: 4 }
    }
}

/// Plain data form of a literal, as written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SerializedLiteral {
    /// Canonical form of the default locale (`fr_CA`)
    pub locale: String,
    /// Normalized locale key (`fr-ca`) to text
    pub content: BTreeMap<String, String>,
}

impl Literal {
    #[must_use]
    pub fn to_serializable(&self) -> SerializedLiteral {
        SerializedLiteral {
            locale: self.locale().to_string(),
            content: self
                .translations
                .iter()
                .map(|(locale, text)| (locale.key().to_string(), text.clone()))
                .collect(),
        }
    }

    /// Renders the literal as JSON text.
    pub fn to_json(&self, options: JsonOptions) -> Result<String, LiteralError> {
        let serializable = self.to_serializable();

        if !options.pretty {
            return serde_json::to_string(&serializable).map_err(LiteralError::Serialization);
        }

        let indent = " ".repeat(options.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        serializable.serialize(&mut serializer).map_err(LiteralError::Serialization)?;

        String::from_utf8(buffer).map_err(|e| {
            LiteralError::Serialization(<serde_json::Error as serde::ser::Error>::custom(e))
        })
    }

    /// Rebuilds a literal from its JSON text.
    ///
    /// Missing `locale` is treated as an empty string and therefore rejected as an
    /// invalid locale. Missing `content` is treated as an empty object. Entries are
    /// applied in document order. Nothing is returned unless every entry of `content`
    /// is valid.
    ///
    /// No entry is added for the default locale when `content` has none, so
    /// `Literal::from_json(&literal.to_string())` equals `literal`.
    ///
    /// # Examples
    /// ```
    /// use translated_literal::Literal;
    ///
    /// let literal = Literal::from_json(
    ///     r#"{"locale":"fr_CA","content":{"fr_CA":"Bonjour","en_US":"Hello"}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(literal.default_text(), "Bonjour");
    /// assert_eq!(literal.translate("en-us"), "Hello");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LiteralError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            tracing::warn!("Rejected literal JSON: {}", e);
            LiteralError::malformed(e.to_string())
        })?;

        Self::from_value(value)
    }

    /// Rebuilds a literal from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, LiteralError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(LiteralError::malformed(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )));
            }
        };

        let locale = match object.remove("locale") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(locale)) => locale,
            Some(other) => {
                return Err(LiteralError::malformed(format!(
                    "`locale` must be a string, found {}",
                    kind_of(&other)
                )));
            }
        };

        let content = match object.remove("content") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(content)) => content,
            Some(other) => {
                return Err(LiteralError::malformed(format!(
                    "`content` must be an object, found {}",
                    kind_of(&other)
                )));
            }
        };

        let default_locale = Locale::parse(&locale)?;

        // Document order: the last spelling of a locale wins, and the first bad key is reported.
        let mut translations = BTreeMap::new();
        for (key, value) in content {
            let text = match value {
                Value::String(text) => text,
                other => {
                    return Err(LiteralError::malformed(format!(
                        "translation for `{key}` must be a string, found {}",
                        kind_of(&other)
                    )));
                }
            };
            translations.insert(Locale::parse(&key)?, text);
        }

        tracing::debug!(
            "Loaded literal {} with {} translation(s)",
            default_locale,
            translations.len()
        );

        Ok(Self { default_locale, translations })
    }
}

/// JSON type name used in error messages
const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json(JsonOptions::default()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl FromStr for Literal {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_serializable().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
