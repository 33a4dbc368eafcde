//! Command line front end
//!
//! Commands that operate on an existing literal read its JSON from stdin or `--input`.

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use thiserror::Error;

use crate::config::LiteralSettings;
use crate::error::LiteralError;
use crate::literal::Literal;
use crate::locale::{
    self,
    Locale,
};

/// Create, inspect and edit multilingual literals stored as JSON.
#[derive(Parser, Debug)]
#[command(name = "translated-literal", version, about)]
pub struct Cli {
    /// Read the literal JSON from this file instead of stdin
    #[arg(long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory containing `.translated-literal.json` (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Indent width for pretty printed JSON (implies --pretty)
    #[arg(long, global = true, value_name = "N")]
    pub indent: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// `settings` with the formatting flags given on the command line.
    ///
    /// The result still has to go through [`ConfigManager::update_settings`] to be
    /// validated.
    ///
    /// [`ConfigManager::update_settings`]: crate::config::ConfigManager::update_settings
    #[must_use]
    pub fn apply_to(&self, settings: &LiteralSettings) -> LiteralSettings {
        let mut settings = settings.clone();
        if self.pretty {
            settings.json.pretty = true;
        }
        if let Some(indent) = self.indent {
            settings.json.pretty = true;
            settings.json.indent = indent;
        }
        settings
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a literal and print its JSON
    New {
        /// Default locale (falls back to `defaultLocale` from the settings)
        #[arg(long)]
        locale: Option<String>,
        /// Text for the default locale
        text: String,
    },
    /// Print the default locale and its text
    Show,
    /// Print the translation for a locale (empty when missing)
    Translate { locale: String },
    /// Add or replace a translation
    Set { locale: String, text: String },
    /// Change the default locale
    Default { locale: String },
    /// Validate and re-emit a literal
    Format,
    /// List every supported locale
    Locales,
    /// Print the canonical form of a locale
    Check { locale: String },
}

impl Command {
    /// Whether the command needs a literal as input.
    #[must_use]
    pub const fn reads_literal(&self) -> bool {
        matches!(
            self,
            Self::Show | Self::Translate { .. } | Self::Set { .. } | Self::Default { .. } | Self::Format
        )
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Literal(#[from] LiteralError),

    #[error("No locale given: pass --locale or set defaultLocale in the settings file")]
    MissingLocale,

    #[error("No literal JSON was provided")]
    MissingInput,
}

/// Runs `command` and returns what should be printed.
pub fn execute(
    command: &Command,
    input: Option<&str>,
    settings: &LiteralSettings,
) -> Result<String, CliError> {
    tracing::debug!("Executing {:?}", command);

    let output = match command {
        Command::New { locale, text } => {
            let locale = locale
                .as_deref()
                .or(settings.default_locale.as_deref())
                .ok_or(CliError::MissingLocale)?;
            Literal::new(locale, text.as_str())?.to_json(settings.json)?
        }
        Command::Show => {
            let literal = read_literal(input)?;
            format!("{}\t{}", literal.locale(), literal.default_text())
        }
        Command::Translate { locale } => read_literal(input)?.translate(locale).to_string(),
        Command::Set { locale, text } => {
            read_literal(input)?.with_translation(locale, text.as_str())?.to_json(settings.json)?
        }
        Command::Default { locale } => {
            read_literal(input)?.with_locale(locale)?.to_json(settings.json)?
        }
        Command::Format => read_literal(input)?.to_json(settings.json)?,
        Command::Locales => locale::supported_locales()
            .into_iter()
            .map(Locale::canonical)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Check { locale } => locale::canonical_form_of(locale)?.to_string(),
    };

    Ok(output)
}

fn read_literal(input: Option<&str>) -> Result<Literal, CliError> {
    let input = input.ok_or(CliError::MissingInput)?;
    Ok(Literal::from_json(input)?)
}
