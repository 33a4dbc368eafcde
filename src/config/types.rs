//! 設定の型とバリデーション

use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::literal::JsonOptions;
use crate::locale;

/// `json.indent` の上限
const MAX_INDENT: usize = 16;

/// 1 つの設定値に対する検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{setting}` {problem}")]
pub struct InvalidSetting {
    /// 設定ファイル上の名前 (例: "json.indent")
    pub setting: &'static str,
    pub problem: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid settings: {}", describe(.0))]
    Invalid(Vec<InvalidSetting>),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 検証エラーを 1 行にまとめる
fn describe(problems: &[InvalidSetting]) -> String {
    problems.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// `.translated-literal.json` の内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiteralSettings {
    /// CLI が出力する JSON の書式
    pub json: JsonOptions,

    /// `new` で `--locale` を省略したときのロケール
    /// (`en-us` / `en_US` どちらの表記も可)
    pub default_locale: Option<String>,
}

impl LiteralSettings {
    /// すべての問題をまとめて返す
    ///
    /// # Errors
    /// - サポート外の `defaultLocale`
    /// - 範囲外の `json.indent`
    pub fn validate(&self) -> Result<(), Vec<InvalidSetting>> {
        let mut problems = Vec::new();

        if let Some(default_locale) = &self.default_locale
            && !locale::exists(default_locale)
        {
            problems.push(InvalidSetting {
                setting: "defaultLocale",
                problem: format!("'{default_locale}' is not a supported locale (e.g. \"en_US\")"),
            });
        }

        if !(1..=MAX_INDENT).contains(&self.json.indent) {
            problems.push(InvalidSetting {
                setting: "json.indent",
                problem: format!("must be between 1 and {MAX_INDENT}, got {}", self.json.indent),
            });
        }

        if problems.is_empty() { Ok(()) } else { Err(problems) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    /// 検証に失敗した設定名を並べる
    fn failing_settings(settings: &LiteralSettings) -> Vec<&'static str> {
        settings.validate().unwrap_err().iter().map(|problem| problem.setting).collect()
    }

    /// validate: デフォルト値は有効
    #[rstest]
    fn validate_default_settings() {
        let settings = LiteralSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    /// deserialize: 一部だけ指定した場合は残りがデフォルト値になる
    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"json": {"pretty": true}}"#;

        let settings: LiteralSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.json.pretty, eq(true));
        assert_that!(settings.json.indent, eq(4));
        assert_that!(settings.default_locale, none());
    }

    /// deserialize: 空オブジェクト
    #[rstest]
    fn deserialize_empty_settings() {
        let settings: LiteralSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, LiteralSettings::default());
    }

    /// deserialize: `defaultLocale` はどの表記でも受け付ける
    #[rstest]
    #[case::hyphen("fr-ca")]
    #[case::underscore("fr_CA")]
    fn deserialize_default_locale(#[case] locale: &str) {
        let json = format!(r#"{{"defaultLocale": "{locale}"}}"#);

        let settings: LiteralSettings = serde_json::from_str(&json).unwrap();

        assert_that!(settings.default_locale, some(eq(locale)));
        assert_that!(settings.validate(), ok(anything()));
    }

    /// validate: サポート外のロケール
    #[rstest]
    fn validate_unsupported_default_locale() {
        let settings = LiteralSettings {
            default_locale: Some("xx_YY".to_string()),
            ..LiteralSettings::default()
        };

        let problems = settings.validate().unwrap_err();

        assert_eq!(failing_settings(&settings), vec!["defaultLocale"]);
        assert_that!(problems[0].problem, contains_substring("'xx_YY'"));
    }

    /// validate: インデント幅の範囲外
    #[rstest]
    #[case::zero(0)]
    #[case::too_wide(17)]
    fn validate_indent_out_of_range(#[case] indent: usize) {
        let settings = LiteralSettings {
            json: JsonOptions { pretty: true, indent },
            ..LiteralSettings::default()
        };

        assert_eq!(failing_settings(&settings), vec!["json.indent"]);
    }

    /// ConfigError: すべての問題が 1 行に並ぶ
    #[rstest]
    fn config_error_lists_every_problem() {
        let settings = LiteralSettings {
            json: JsonOptions { pretty: false, indent: 0 },
            default_locale: Some(String::new()),
        };

        let error = ConfigError::Invalid(settings.validate().unwrap_err());

        assert_that!(
            error.to_string(),
            eq("invalid settings: `defaultLocale` '' is not a supported locale (e.g. \"en_US\"); \
                `json.indent` must be between 1 and 16, got 0")
        );
    }
}
