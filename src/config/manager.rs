//! 有効な設定の管理

use std::path::Path;

use super::{
    ConfigError,
    LiteralSettings,
    loader,
};

/// 検証済みの設定だけを保持する
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在有効な設定
    settings: LiteralSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { settings: LiteralSettings::default() }
    }

    /// `config_dir` の設定ファイルを読み込んで適用する
    ///
    /// ファイルがなければデフォルト値を適用する。失敗時は現在の設定を保つ。
    pub fn load_settings(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let settings = loader::load_from_dir(config_dir)?.unwrap_or_default();
        self.update_settings(settings)
    }

    /// 検証してから設定を差し替える (コマンドライン引数による上書きにも使う)
    pub fn update_settings(&mut self, settings: LiteralSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::Invalid)?;

        tracing::debug!("Applying settings: {:?}", settings);
        self.settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &LiteralSettings {
        &self.settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::literal::JsonOptions;

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings(), &LiteralSettings::default());
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"json": {"pretty": true}, "defaultLocale": "fr_CA"}"#;
        fs::write(temp_dir.path().join(loader::CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        manager.load_settings(temp_dir.path()).unwrap();

        assert!(manager.get_settings().json.pretty);
        assert_eq!(manager.get_settings().default_locale.as_deref(), Some("fr_CA"));
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        manager.load_settings(temp_dir.path()).unwrap();

        assert_eq!(manager.get_settings().json, JsonOptions::default());
    }

    /// load_settings: 無効な設定ファイルでは現在の設定を保つ
    #[rstest]
    fn test_load_settings_invalid_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(loader::CONFIG_FILE_NAME), r#"{"defaultLocale": "xx"}"#)
            .unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert!(manager.get_settings().default_locale.is_none());
    }

    /// update_settings: 有効な設定で更新成功
    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let new_settings = LiteralSettings {
            json: JsonOptions { pretty: true, indent: 2 },
            ..LiteralSettings::default()
        };

        manager.update_settings(new_settings.clone()).unwrap();

        assert_eq!(manager.get_settings(), &new_settings);
    }

    /// update_settings: 無効な設定は適用されない
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let mut new_settings = LiteralSettings::default();
        new_settings.json.indent = 0;

        let result = manager.update_settings(new_settings);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(manager.get_settings().json.indent, 4);
    }
}
