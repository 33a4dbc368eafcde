//! 設定ファイルの読み込み

use std::path::Path;

use super::{
    ConfigError,
    LiteralSettings,
};

/// 設定ディレクトリ内で探すファイル名
pub(super) const CONFIG_FILE_NAME: &str = ".translated-literal.json";

/// `config_dir` の設定ファイルを読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: ファイルがあり、パースに成功
/// - `Ok(None)`: ファイルがない
/// - `Err(ConfigError)`: 読み込みまたはパースの失敗 (パス付き)
pub(super) fn load_from_dir(config_dir: &Path) -> Result<Option<LiteralSettings>, ConfigError> {
    let path = config_dir.join(CONFIG_FILE_NAME);

    if !path.is_file() {
        tracing::debug!("No settings file at {:?}, using defaults", path);
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
    let settings = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

    tracing::debug!("Read settings from {:?}", path);
    Ok(Some(settings))
}
