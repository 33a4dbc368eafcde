//! コマンドラインツールの設定
/// 設定ファイルの読み込み
mod loader;
/// 設定の管理
mod manager;
/// 設定の型とバリデーション
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    InvalidSetting,
    LiteralSettings,
};
