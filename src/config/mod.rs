/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - ビルド時にコンパイル時定数として定義される静的設定（APP_CONFIG）
/// 2. UserConfig - 実行時にカレントディレクトリの watconv.toml から読み込まれる上書き設定
///
/// 実際の実行に使う値は EffectiveConfig が解決します。
/// 優先順位: コマンドライン引数 > watconv.toml > 埋め込み config.toml
pub mod app;
pub mod error;
pub mod user;

pub use app::APP_CONFIG;
pub use user::UserConfig;

use crate::config::error::ConfigError;

/// 1回の実行に適用される解決済み設定
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// 変換に使用する外部コマンド
    pub converter_command: String,

    /// 変換元ディレクトリ
    pub input_dir: String,

    /// 変換先ディレクトリ
    pub output_dir: String,
}

impl EffectiveConfig {
    /// コマンドライン引数とユーザー設定から実効設定を解決する
    ///
    /// # Errors
    /// ユーザー設定の読み込みに失敗した場合に ConfigError を返します。
    pub fn resolve(
        cli_input_dir: Option<&str>,
        cli_output_dir: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let user = UserConfig::load()?;
        Ok(Self::resolve_with(user, cli_input_dir, cli_output_dir))
    }

    /// 読み込み済みのユーザー設定に対して解決を行う
    ///
    /// 設定ファイルI/Oと解決ロジックを分離し、後者を単体テスト可能にする。
    pub fn resolve_with(
        user: UserConfig,
        cli_input_dir: Option<&str>,
        cli_output_dir: Option<&str>,
    ) -> Self {
        Self {
            converter_command: user
                .converter
                .command
                .unwrap_or_else(|| APP_CONFIG.converter.command.clone()),
            input_dir: cli_input_dir
                .map(str::to_string)
                .or(user.paths.input_dir)
                .unwrap_or_else(|| APP_CONFIG.paths.input_dir.clone()),
            output_dir: cli_output_dir
                .map(str::to_string)
                .or(user.paths.output_dir)
                .unwrap_or_else(|| APP_CONFIG.paths.output_dir.clone()),
        }
    }
}
