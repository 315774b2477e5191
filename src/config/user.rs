/// ユーザー設定モジュール
///
/// カレントディレクトリの watconv.toml から読み込まれる上書き設定を管理します。
/// ファイルが存在しない場合はエラーではなく、すべて既定値のままになります。
///
/// ```toml
/// [converter]
/// command = "wat2wasm"
///
/// [paths]
/// input_dir = "fixtures/wat"
/// output_dir = "fixtures/wasm"
/// ```
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::error::ConfigError;

/// ユーザー設定ファイル名（カレントディレクトリから読み込む）
pub const USER_CONFIG_FILE: &str = "watconv.toml";

/// ユーザー設定
///
/// 各フィールドは省略可能で、省略された項目は埋め込み設定の値が使われる。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    /// 変換ツールの上書き
    #[serde(default)]
    pub converter: ConverterOverride,

    /// 入出力ディレクトリの上書き
    #[serde(default)]
    pub paths: PathsOverride,
}

/// 変換ツール設定の上書き
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConverterOverride {
    pub command: Option<String>,
}

/// 入出力ディレクトリ設定の上書き
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsOverride {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
}

impl UserConfig {
    /// カレントディレクトリのユーザー設定を読み込む
    ///
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    ///
    /// # Errors
    /// 設定ファイルの読み込み、パース、または検証に失敗した場合に ConfigError を返します。
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(USER_CONFIG_FILE))
    }

    /// 指定パスからユーザー設定を読み込む
    ///
    /// ファイルが存在しない場合はデフォルト（上書きなし）を返します。
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", path.display()),
                e,
            )
        })?;

        // 自動検証（Fail Fast）
        config.validate()?;

        Ok(config)
    }

    /// 設定値を検証する
    ///
    /// 上書きとして指定された値が空文字列の場合はエラーにする。
    /// 空のコマンドや空のディレクトリ名は実行段階で意味不明な失敗になるため、
    /// ここで弾く。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(command) = &self.converter.command {
            if command.trim().is_empty() {
                return Err(ConfigError::validation(
                    "[converter] command must not be empty",
                ));
            }
        }

        if let Some(input_dir) = &self.paths.input_dir {
            if input_dir.trim().is_empty() {
                return Err(ConfigError::validation(
                    "[paths] input_dir must not be empty",
                ));
            }
        }

        if let Some(output_dir) = &self.paths.output_dir {
            if output_dir.trim().is_empty() {
                return Err(ConfigError::validation(
                    "[paths] output_dir must not be empty",
                ));
            }
        }

        Ok(())
    }
}
