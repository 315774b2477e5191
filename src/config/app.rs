/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません（watconv.toml と
/// コマンドライン引数による上書きは config::EffectiveConfig が担当）。
use std::sync::LazyLock;

use serde::Deserialize;

/// ビルド時設定のグローバルインスタンス
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub converter: ConverterConfig,
    pub paths: PathsConfig,
}

/// 変換ツール関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// テキスト形式モジュールをバイナリ形式に変換する外部コマンド
    pub command: String,
}

/// 入出力ディレクトリの既定値
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// 変換元ディレクトリ
    pub input_dir: String,

    /// 変換先ディレクトリ（事前に存在している必要がある）
    pub output_dir: String,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    /// これはビルド時設定なので、実行時エラーではなくビルドの欠陥として扱うべきです。
    pub fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}
