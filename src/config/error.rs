/// Config層のエラー定義
///
/// 設定ファイルの読み込みとパースに関するエラーを構造化して定義。
/// 外部エラー(std::io::Error, toml::de::Error等)の発信元を適切に保持する。
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// ファイルシステムエラー
    #[error("file system error: {context}")]
    FileSystem {
        context: String,
        #[source]
        source: io::Error,
    },

    /// 設定ファイルのパースエラー
    #[error("failed to parse config file: {context}")]
    ParseError {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    /// 設定の検証エラー
    #[error("configuration validation failed: {message}")]
    ValidationError { message: String },
}

/// Config層エラーの深刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorSeverity {
    /// 設定エラー（exit code: 2）
    ConfigError,
    /// システムエラー（exit code: 3）
    SystemError,
}

impl ConfigErrorSeverity {
    /// 終了コードを返す
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl ConfigError {
    /// ファイルシステムエラーを生成
    pub fn file_system(context: impl Into<String>, source: io::Error) -> Self {
        Self::FileSystem {
            context: context.into(),
            source,
        }
    }

    /// パースエラーを生成
    pub fn parse_error(context: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ParseError {
            context: context.into(),
            source,
        }
    }

    /// 検証エラーを生成
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ConfigErrorSeverity {
        match self {
            Self::FileSystem { .. } => ConfigErrorSeverity::SystemError,
            Self::ParseError { .. } => ConfigErrorSeverity::ConfigError,
            Self::ValidationError { .. } => ConfigErrorSeverity::ConfigError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileSystem { .. } => {
                Some("Check file permissions on watconv.toml and the current directory.")
            }
            Self::ParseError { .. } => {
                Some("watconv.toml may be corrupted. Fix the TOML syntax or delete the file to use defaults.")
            }
            Self::ValidationError { .. } => {
                Some("Review watconv.toml and ensure all overridden values are non-empty.")
            }
        }
    }
}
