/// ドメイン層のエラー定義
///
/// 変換対象の列挙に関する制約違反を構造化して定義。
/// 変換ツールそのものの失敗は runner 層のエラーとして扱い、ここには含めない。
use std::io;

use thiserror::Error;

use crate::error_severity::ErrorSeverity;

#[derive(Error, Debug)]
pub enum DomainError {
    /// 入力ディレクトリが見つからない
    #[error("input directory not found: {path}")]
    InputDirNotFound { path: String },

    /// 出力ディレクトリが見つからない
    ///
    /// watconv は出力ディレクトリを作成しない。
    #[error("output directory not found: {path}")]
    OutputDirNotFound { path: String },

    /// ディレクトリが期待される場所にファイルが指定された
    #[error("'{path}' is not a directory")]
    NotADirectory { path: String },

    /// 入力ディレクトリの列挙に失敗
    #[error("failed to read directory: {path}")]
    DirectoryUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DomainError {
    /// 入力ディレクトリ不在エラーを生成
    pub fn input_dir_not_found(path: impl Into<String>) -> Self {
        Self::InputDirNotFound { path: path.into() }
    }

    /// 出力ディレクトリ不在エラーを生成
    pub fn output_dir_not_found(path: impl Into<String>) -> Self {
        Self::OutputDirNotFound { path: path.into() }
    }

    /// 非ディレクトリ指定エラーを生成
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// ディレクトリ列挙失敗エラーを生成
    pub fn directory_unreadable(path: impl Into<String>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputDirNotFound { .. } => ErrorSeverity::UserError,
            Self::OutputDirNotFound { .. } => ErrorSeverity::UserError,
            Self::NotADirectory { .. } => ErrorSeverity::UserError,
            Self::DirectoryUnreadable { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InputDirNotFound { .. } => {
                Some("Please check the input directory path and ensure it exists.")
            }
            Self::OutputDirNotFound { .. } => {
                Some("Create the output directory first; watconv does not create it.")
            }
            Self::NotADirectory { .. } => Some("Please specify a directory, not a file."),
            Self::DirectoryUnreadable { .. } => {
                Some("Check read permissions on the input directory.")
            }
        }
    }
}
