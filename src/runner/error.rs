use std::io;
/// Runner層のエラー定義
///
/// 外部変換プロセスとのやり取りで発生する失敗を構造化して定義。
/// 失敗は3種類に限る: 起動失敗、エラー出力、非ゼロ終了。
/// #[source] を使って原因連鎖を保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// 変換コマンドを起動できなかった
    #[error("failed to launch converter '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// 変換コマンドが標準エラー出力に何か書いた
    ///
    /// 終了コードが 0 でもエラー出力があれば失敗として扱う。
    #[error("converter '{command}' reported errors: {detail}")]
    ErrorOutput { command: String, detail: String },

    /// 変換コマンドが非ゼロ終了した
    #[error("converter '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

impl RunnerError {
    /// 起動失敗エラーを生成
    pub fn spawn(command: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // コマンドが見つからない・実行できないのは環境設定の問題
            Self::Spawn { .. } => ErrorSeverity::ConfigError,
            // 変換ツールが入力を拒否したのは大抵ソースファイル側の問題
            Self::ErrorOutput { .. } => ErrorSeverity::UserError,
            Self::NonZeroExit { .. } => ErrorSeverity::UserError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Spawn { .. } => Some(
                "Ensure the converter tool is installed and on PATH, or set [converter] command in watconv.toml.",
            ),
            Self::ErrorOutput { .. } => {
                Some("The converter rejected the input. Check the source file for syntax errors.")
            }
            Self::NonZeroExit { .. } => {
                Some("The converter failed on this file. Run it manually to see the full output.")
            }
        }
    }
}
