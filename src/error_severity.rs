//! プレゼンテーション層が使用するエラー深刻度
//!
//! このモジュールはアーキテクチャの最外層（プレゼンテーション層）に属し、
//! 終了コードの決定に使用される。
//!
//! **依存方向の原則:**
//! - 内側層（domain, runner, config）はこのモジュールに依存してOK
//! - このモジュールは他のモジュールに依存しない（独立）

use std::fmt;

/// エラーの深刻度と対応する終了コード
///
/// アーキテクチャ内の全レイヤーが共有する、最も抽象的なエラー分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// 入力ディレクトリが存在しない、変換ツールがソースファイルを
    /// 拒否したなど、ユーザーが直す可能性がある。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// 変換コマンドが起動できない、watconv.toml が壊れているなど、
    /// 環境・設定に問題がある。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ファイルシステム障害など、ユーザーが直せない外部要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
