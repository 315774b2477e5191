use serde::Serialize;
/// ドメイン層: 変換進捗イベント定義
///
/// 変換処理の各段階をビジネスロジックのイベントとして表現します。
/// プレゼンテーション層はこれらのイベントを受け取り、
/// 人間向けの進捗表示や機械向けの制御に使用します。
use std::time::SystemTime;

/// 変換処理の各段階を表すイベント
///
/// # 設計意図
/// - ビジネスロジック（処理フロー）の可視化
/// - プレゼンテーション層での柔軟な出力制御
/// - 機械可読出力のためにSerialize可能
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ConvertPhase {
    /// 入力ディレクトリの走査開始
    ScanningDirectory { input_dir: String },

    /// 走査完了
    DirectoryScanned { file_count: usize },

    /// 1ファイルの変換開始（index は 1 始まり）
    ConvertingFile {
        file_name: String,
        index: usize,
        total: usize,
    },

    /// 1ファイルの変換完了
    FileConverted {
        file_name: String,
        output_name: String,
        index: usize,
        total: usize,
    },

    /// 全ファイルの変換完了
    Completed { converted: usize },
}

/// 変換進捗情報
///
/// 各処理段階のイベントとタイムスタンプを保持します。
#[derive(Debug, Clone, Serialize)]
pub struct ConvertProgress {
    /// 処理段階（機械可読出力ではトップレベルに展開される）
    #[serde(flatten)]
    pub phase: ConvertPhase,
    /// イベント発生時刻（将来の分析や詳細ログ用に保持）
    #[serde(skip)]
    #[allow(dead_code)]
    pub timestamp: SystemTime,
}

impl ConvertProgress {
    /// 新しい進捗情報を作成
    pub fn new(phase: ConvertPhase) -> Self {
        Self {
            phase,
            timestamp: SystemTime::now(),
        }
    }
}
