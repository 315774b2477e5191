/// プレゼンテーション層: 変換進捗表示DTO
///
/// ドメイン層の`ConvertProgress`をUI表示に適した形式に変換します。
/// この変換により、プレゼンテーション層がドメイン層の実装詳細に
/// 依存しないようにします。
///
/// # 設計方針
/// - `From<&ConvertProgress>`で借用による変換（所有権を奪わない）
/// - `Option<DisplayProgress>`で表示抑制を明示的に表現

use crate::domain::progress::{ConvertPhase, ConvertProgress};

/// 進捗表示のカテゴリ
///
/// UIでの表示方法を決定するためのメタ情報
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressCategory {
    /// ディレクトリ走査中
    Scan,
    /// ファイル変換中
    Convert,
    /// 完了
    Completed,
}

/// プレゼンテーション層用の進捗情報
///
/// ドメイン層の`ConvertProgress`から生成され、
/// UI表示に必要な情報のみを保持します。
#[derive(Debug, Clone)]
pub struct DisplayProgress {
    /// 表示用メッセージ
    pub message: String,
    /// 進捗カテゴリ
    pub category: ProgressCategory,
}

impl DisplayProgress {
    /// 新しい表示用進捗情報を作成
    pub fn new(message: String, category: ProgressCategory) -> Self {
        Self { message, category }
    }
}

/// ドメイン層の`ConvertProgress`からプレゼンテーション層の`DisplayProgress`への変換
///
/// # 戻り値
/// - `Some(DisplayProgress)`: 表示すべき進捗情報
/// - `None`: 表示を抑制（例: 変換完了イベント。次の変換開始行と
///   最終サマリーで伝わるため、1ファイルにつき1行に抑える）
impl From<&ConvertProgress> for Option<DisplayProgress> {
    fn from(progress: &ConvertProgress) -> Self {
        match &progress.phase {
            ConvertPhase::ScanningDirectory { input_dir } => Some(DisplayProgress::new(
                format!("Scanning directory: {}", input_dir),
                ProgressCategory::Scan,
            )),
            ConvertPhase::DirectoryScanned { file_count } => Some(DisplayProgress::new(
                format!("Found {} file(s) to convert", file_count),
                ProgressCategory::Scan,
            )),
            ConvertPhase::ConvertingFile {
                file_name,
                index,
                total,
            } => Some(DisplayProgress::new(
                format!("[{}/{}] Converting: {}", index, total, file_name),
                ProgressCategory::Convert,
            )),
            ConvertPhase::FileConverted { .. } => None,
            ConvertPhase::Completed { converted } => Some(DisplayProgress::new(
                format!("All {} conversion(s) completed", converted),
                ProgressCategory::Completed,
            )),
        }
    }
}

/// 進捗イベントを出力する
///
/// # Output
/// * 人間向け: `DisplayProgress`に変換してstderrへ（抑制対象はスキップ）
/// * 機械向け: イベントをそのままJSONでstdoutへ（抑制せず全件）
pub fn report(progress: &ConvertProgress, machine_output: bool) {
    if machine_output {
        if let Ok(json) = serde_json::to_string(progress) {
            println!("{}", json);
        }
    } else if let Some(display) = Option::<DisplayProgress>::from(progress) {
        let prefix = match display.category {
            ProgressCategory::Completed => "✓ ",
            _ => "",
        };
        eprintln!("{}{}", prefix, display.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanning_directory_display() {
        let domain_progress = ConvertProgress::new(ConvertPhase::ScanningDirectory {
            input_dir: "tests/wat".to_string(),
        });

        let display = Option::<DisplayProgress>::from(&domain_progress)
            .expect("update should be displayed");

        assert_eq!(display.message, "Scanning directory: tests/wat");
        assert_eq!(display.category, ProgressCategory::Scan);
    }

    #[test]
    fn test_converting_file_display() {
        let domain_progress = ConvertProgress::new(ConvertPhase::ConvertingFile {
            file_name: "add.wat".to_string(),
            index: 2,
            total: 3,
        });

        let display = Option::<DisplayProgress>::from(&domain_progress)
            .expect("update should be displayed");

        assert_eq!(display.message, "[2/3] Converting: add.wat");
        assert_eq!(display.category, ProgressCategory::Convert);
    }

    #[test]
    fn test_file_converted_is_suppressed() {
        // 変換完了イベントは人間向け表示では抑制される
        let domain_progress = ConvertProgress::new(ConvertPhase::FileConverted {
            file_name: "add.wat".to_string(),
            output_name: "add.wasm".to_string(),
            index: 1,
            total: 3,
        });

        let display = Option::<DisplayProgress>::from(&domain_progress);
        assert!(display.is_none(), "FileConverted should be suppressed");
    }

    #[test]
    fn test_completed_display() {
        let domain_progress =
            ConvertProgress::new(ConvertPhase::Completed { converted: 3 });

        let display = Option::<DisplayProgress>::from(&domain_progress)
            .expect("update should be displayed");

        assert_eq!(display.message, "All 3 conversion(s) completed");
        assert_eq!(display.category, ProgressCategory::Completed);
    }

    #[test]
    fn test_machine_event_serialization() {
        let domain_progress = ConvertProgress::new(ConvertPhase::DirectoryScanned {
            file_count: 2,
        });

        let value = serde_json::to_value(&domain_progress).expect("Serialization");
        assert_eq!(value["phase"], "directory_scanned");
        assert_eq!(value["file_count"], 2);
    }
}
