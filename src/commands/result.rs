/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層（main.rs/cli.rs）で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Convert(ConvertResult),
    Check(CheckResult),
    Help,
}

/// 変換コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    /// 変換元ディレクトリ
    pub input_dir: String,
    /// 変換先ディレクトリ
    pub output_dir: String,
    /// 変換したファイル数
    pub file_count: usize,
    /// 変換したファイルの対応（列挙順）
    pub conversions: Vec<ConversionRecord>,
}

/// 1ファイル分の変換記録
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    /// 入力ファイル名
    pub source: String,
    /// 出力ファイル名
    pub target: String,
}

/// チェックコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// 確認した変換コマンド
    pub command: String,
    /// システム上で見つかったか
    pub available: bool,
}

impl CommandResult {
    /// 成功メッセージを取得（人間向け出力用）
    pub fn success_message(&self) -> String {
        match self {
            CommandResult::Convert(r) => {
                if r.file_count == 0 {
                    "No files to convert.".to_string()
                } else {
                    format!("Converted {} file(s).", r.file_count)
                }
            }
            CommandResult::Check(r) => {
                if r.available {
                    format!("Converter '{}' is available.", r.command)
                } else {
                    format!("Converter '{}' was not found.", r.command)
                }
            }
            CommandResult::Help => "".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_output_shape() {
        let result = CommandResult::Convert(ConvertResult {
            input_dir: "tests/wat".to_string(),
            output_dir: "tests/wasm".to_string(),
            file_count: 1,
            conversions: vec![ConversionRecord {
                source: "add.wat".to_string(),
                target: "add.wasm".to_string(),
            }],
        });

        let value = serde_json::to_value(&result).expect("Serialization should succeed");
        assert_eq!(value["command"], "convert");
        assert_eq!(value["file_count"], 1);
        assert_eq!(value["conversions"][0]["target"], "add.wasm");
    }

    #[test]
    fn test_success_messages() {
        let empty = CommandResult::Convert(ConvertResult {
            input_dir: "tests/wat".to_string(),
            output_dir: "tests/wasm".to_string(),
            file_count: 0,
            conversions: vec![],
        });
        assert_eq!(empty.success_message(), "No files to convert.");

        let check = CommandResult::Check(CheckResult {
            command: "wat2wasm".to_string(),
            available: false,
        });
        assert!(check.success_message().contains("not found"));
    }
}
