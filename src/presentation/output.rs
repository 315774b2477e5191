/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
use anyhow::Result;
use serde::Serialize;

use crate::commands::result::CommandResult;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "watconv
Batch-convert text-format WebAssembly modules into binary form

Usage:
  watconv [--machine] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  convert [<input_dir> <output_dir>] [--progress]
                   - Convert every file in <input_dir> with the external
                     converter tool, writing results into <output_dir>
                     Defaults come from watconv.toml / built-in configuration
                     The output directory must already exist
                     --progress: Show per-file progress
  check            - Check that the converter tool can be found on this system
  help             - Display this help message

Machine-Readable Output:
  --machine convert              - JSON result object on stdout
  --machine check                - JSON availability report
  --machine convert --progress   - JSON progress events, one per line

Error Output:
  Normal mode:   Human-readable error messages to stderr
  --machine:     JSON error object with exit_code and hint fields";

/// コマンド使用方法を表示する
///
/// CLI引数が不正な場合や、ヘルプが必要な場合に呼び出されます。
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
///
/// # Output
/// * `machine_output = false`: 人間向けの詳細メッセージ（stderr）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        output_machine_readable(result)?;
    } else {
        output_human_readable(result);
    }

    Ok(())
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// すべての出力はstderrに送られ、stdoutはパイプライン用に予約されます。
fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Convert(r) => {
            eprintln!();
            if r.file_count == 0 {
                eprintln!("{}", result.success_message());
                eprintln!("Input directory '{}' is empty.", r.input_dir);
            } else {
                eprintln!("✓ {}", result.success_message());
                for record in &r.conversions {
                    eprintln!("  {} -> {}", record.source, record.target);
                }
                eprintln!();
                eprintln!("Output directory: {}", r.output_dir);
            }
        }
        CommandResult::Check(r) => {
            eprintln!();
            if r.available {
                eprintln!("✓ {}", result.success_message());
                eprintln!("Ready to convert.");
            } else {
                eprintln!("✗ {}", result.success_message());
                eprintln!("  Install it, or set [converter] command in watconv.toml.");
            }
        }
        CommandResult::Help => {
            print_usage();
        }
    }
}

/// 機械可読JSONを出力（stdout）
fn output_machine_readable(result: &CommandResult) -> Result<()> {
    let json = serde_json::to_string(result)?;
    println!("{}", json);
    Ok(())
}

/// 機械向けエラーオブジェクト
#[derive(Debug, Serialize)]
struct MachineError {
    error: String,
    chain: Vec<String>,
    exit_code: i32,
    hint: Option<String>,
}

/// エラーを機械可読JSONとして出力（stdout）
///
/// 出力に失敗した場合でも、エラー自体は人間向け形式でstderrに出す。
pub fn output_machine_error(error: &anyhow::Error, exit_code: i32, hint: Option<String>) {
    let payload = MachineError {
        error: error.to_string(),
        chain: error.chain().skip(1).map(|c| c.to_string()).collect(),
        exit_code,
        hint,
    };

    match serde_json::to_string(&payload) {
        Ok(json) => println!("{}", json),
        Err(_) => eprintln!("Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_error_payload_shape() {
        let error = anyhow::anyhow!("root cause")
            .context("middle")
            .context("outermost");

        let payload = MachineError {
            error: error.to_string(),
            chain: error.chain().skip(1).map(|c| c.to_string()).collect(),
            exit_code: 2,
            hint: Some("fix the config".to_string()),
        };

        let value = serde_json::to_value(&payload).expect("Serialization should succeed");
        assert_eq!(value["error"], "outermost");
        assert_eq!(value["chain"][0], "middle");
        assert_eq!(value["chain"][1], "root cause");
        assert_eq!(value["exit_code"], 2);
        assert_eq!(value["hint"], "fix the config");
    }
}
