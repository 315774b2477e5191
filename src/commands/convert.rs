/// 変換コマンド
///
/// 入力ディレクトリの全ファイルを外部変換ツールで1件ずつ変換する。
/// 1件の変換が完全に終わる（成功または失敗する）まで次の変換は始めない。
/// 最初の失敗で即座に中断し、以降のファイルには手を付けない。
/// 途中まで書き出された出力ファイルの後始末はしない。
use std::ffi::OsStr;

use anyhow::{Context, Result};

use crate::commands::result::{CommandResult, ConversionRecord, ConvertResult};
use crate::config::EffectiveConfig;
use crate::domain::progress::{ConvertPhase, ConvertProgress};
use crate::domain::{planner, validator};
use crate::runner::invoker;

/// 変換コマンドを実行する
///
/// # 引数
/// * `input_dir` - 変換元ディレクトリ（省略時は設定値）
/// * `output_dir` - 変換先ディレクトリ（省略時は設定値）
/// * `progress` - 進捗イベントの通知先
///
/// # エラー
/// このレイヤーでは anyhow::Result を返し、
/// ドメイン層・runner層・config層のエラーを集約する。
pub async fn execute(
    input_dir: Option<&str>,
    output_dir: Option<&str>,
    progress: impl Fn(&ConvertProgress),
) -> Result<CommandResult> {
    let config = EffectiveConfig::resolve(input_dir, output_dir)
        .context("Failed to load configuration. Please check your watconv.toml file.")?;

    let result = run(&config, progress).await?;
    Ok(CommandResult::Convert(result))
}

/// 解決済み設定で変換を1周実行する
///
/// ファイルは列挙された順のまま処理する。並び替えも並列化もしない。
pub async fn run(
    config: &EffectiveConfig,
    progress: impl Fn(&ConvertProgress),
) -> Result<ConvertResult> {
    validator::validate_directories(&config.input_dir, &config.output_dir)
        .context("Directory validation failed")?;

    progress(&ConvertProgress::new(ConvertPhase::ScanningDirectory {
        input_dir: config.input_dir.clone(),
    }));

    let plan = planner::plan_conversions(&config.input_dir, &config.output_dir)
        .context("Failed to enumerate input files")?;

    progress(&ConvertProgress::new(ConvertPhase::DirectoryScanned {
        file_count: plan.len(),
    }));

    let total = plan.len();
    let mut conversions = Vec::with_capacity(total);

    for (i, pair) in plan.iter().enumerate() {
        let index = i + 1;

        progress(&ConvertProgress::new(ConvertPhase::ConvertingFile {
            file_name: pair.file_name.clone(),
            index,
            total,
        }));

        // 成功した呼び出しの標準出力はここでは使わない
        invoker::invoke(
            &config.converter_command,
            &[
                pair.source.as_os_str(),
                OsStr::new("-o"),
                pair.target.as_os_str(),
            ],
        )
        .await
        .with_context(|| format!("Conversion failed for '{}'", pair.file_name))?;

        progress(&ConvertProgress::new(ConvertPhase::FileConverted {
            file_name: pair.file_name.clone(),
            output_name: pair.output_name.clone(),
            index,
            total,
        }));

        conversions.push(ConversionRecord {
            source: pair.file_name.clone(),
            target: pair.output_name.clone(),
        });
    }

    progress(&ConvertProgress::new(ConvertPhase::Completed {
        converted: total,
    }));

    Ok(ConvertResult {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        file_count: total,
        conversions,
    })
}
