/// チェックコマンド
///
/// 設定されている変換コマンドがシステム上で見つかるかを確認します。
/// 見つからなくてもコマンド自体は成功として報告し、結果に可否を載せる。
use anyhow::{Context, Result};

use crate::commands::result::{CheckResult, CommandResult};
use crate::config::EffectiveConfig;
use crate::runner::invoker;

/// チェックコマンドを実行
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute() -> Result<CommandResult> {
    let config = EffectiveConfig::resolve(None, None)
        .context("Failed to load configuration. Please check your watconv.toml file.")?;

    let available = invoker::is_available(&config.converter_command).await;

    Ok(CommandResult::Check(CheckResult {
        command: config.converter_command,
        available,
    }))
}
