/// 外部変換プロセスの起動
///
/// 変換コマンドを子プロセスとして起動し、完了まで待って
/// 出力を取り込む。1回の呼び出しで取得から解放まで完結し、
/// どの経路で抜けてもハンドルは閉じられる。
use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::Command;

use crate::runner::error::RunnerError;

/// 変換プロセス1回分の成功結果
///
/// 標準出力は呼び出し側が利用できるよう保持する
/// （変換ツールは成功時、通常何も出力しない）。
#[derive(Debug)]
pub struct Invocation {
    /// 取り込んだ標準出力
    #[allow(dead_code)]
    pub stdout: Vec<u8>,
}

/// 変換コマンドを起動し、完了まで待つ
///
/// 失敗は3種類で、先に該当したものが返る:
/// 1. 起動失敗（コマンドが見つからない・実行できない）
/// 2. エラー出力（終了コードにかかわらず、標準エラーに1バイトでも出たら失敗）
/// 3. 非ゼロ終了（シグナルによる終了はコード -1 として扱う）
///
/// タイムアウトやリトライは行わない。変換ツールが固まれば待ち続ける。
pub async fn invoke<S: AsRef<OsStr>>(
    command: &str,
    args: &[S],
) -> Result<Invocation, RunnerError> {
    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| RunnerError::spawn(command, e))?;

    // エラー出力は終了コードより優先する
    if !output.stderr.is_empty() {
        let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RunnerError::ErrorOutput {
            command: command.to_string(),
            detail,
        });
    }

    if !output.status.success() {
        return Err(RunnerError::NonZeroExit {
            command: command.to_string(),
            code: output.status.code().unwrap_or(-1),
        });
    }

    Ok(Invocation {
        stdout: output.stdout,
    })
}

/// 変換コマンドがシステム上で見つかるか確認する
pub async fn is_available(command: &str) -> bool {
    let locator = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    let result = Command::new(locator)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match result {
        Ok(status) => status.success(),
        Err(_) => false,
    }
}
