use crate::commands;
use crate::presentation::{output, progress};
use anyhow::{Context, Result, bail};

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// グローバルフラグ（--machine）とコマンドフラグ（--progress）を
/// 取り除いた残りを位置引数として扱う。
pub async fn parse_args(args: &[String]) -> Result<()> {
    let machine = has_flag(args, "--machine");
    let show_progress = has_flag(args, "--progress");
    let positional = positional_args(args);

    let Some(command) = positional.first() else {
        output::print_usage();
        return Ok(());
    };

    match command.as_str() {
        "convert" => {
            let input_dir = positional.get(1).map(|s| s.as_str());
            let output_dir = positional.get(2).map(|s| s.as_str());

            let result = commands::convert::execute(input_dir, output_dir, |p| {
                if show_progress {
                    progress::report(p, machine);
                }
            })
            .await
            .context("Convert command failed")?;

            output::output_result(&result, machine)
        }
        "check" => {
            let result = commands::check::execute()
                .await
                .context("Check command failed")?;

            output::output_result(&result, machine)
        }
        "help" => {
            output::print_usage();
            Ok(())
        }
        _ => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            command
        ),
    }
}

/// フラグの有無を確認する
fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// プログラム名とフラグを除いた位置引数を返す
fn positional_args(args: &[String]) -> Vec<&String> {
    args.iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_are_not_positional() {
        let args = args(&["watconv", "--machine", "convert", "in", "out", "--progress"]);

        assert!(has_flag(&args, "--machine"));
        assert!(has_flag(&args, "--progress"));

        let positional = positional_args(&args);
        assert_eq!(positional, vec!["convert", "in", "out"]);
    }

    #[test]
    fn test_no_arguments() {
        let args = args(&["watconv"]);
        assert!(positional_args(&args).is_empty());
        assert!(!has_flag(&args, "--machine"));
    }

    #[tokio::test]
    async fn test_unknown_command_is_rejected() {
        let args = args(&["watconv", "frobnicate"]);
        let result = parse_args(&args).await;
        assert!(result.is_err());
    }
}
