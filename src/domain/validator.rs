/// ドメインサービス: ディレクトリバリデーション
///
/// 変換を始める前に入出力ディレクトリの前提条件を検証する。
/// 出力ディレクトリは事前に存在している必要があり、watconv は作成しない。
use std::path::Path;

use crate::domain::error::DomainError;

/// 入出力ディレクトリをバリデーションする
///
/// # エラー
/// - 入力ディレクトリが存在しない
/// - 出力ディレクトリが存在しない（作成はしない）
/// - どちらかがディレクトリ以外を指している
pub fn validate_directories(input_dir: &str, output_dir: &str) -> Result<(), DomainError> {
    let input = Path::new(input_dir);
    if !input.exists() {
        return Err(DomainError::input_dir_not_found(input_dir));
    }
    if !input.is_dir() {
        return Err(DomainError::not_a_directory(input_dir));
    }

    let output = Path::new(output_dir);
    if !output.exists() {
        return Err(DomainError::output_dir_not_found(output_dir));
    }
    if !output.is_dir() {
        return Err(DomainError::not_a_directory(output_dir));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_both_directories_present() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("wat");
        let output = dir.path().join("wasm");
        fs::create_dir(&input).expect("Failed to create input dir");
        fs::create_dir(&output).expect("Failed to create output dir");

        let result = validate_directories(
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_input_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("wasm");
        fs::create_dir(&output).expect("Failed to create output dir");

        let result = validate_directories(
            dir.path().join("missing").to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );
        assert!(matches!(result, Err(DomainError::InputDirNotFound { .. })));
    }

    #[test]
    fn test_missing_output_dir_is_not_created() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("wat");
        fs::create_dir(&input).expect("Failed to create input dir");
        let output = dir.path().join("wasm");

        let result = validate_directories(
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );
        assert!(matches!(result, Err(DomainError::OutputDirNotFound { .. })));
        // バリデーションが副作用でディレクトリを作っていないこと
        assert!(!output.exists());
    }

    #[test]
    fn test_file_as_input_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("not-a-dir");
        fs::write(&input, "x").expect("Failed to write file");
        let output = dir.path().join("wasm");
        fs::create_dir(&output).expect("Failed to create output dir");

        let result = validate_directories(
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );
        assert!(matches!(result, Err(DomainError::NotADirectory { .. })));
    }
}
