/// ドメインサービス: 変換計画の作成
///
/// 入力ディレクトリを一度だけ列挙し、入力ファイルと出力ファイルの
/// 対応リストを作る。列挙順はファイルシステムが返した順のままで、
/// ソートはしない。
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::naming;

/// 1ファイル分の変換対象
#[derive(Debug, Clone)]
pub struct ConversionPair {
    /// 入力ファイルのパス
    pub source: PathBuf,

    /// 出力ファイルのパス
    pub target: PathBuf,

    /// 入力ファイル名（表示用）
    pub file_name: String,

    /// 出力ファイル名（表示用）
    pub output_name: String,
}

/// 入力ディレクトリの全エントリから変換計画を作る
///
/// エントリの種類や拡張子によるフィルタリングは行わない。
/// フィクスチャディレクトリには変換対象しか置かれない前提で、
/// 変換できないエントリは変換ツール側の失敗として表面化する。
pub fn plan_conversions(
    input_dir: &str,
    output_dir: &str,
) -> Result<Vec<ConversionPair>, DomainError> {
    let entries = fs::read_dir(input_dir)
        .map_err(|e| DomainError::directory_unreadable(input_dir, e))?;

    let mut plan = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DomainError::directory_unreadable(input_dir, e))?;

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let output_name = naming::output_file_name(&file_name);

        plan.push(ConversionPair {
            source: entry.path(),
            target: Path::new(output_dir).join(&output_name),
            file_name,
            output_name,
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(dir: &Path, output_dir: &str) -> Vec<ConversionPair> {
        plan_conversions(dir.to_str().expect("utf-8 path"), output_dir)
            .expect("Plan should succeed")
    }

    #[test]
    fn test_empty_directory_yields_empty_plan() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let plan = plan_for(dir.path(), "out");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_pairs_cover_every_entry() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("add.wat"), "(module)").expect("write");
        fs::write(dir.path().join("sub.wat"), "(module)").expect("write");
        fs::write(dir.path().join("notes.txt"), "x").expect("write");

        let plan = plan_for(dir.path(), "out");
        assert_eq!(plan.len(), 3);

        // 列挙順は保証されないので、名前の集合で確認する
        let mut names: Vec<_> = plan.iter().map(|p| p.output_name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["add.wasm", "notes.txt", "sub.wasm"]);
    }

    #[test]
    fn test_target_is_under_output_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("add.wat"), "(module)").expect("write");

        let plan = plan_for(dir.path(), "out");
        assert_eq!(plan[0].target, Path::new("out").join("add.wasm"));
        assert_eq!(plan[0].source, dir.path().join("add.wat"));
    }

    #[test]
    fn test_subdirectories_are_not_filtered() {
        // ディレクトリエントリも計画に含まれる（変換ツール側で失敗する想定）
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");

        let plan = plan_for(dir.path(), "out");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].file_name, "nested");
        assert_eq!(plan[0].output_name, "nested");
    }

    #[test]
    fn test_missing_directory_is_unreadable() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing");

        let result = plan_conversions(missing.to_str().expect("utf-8 path"), "out");
        assert!(matches!(
            result,
            Err(DomainError::DirectoryUnreadable { .. })
        ));
    }
}
