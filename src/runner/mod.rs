/// Runner層モジュール
///
/// 外部変換ツールの起動と結果判定を担当するインフラ層。
/// ドメイン層が作った変換計画を1件ずつ実プロセスに落とす。
pub mod error;
pub mod invoker;
