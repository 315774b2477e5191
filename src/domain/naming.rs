/// ドメインサービス: 出力ファイル名の導出
///
/// 入力ファイル名に含まれる最初の ".wat" を ".wasm" に置換して
/// 出力ファイル名を決める。

/// テキスト形式モジュールの拡張子（置換対象の部分文字列）
pub const SOURCE_MARKER: &str = ".wat";

/// バイナリ形式モジュールの拡張子
pub const TARGET_MARKER: &str = ".wasm";

/// 入力ファイル名から出力ファイル名を導出する
///
/// 置換は拡張子として解釈せず、最初に現れる ".wat" という部分文字列を
/// 文字どおり置き換える。".wat" を含まない名前はそのまま通す。
/// フィクスチャディレクトリには .wat しか置かれない前提の挙動であり、
/// 変更する場合は呼び出し側の既存フィクスチャと合わせて見直すこと。
pub fn output_file_name(input_file_name: &str) -> String {
    input_file_name.replacen(SOURCE_MARKER, TARGET_MARKER, 1)
}
