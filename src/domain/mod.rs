/// ドメイン層モジュール
///
/// 変換処理のビジネスルールを集約する。外部プロセスの起動そのものは
/// runner 層の責務で、ここでは「何をどの順で変換するか」だけを決める。
pub mod error;
pub mod naming;
pub mod planner;
pub mod progress;
pub mod validator;
