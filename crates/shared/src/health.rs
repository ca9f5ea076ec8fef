//! # ヘルスチェック共通型
//!
//! `GET /health-check` のレスポンス型を提供する。
//!
//! フィールド名は snake_case のまま公開し、既存クライアントとの互換性のため
//! 名前を変更しない。フィールドは辞書順に宣言しているので、JSON のキー順も
//! 辞書順になる。

use serde::Serialize;

/// ヘルスチェックレスポンス
///
/// ## 使用例
///
/// ```
/// use passgen_shared::HealthResponse;
///
/// let response = HealthResponse {
///     instance_id:  "i-1".to_string(),
///     message:      "OK".to_string(),
///     service_name: "password_service".to_string(),
/// };
/// assert_eq!(response.message, "OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
   /// インスタンス識別子
   pub instance_id:  String,
   /// 稼働メッセージ
   pub message:      String,
   /// サービス名
   pub service_name: String,
}
