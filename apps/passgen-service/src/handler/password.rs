//! # パスワード生成ハンドラ
//!
//! ## エンドポイント
//!
//! ```text
//! GET /password
//! ```
//!
//! - 成功: 200 OK、本文は生成したパスワード（`text/plain`、末尾改行なし）
//! - 失敗: 500 Internal Server Error、本文は `err` のみ
//!
//! エラーの詳細はログにのみ出力し、レスポンスには含めない。
//! パスワード自体はログに出力しない。

use std::sync::Arc;

use axum::{
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use passgen_domain::password::PasswordGenerator;

/// 失敗時のレスポンス本文
pub const ERROR_BODY: &str = "err";

/// パスワード生成ハンドラの共有状態
pub struct PasswordState {
   pub generator: Arc<dyn PasswordGenerator>,
}

/// GET /password
pub async fn generate_password(State(state): State<Arc<PasswordState>>) -> Response {
   let password = match state.generator.generate_password() {
      Ok(password) => password,
      Err(e) => {
         tracing::error!(error = %e, "パスワード生成に失敗しました");
         return (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY).into_response();
      }
   };

   (StatusCode::OK, password.into_string()).into_response()
}
