//! # HTTP エンドポイントの結合テスト
//!
//! `build_router` / `build_app` で組み立てたルーター全体（Request ID レイヤー込み）に
//! リクエストを送り、ステータス・本文・ヘッダーを検証する。

use std::{collections::HashMap, sync::Arc};

use axum::{Router, body::Body, response::Response};
use http::{Request, StatusCode};
use passgen_domain::{
   PasswordError,
   health::{HealthStatus, StaticHealthcheckReporter},
   password::{GeneratedPassword, PasswordGenerator, PasswordPolicy},
};
use passgen_service::{
   app_builder::{build_app, build_router},
   config::ServiceConfig,
};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

/// 固定の結果を返すテスト用生成器
struct FixedPasswordGenerator(Result<&'static str, PasswordError>);

impl PasswordGenerator for FixedPasswordGenerator {
   fn generate_password(&self) -> Result<GeneratedPassword, PasswordError> {
      self.0.clone().map(GeneratedPassword::new)
   }
}

fn stub_app(result: Result<&'static str, PasswordError>) -> Router {
   build_router(
      Arc::new(StaticHealthcheckReporter::new(HealthStatus::new(
         "OK",
         "bookmark_service",
         "instance_id",
      ))),
      Arc::new(FixedPasswordGenerator(result)),
   )
}

fn config_app(vars: &[(&str, &str)]) -> (ServiceConfig, Router) {
   let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
   let config = ServiceConfig::from_lookup(|name| map.get(name).cloned()).unwrap();
   let app = build_app(&config);
   (config, app)
}

fn get(uri: &str) -> Request<Body> {
   Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: Response) -> String {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_ヘルスチェックは設定した三つ組を返す() {
   let app = stub_app(Ok("unused"));

   let response = app.oneshot(get("/health-check")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      body_string(response).await,
      r#"{"instance_id":"instance_id","message":"OK","service_name":"bookmark_service"}"#
   );
}

#[tokio::test]
async fn test_パスワード生成成功時は本文が生成結果と完全一致する() {
   let app = stub_app(Ok("Zq8#Lm2!"));

   let response = app.oneshot(get("/password")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_string(response).await, "Zq8#Lm2!");
}

#[tokio::test]
async fn test_乱数源エラー時は500とerrを返す() {
   let app = stub_app(Err(PasswordError::RandomSource("unavailable".to_string())));

   let response = app.oneshot(get("/password")).await.unwrap();

   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body_string(response).await, "err");
}

#[tokio::test]
async fn test_未定義のパスは404() {
   let app = stub_app(Ok("unused"));

   let response = app.oneshot(get("/unknown")).await.unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
   let app = stub_app(Ok("unused"));

   let response = app.oneshot(get("/health-check")).await.unwrap();

   let request_id = response.headers()["x-request-id"].to_str().unwrap();
   let parsed = uuid::Uuid::parse_str(request_id).unwrap();
   assert_eq!(parsed.get_version_num(), 7);
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let app = stub_app(Ok("unused"));
   let request = Request::builder()
      .uri("/password")
      .header("x-request-id", "client-provided-123")
      .body(Body::empty())
      .unwrap();

   let response = app.oneshot(request).await.unwrap();

   assert_eq!(
      response.headers()["x-request-id"].to_str().unwrap(),
      "client-provided-123"
   );
}

#[tokio::test]
async fn test_本番構成ではポリシーを満たすパスワードを返す() {
   let (config, app) = config_app(&[("PASSWORD_LENGTH", "24")]);

   for _ in 0..20 {
      let response = app.clone().oneshot(get("/password")).await.unwrap();

      assert_eq!(response.status(), StatusCode::OK);
      let body = body_string(response).await;
      assert_eq!(body.len(), 24);
      assert!(config.policy.is_satisfied_by(&body), "{body:?}");
   }
}

#[tokio::test]
async fn test_本番構成で満たせないポリシーなら500とerrを返す() {
   let (config, app) = config_app(&[("PASSWORD_LENGTH", "3")]);
   assert_eq!(
      config.policy,
      PasswordPolicy {
         length: 3,
         ..PasswordPolicy::default()
      }
   );

   let response = app.oneshot(get("/password")).await.unwrap();

   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body_string(response).await, "err");
}

#[tokio::test]
async fn test_本番構成のヘルスチェックは環境変数の値を返す() {
   let (_, app) = config_app(&[
      ("SERVICE_NAME", "bookmark_service"),
      ("INSTANCE_ID", "i-0abc"),
   ]);

   let response = app.oneshot(get("/health-check")).await.unwrap();

   let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
   assert_eq!(
      json,
      serde_json::json!({
         "instance_id": "i-0abc",
         "message": "OK",
         "service_name": "bookmark_service"
      })
   );
}
