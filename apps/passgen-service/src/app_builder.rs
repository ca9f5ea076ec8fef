//! # アプリケーション構築
//!
//! DI（State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use passgen_domain::{
   health::{HealthcheckReporter, StaticHealthcheckReporter},
   password::{PasswordGenerator, PolicyPasswordGenerator},
   random::RandomSource,
};
use passgen_infra::OsRandomSource;
use passgen_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   config::ServiceConfig,
   handler::{HealthState, PasswordState, generate_password, health_check},
};

/// 設定から本番用の依存を組み立ててルーターを返す
pub fn build_app(config: &ServiceConfig) -> Router {
   let random: Arc<dyn RandomSource> = Arc::new(OsRandomSource::new());
   let generator = Arc::new(PolicyPasswordGenerator::new(config.policy, random));
   let reporter = Arc::new(StaticHealthcheckReporter::new(config.health.clone()));

   build_router(reporter, generator)
}

/// 注入された能力からルーターを構築する
///
/// レイヤー順序（下に書いたものが外側）:
/// 1. SetRequestIdLayer: UUID v7 を生成（またはクライアント提供値を使用）
/// 2. TraceLayer: request_id を含むスパンを作成
/// 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
pub fn build_router(
   reporter: Arc<dyn HealthcheckReporter>,
   generator: Arc<dyn PasswordGenerator>,
) -> Router {
   let health_state = Arc::new(HealthState { reporter });
   let password_state = Arc::new(PasswordState { generator });

   Router::new()
      .merge(
         Router::new()
            .route("/health-check", get(health_check))
            .with_state(health_state),
      )
      .merge(
         Router::new()
            .route("/password", get(generate_password))
            .with_state(password_state),
      )
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
