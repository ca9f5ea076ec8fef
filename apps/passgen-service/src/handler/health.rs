//! # ヘルスチェックハンドラ
//!
//! サービスの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health-check
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {"instance_id":"instance_id","message":"OK","service_name":"bookmark_service"}
//! ```

use std::sync::Arc;

use axum::{Json, extract::State};
use passgen_domain::health::{HealthStatus, HealthcheckReporter};
use passgen_shared::HealthResponse;

/// ヘルスチェックハンドラの共有状態
pub struct HealthState {
   pub reporter: Arc<dyn HealthcheckReporter>,
}

fn to_response(status: HealthStatus) -> HealthResponse {
   HealthResponse {
      instance_id:  status.instance_id,
      message:      status.message,
      service_name: status.service_name,
   }
}

/// GET /health-check
///
/// 常に 200 OK を返す。
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
   Json(to_response(state.reporter.check()))
}
