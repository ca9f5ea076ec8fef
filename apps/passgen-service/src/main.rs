//! # Passgen Service サーバー
//!
//! ランダムなパスワードを生成する内部 API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/health-check` | ヘルスチェック（メッセージ・サービス名・インスタンス ID） |
//! | GET | `/password` | パスワード生成（`text/plain`） |
//!
//! 環境変数は [`passgen_service::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p passgen-service
//!
//! # 本番環境
//! PASSGEN_PORT=8080 LOG_FORMAT=json cargo run -p passgen-service --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use passgen_service::{app_builder::build_app, config::ServiceConfig};
use passgen_shared::observability::TracingConfig;
use tokio::{net::TcpListener, signal};

/// Passgen Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("passgen-service");
   passgen_shared::observability::init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "passgen-service").entered();

   // 設定読み込み
   let config = ServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

   // 満たせないポリシーでも起動はする（生成時に 500 を返す）
   if let Err(e) = config.policy.validate() {
      tracing::warn!(error = %e, "パスワードポリシーが満たせません");
   }

   tracing::info!(
      service_name = %config.health.service_name,
      instance_id = %config.health.instance_id,
      length = config.policy.length,
      "Passgen Service サーバーを起動します: {}",
      config.server_addr()
   );

   let app = build_app(&config);

   let addr: SocketAddr = config
      .server_addr()
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Passgen Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("Passgen Service サーバーを停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match signal::unix::signal(signal::unix::SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
   }

   tracing::info!("シャットダウンシグナルを受信しました");
}
