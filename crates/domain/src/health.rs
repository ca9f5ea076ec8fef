//! # ヘルスステータス
//!
//! サービスの稼働状態を表す静的な三つ組と、それを返す能力を定義する。

/// ヘルスステータス
///
/// プロセス起動時に設定から一度だけ構築し、以後変更しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
   /// 稼働メッセージ（例: `"OK"`）
   pub message:      String,
   /// サービス名
   pub service_name: String,
   /// インスタンス識別子
   pub instance_id:  String,
}

impl HealthStatus {
   pub fn new(
      message: impl Into<String>,
      service_name: impl Into<String>,
      instance_id: impl Into<String>,
   ) -> Self {
      Self {
         message:      message.into(),
         service_name: service_name.into(),
         instance_id:  instance_id.into(),
      }
   }
}

/// ヘルスステータスを返すトレイト
///
/// 失敗しない。深い死活監視を追加する場合は呼び出し側の責務とする。
pub trait HealthcheckReporter: Send + Sync {
   fn check(&self) -> HealthStatus;
}

/// 設定された値をそのまま返す実装
pub struct StaticHealthcheckReporter {
   status: HealthStatus,
}

impl StaticHealthcheckReporter {
   pub fn new(status: HealthStatus) -> Self {
      Self { status }
   }
}

impl HealthcheckReporter for StaticHealthcheckReporter {
   fn check(&self) -> HealthStatus {
      self.status.clone()
   }
}
