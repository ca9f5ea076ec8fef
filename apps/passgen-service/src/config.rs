//! # Passgen Service 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `PASSGEN_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PASSGEN_PORT` | No | `3000` | ポート番号 |
//! | `HEALTH_MESSAGE` | No | `OK` | ヘルスチェックのメッセージ |
//! | `SERVICE_NAME` | No | `password_service` | ヘルスチェックのサービス名 |
//! | `INSTANCE_ID` | No | 起動ごとの UUID v4 | ヘルスチェックのインスタンス ID |
//! | `PASSWORD_LENGTH` | No | `16` | パスワード長 |
//! | `PASSWORD_REQUIRE_UPPER` | No | `true` | 英大文字を必須にする |
//! | `PASSWORD_REQUIRE_LOWER` | No | `true` | 英小文字を必須にする |
//! | `PASSWORD_REQUIRE_DIGIT` | No | `true` | 数字を必須にする |
//! | `PASSWORD_REQUIRE_SYMBOL` | No | `true` | 記号を必須にする |
//!
//! パスワードポリシーの妥当性はここでは検証しない（生成時に検証する）。

use std::env;

use passgen_domain::{
   health::HealthStatus,
   password::{DEFAULT_PASSWORD_LENGTH, PasswordPolicy},
};
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 値のパースに失敗した
   #[error("{name} の値が不正です: {value:?}（{expected}）")]
   Invalid {
      name:     &'static str,
      value:    String,
      expected: &'static str,
   },
}

/// Passgen Service の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
   /// バインドアドレス
   pub host:   String,
   /// ポート番号
   pub port:   u16,
   /// ヘルスチェックで返す三つ組
   pub health: HealthStatus,
   /// パスワードポリシー
   pub policy: PasswordPolicy,
}

impl ServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストでは環境変数を汚さずに検証するためにこちらを使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let host = lookup("PASSGEN_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
      let port = parse_or("PASSGEN_PORT", &lookup, 3000u16, "ポート番号")?;

      let health = HealthStatus::new(
         lookup("HEALTH_MESSAGE").unwrap_or_else(|| "OK".to_string()),
         lookup("SERVICE_NAME").unwrap_or_else(|| "password_service".to_string()),
         lookup("INSTANCE_ID").unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
      );

      let policy = PasswordPolicy {
         length:         parse_or(
            "PASSWORD_LENGTH",
            &lookup,
            DEFAULT_PASSWORD_LENGTH,
            "0 以上の整数",
         )?,
         require_upper:  parse_flag("PASSWORD_REQUIRE_UPPER", &lookup)?,
         require_lower:  parse_flag("PASSWORD_REQUIRE_LOWER", &lookup)?,
         require_digit:  parse_flag("PASSWORD_REQUIRE_DIGIT", &lookup)?,
         require_symbol: parse_flag("PASSWORD_REQUIRE_SYMBOL", &lookup)?,
      };

      Ok(Self {
         host,
         port,
         health,
         policy,
      })
   }

   /// バインドアドレス（`host:port`）
   pub fn server_addr(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

fn parse_or<T: std::str::FromStr>(
   name: &'static str,
   lookup: &impl Fn(&str) -> Option<String>,
   default: T,
   expected: &'static str,
) -> Result<T, ConfigError> {
   match lookup(name) {
      None => Ok(default),
      Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
         name,
         value,
         expected,
      }),
   }
}

/// 真偽値フラグをパースする（未設定なら `true`）
fn parse_flag(
   name: &'static str,
   lookup: &impl Fn(&str) -> Option<String>,
) -> Result<bool, ConfigError> {
   let Some(value) = lookup(name) else {
      return Ok(true);
   };
   match value.trim().to_ascii_lowercase().as_str() {
      "true" | "1" | "yes" | "on" => Ok(true),
      "false" | "0" | "no" | "off" => Ok(false),
      _ => Err(ConfigError::Invalid {
         name,
         value,
         expected: "true または false",
      }),
   }
}
