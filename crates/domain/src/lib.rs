//! # Passgen ドメイン層
//!
//! パスワード生成サービスの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **能力の抽象化**: パスワード生成・ヘルスチェック・乱数源をトレイトで定義し、
//!   上位層は具体的な実装ではなくトレイトに依存する
//! - **純粋性**: ネットワークや OS への依存はインフラ層に置く
//! - **秘匿性**: 生成したパスワードは保持せず、ログにも出さない
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - パスワード生成で発生するエラー
//! - [`health`] - ヘルスステータス
//! - [`password`] - パスワードポリシーと生成器
//! - [`random`] - 乱数源と一様サンプリング
//!
//! ## 使用例
//!
//! ```rust
//! use passgen_domain::{PasswordError, password::PasswordPolicy};
//!
//! let policy = PasswordPolicy {
//!     length: 2,
//!     ..PasswordPolicy::default()
//! };
//!
//! assert!(matches!(policy.validate(), Err(PasswordError::Configuration(_))));
//! ```

pub mod error;
pub mod health;
pub mod password;
pub mod random;

pub use error::PasswordError;
