//! # Passgen インフラ層
//!
//! ドメイン層が定義するトレイトの、OS に依存する実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`random`] - OS の暗号論的乱数源

pub mod random;

pub use random::OsRandomSource;
