//! # Passgen Service ライブラリ
//!
//! パスワード生成サービスの HTTP 層。
//!
//! ## モジュール構成
//!
//! - `app_builder`: 依存の組み立てとルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `handler`: HTTP ハンドラ

pub mod app_builder;
pub mod config;
pub mod handler;
