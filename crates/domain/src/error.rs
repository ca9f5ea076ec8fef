//! # ドメイン層エラー定義
//!
//! パスワード生成で発生するエラーを表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Configuration` | 500 Internal Server Error | ポリシー設定が満たせない |
//! | `RandomSource` | 500 Internal Server Error | 乱数源の失敗 |
//!
//! どちらもサーバー側の問題であり、クライアントには詳細を返さない。
//!
//! ## 使用例
//!
//! ```rust
//! use passgen_domain::PasswordError;
//!
//! fn check_length(length: usize, required: usize) -> Result<(), PasswordError> {
//!     if length < required {
//!         return Err(PasswordError::Configuration(format!(
//!             "長さ {length} では {required} 種類の文字種を含められません"
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_length(2, 4).is_err());
//! ```

use thiserror::Error;

/// パスワード生成で発生するエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
   /// ポリシー設定エラー
   ///
   /// 設定値が変わらない限り何度呼んでも同じ結果になるため、リトライしない。
   ///
   /// # 例
   ///
   /// - 長さが必須文字種の数より短い
   /// - 必須文字種が一つもない
   /// - 長さが上限を超えている
   #[error("パスワードポリシーが不正です: {0}")]
   Configuration(String),

   /// 乱数源エラー
   ///
   /// OS の乱数源が利用できない場合や、棄却サンプリングの試行上限を
   /// 超えた場合に使用する。安全でない乱数源へのフォールバックはしない。
   #[error("乱数源エラー: {0}")]
   RandomSource(String),
}

impl PasswordError {
   /// 設定エラーかどうかを返す
   pub fn is_configuration(&self) -> bool {
      matches!(self, Self::Configuration(_))
   }

   /// 乱数源エラーかどうかを返す
   pub fn is_random_source(&self) -> bool {
      matches!(self, Self::RandomSource(_))
   }
}

#[cfg(test)]
mod tests {
   use rstest::rstest;

   use super::*;

   #[rstest]
   fn test_設定エラーのメッセージ() {
      let error = PasswordError::Configuration("長さが足りません".to_string());

      assert_eq!(
         error.to_string(),
         "パスワードポリシーが不正です: 長さが足りません"
      );
      assert!(error.is_configuration());
      assert!(!error.is_random_source());
   }

   #[rstest]
   fn test_乱数源エラーのメッセージ() {
      let error = PasswordError::RandomSource("unavailable".to_string());

      assert_eq!(error.to_string(), "乱数源エラー: unavailable");
      assert!(error.is_random_source());
      assert!(!error.is_configuration());
   }
}
