//! # パスワード生成
//!
//! パスワードポリシーと、それを満たすランダムなパスワードの生成を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`CharacterClass`] | 文字種 | 小文字・大文字・数字・記号 |
//! | [`PasswordPolicy`] | パスワードポリシー | 長さと必須文字種の組 |
//! | [`GeneratedPassword`] | 生成パスワード | 呼び出し元に渡す平文パスワード |
//! | [`PasswordGenerator`] | パスワード生成器 | ハンドラが依存する能力 |
//!
//! ## 生成アルゴリズム
//!
//! 1. 必須文字種の和集合からアルファベットを組み立てる
//! 2. 必須文字種ごとに 1 文字ずつ、その文字種から一様に選ぶ
//! 3. 残りの枠をアルファベット全体から一様に埋める
//! 4. Fisher-Yates で全体を並べ替え、必須文字種の位置を予測不能にする

use std::sync::Arc;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
   PasswordError,
   random::{RandomSource, shuffle, uniform_index},
};

/// パスワード長の上限
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// デフォルトのパスワード長
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// 文字種
///
/// 各文字種のアルファベットは互いに素であり、和集合に重複は生じない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CharacterClass {
   /// 英小文字
   Lowercase,
   /// 英大文字
   Uppercase,
   /// 数字
   Digit,
   /// 記号
   Symbol,
}

impl CharacterClass {
   /// この文字種に属する文字の一覧
   pub fn alphabet(self) -> &'static [u8] {
      match self {
         Self::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
         Self::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
         Self::Digit => b"0123456789",
         Self::Symbol => b"!@#$%&*()-_=+?",
      }
   }

   /// 文字がこの文字種に属するかを返す
   pub fn contains(self, c: char) -> bool {
      c.is_ascii() && self.alphabet().contains(&(c as u8))
   }
}

/// パスワードポリシー
///
/// 生成するパスワードの長さと、必ず含める文字種を表す。
/// 妥当性は生成時に [`PasswordPolicy::validate`] で検証する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
   /// パスワード長（文字数）
   pub length:         usize,
   /// 英大文字を必須とするか
   pub require_upper:  bool,
   /// 英小文字を必須とするか
   pub require_lower:  bool,
   /// 数字を必須とするか
   pub require_digit:  bool,
   /// 記号を必須とするか
   pub require_symbol: bool,
}

impl Default for PasswordPolicy {
   fn default() -> Self {
      Self {
         length:         DEFAULT_PASSWORD_LENGTH,
         require_upper:  true,
         require_lower:  true,
         require_digit:  true,
         require_symbol: true,
      }
   }
}

impl PasswordPolicy {
   /// 文字種がこのポリシーで必須かを返す
   pub fn requires(&self, class: CharacterClass) -> bool {
      match class {
         CharacterClass::Lowercase => self.require_lower,
         CharacterClass::Uppercase => self.require_upper,
         CharacterClass::Digit => self.require_digit,
         CharacterClass::Symbol => self.require_symbol,
      }
   }

   /// 必須文字種の一覧（小文字・大文字・数字・記号の順）
   pub fn required_classes(&self) -> Vec<CharacterClass> {
      CharacterClass::iter().filter(|c| self.requires(*c)).collect()
   }

   /// 使用可能な文字の一覧（必須文字種の和集合）
   pub fn alphabet(&self) -> Vec<u8> {
      self
         .required_classes()
         .into_iter()
         .flat_map(|c| c.alphabet().iter().copied())
         .collect()
   }

   /// ポリシーが満たせるかを検証する
   ///
   /// # Errors
   ///
   /// - 必須文字種が一つもない
   /// - 長さが必須文字種の数より短い
   /// - 長さが [`MAX_PASSWORD_LENGTH`] を超える
   pub fn validate(&self) -> Result<(), PasswordError> {
      let required = self.required_classes().len();
      if required == 0 {
         return Err(PasswordError::Configuration(
            "必須文字種が一つも指定されていません".to_string(),
         ));
      }
      if self.length < required {
         return Err(PasswordError::Configuration(format!(
            "長さ {} では {} 種類の文字種を含められません",
            self.length, required
         )));
      }
      if self.length > MAX_PASSWORD_LENGTH {
         return Err(PasswordError::Configuration(format!(
            "長さ {} は上限 {} を超えています",
            self.length, MAX_PASSWORD_LENGTH
         )));
      }
      Ok(())
   }

   /// パスワードがこのポリシーを満たすかを返す
   pub fn is_satisfied_by(&self, password: &str) -> bool {
      let alphabet = self.alphabet();
      password.chars().count() == self.length
         && password
            .chars()
            .all(|c| c.is_ascii() && alphabet.contains(&(c as u8)))
         && self
            .required_classes()
            .into_iter()
            .all(|class| password.chars().any(|c| class.contains(c)))
   }
}

/// 生成されたパスワード
///
/// 呼び出し元に所有権ごと渡す。生成器は値を保持しない。
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl std::fmt::Debug for GeneratedPassword {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_tuple("GeneratedPassword").field(&"[REDACTED]").finish()
   }
}

impl GeneratedPassword {
   /// パスワードを作成する
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

/// パスワード生成を担当するトレイト
///
/// ハンドラはこのトレイトにのみ依存し、テストではスタブを注入する。
pub trait PasswordGenerator: Send + Sync {
   /// パスワードを生成する
   ///
   /// # Errors
   ///
   /// - ポリシーが満たせない場合は [`PasswordError::Configuration`]
   /// - 乱数源が失敗した場合は [`PasswordError::RandomSource`]
   fn generate_password(&self) -> Result<GeneratedPassword, PasswordError>;
}

/// ポリシーに従ってパスワードを生成する実装
pub struct PolicyPasswordGenerator {
   policy: PasswordPolicy,
   random: Arc<dyn RandomSource>,
}

impl PolicyPasswordGenerator {
   pub fn new(policy: PasswordPolicy, random: Arc<dyn RandomSource>) -> Self {
      Self { policy, random }
   }

   /// 生成に使うポリシー
   pub fn policy(&self) -> &PasswordPolicy {
      &self.policy
   }

   fn pick(&self, alphabet: &[u8]) -> Result<u8, PasswordError> {
      let index = uniform_index(self.random.as_ref(), alphabet.len())?;
      Ok(alphabet[index])
   }
}

impl PasswordGenerator for PolicyPasswordGenerator {
   fn generate_password(&self) -> Result<GeneratedPassword, PasswordError> {
      self.policy.validate()?;

      let required = self.policy.required_classes();
      let alphabet = self.policy.alphabet();
      let mut chars = Vec::with_capacity(self.policy.length);

      // 必須文字種ごとに 1 文字ずつ確保する
      for class in &required {
         chars.push(self.pick(class.alphabet())?);
      }
      while chars.len() < self.policy.length {
         chars.push(self.pick(&alphabet)?);
      }

      shuffle(self.random.as_ref(), &mut chars)?;

      // アルファベットはすべて ASCII
      let password: String = chars.into_iter().map(char::from).collect();
      Ok(GeneratedPassword::new(password))
   }
}
