//! # 乱数源
//!
//! パスワード生成が消費する乱数源の抽象化と、その上に構築する一様サンプリング。
//!
//! [`RandomSource`] はバイト列を供給するだけの能力で、具体的な実装（OS の
//! CSPRNG など）はインフラ層が提供する。テストでは決定的な実装を注入できる。
//!
//! ## モジュロバイアス対策
//!
//! 32 bit の乱数を `n` で割った余りをそのまま使うと、`2^32` が `n` で割り切れない
//! 場合に小さい値ほど出やすくなる。[`uniform_index`] は `n` の倍数に収まる範囲の
//! 値だけを採用し、それ以外は引き直す（棄却サンプリング）。

use crate::PasswordError;

/// 1 回のインデックス抽出で許容する最大試行回数
///
/// 棄却確率は最悪でも 1/2 未満なので、正常な乱数源でこの上限に達する確率は
/// 2^-32 未満になる。
pub const MAX_SAMPLING_ATTEMPTS: usize = 32;

/// 乱数バイト列を供給するトレイト
///
/// 複数のリクエストから同時に呼ばれるため `Send + Sync` を要求する。
pub trait RandomSource: Send + Sync {
   /// `dest` を乱数バイトで埋める
   ///
   /// # Errors
   ///
   /// - 乱数源が利用できない場合は [`PasswordError::RandomSource`]
   fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), PasswordError>;
}

impl<T: RandomSource + ?Sized> RandomSource for std::sync::Arc<T> {
   fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), PasswordError> {
      (**self).fill_bytes(dest)
   }
}

fn next_u32(source: &dyn RandomSource) -> Result<u32, PasswordError> {
   let mut buf = [0u8; 4];
   source.fill_bytes(&mut buf)?;
   Ok(u32::from_le_bytes(buf))
}

/// `0..upper` の範囲から一様にインデックスを選ぶ
///
/// # Errors
///
/// - `upper` が 0 または `u32` に収まらない場合は [`PasswordError::Configuration`]
/// - 乱数源の失敗、または [`MAX_SAMPLING_ATTEMPTS`] 回すべて棄却された場合は
///   [`PasswordError::RandomSource`]
pub fn uniform_index(source: &dyn RandomSource, upper: usize) -> Result<usize, PasswordError> {
   if upper == 0 {
      return Err(PasswordError::Configuration(
         "空の範囲からは選択できません".to_string(),
      ));
   }
   let n = u32::try_from(upper).map_err(|_| {
      PasswordError::Configuration(format!("範囲が大きすぎます: {upper}"))
   })?;

   // n の倍数に収まる範囲だけを採用する
   let zone = (u32::MAX / n) * n;

   for _ in 0..MAX_SAMPLING_ATTEMPTS {
      let value = next_u32(source)?;
      if value < zone {
         return Ok((value % n) as usize);
      }
   }

   Err(PasswordError::RandomSource(format!(
      "{MAX_SAMPLING_ATTEMPTS} 回の試行で一様な値を得られませんでした"
   )))
}

/// Fisher-Yates でスライスを一様ランダムに並べ替える
///
/// # Errors
///
/// - [`uniform_index`] のエラーをそのまま返す
pub fn shuffle<T>(source: &dyn RandomSource, items: &mut [T]) -> Result<(), PasswordError> {
   for i in (1..items.len()).rev() {
      let j = uniform_index(source, i + 1)?;
      items.swap(i, j);
   }
   Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
   use std::{collections::VecDeque, sync::Mutex};

   use rand::{RngCore, SeedableRng, rngs::StdRng};

   use super::*;

   /// シード固定の疑似乱数を返すテスト用実装
   pub struct SeededRandomSource {
      rng: Mutex<StdRng>,
   }

   impl SeededRandomSource {
      pub fn new(seed: u64) -> Self {
         Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
         }
      }
   }

   impl RandomSource for SeededRandomSource {
      fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), PasswordError> {
         self.rng.lock().unwrap().fill_bytes(dest);
         Ok(())
      }
   }

   /// 事前に決めた u32 列を順に返すテスト用実装
   ///
   /// 列を使い切ると乱数源エラーを返す。
   pub struct ScriptedRandomSource {
      values: Mutex<VecDeque<u32>>,
   }

   impl ScriptedRandomSource {
      pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
         Self {
            values: Mutex::new(values.into_iter().collect()),
         }
      }
   }

   impl RandomSource for ScriptedRandomSource {
      fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), PasswordError> {
         for chunk in dest.chunks_mut(4) {
            let value = self
               .values
               .lock()
               .unwrap()
               .pop_front()
               .ok_or_else(|| PasswordError::RandomSource("exhausted".to_string()))?;
            chunk.copy_from_slice(&value.to_le_bytes()[..chunk.len()]);
         }
         Ok(())
      }
   }

   /// 常に失敗するテスト用実装
   pub struct FailingRandomSource;

   impl RandomSource for FailingRandomSource {
      fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), PasswordError> {
         Err(PasswordError::RandomSource("unavailable".to_string()))
      }
   }
}
