//! # OS 乱数源
//!
//! OS の CSPRNG（Linux では `getrandom(2)`）を使う [`RandomSource`] 実装。
//!
//! 呼び出しごとに OS へ問い合わせるため内部状態を持たず、ロックなしで
//! 複数のリクエストから同時に使える。

use passgen_domain::{PasswordError, random::RandomSource};
use rand::{TryRngCore, rngs::OsRng};

/// OS の暗号論的乱数源
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl OsRandomSource {
   pub fn new() -> Self {
      Self
   }
}

impl RandomSource for OsRandomSource {
   fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), PasswordError> {
      OsRng.try_fill_bytes(dest).map_err(|e| {
         tracing::error!(error = %e, "OS 乱数源の読み取りに失敗しました");
         PasswordError::RandomSource(e.to_string())
      })
   }
}
