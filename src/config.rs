//! # 임베딩 설정
//!
//! 출력 벡터 길이 하나만 가진다. 용량(최대 자릿수)은 길이에서 유도된다.

use serde::{Deserialize, Serialize};

use crate::error::{EmbeddingError, Result};

/// 기본 출력 벡터 길이
pub const DEFAULT_TARGET_LENGTH: usize = 4096;

/// 헤더 칸 수: [sign, int_length, dec_length]
pub const HEADER_LEN: usize = 3;

/// 한 자리라도 담으려면 헤더 + 실수부 1 + 허수부 1
pub const MIN_TARGET_LENGTH: usize = HEADER_LEN + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// 고정 출력 길이
    pub target_length: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
        }
    }
}

impl EmbeddingConfig {
    pub fn new(target_length: usize) -> Result<Self> {
        let config = Self { target_length };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_length < MIN_TARGET_LENGTH {
            return Err(EmbeddingError::InvalidTargetLength(self.target_length));
        }
        Ok(())
    }

    /// 손실 없이 담을 수 있는 최대 자릿수 (정수부 + 소수부)
    ///
    /// `int_length + dec_length <= (target_length - 3) / 2`
    pub fn capacity(&self) -> usize {
        self.target_length.saturating_sub(HEADER_LEN) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let config = EmbeddingConfig::default();
        assert_eq!(config.target_length, 4096);
        assert_eq!(config.capacity(), 2046);
    }

    #[test]
    fn test_rejects_too_short_length() {
        assert_eq!(
            EmbeddingConfig::new(4),
            Err(EmbeddingError::InvalidTargetLength(4))
        );
        assert_eq!(EmbeddingConfig::new(5).map(|c| c.capacity()), Ok(1));
        // 짝수 길이는 마지막 한 칸이 항상 패딩
        assert_eq!(EmbeddingConfig::new(6).map(|c| c.capacity()), Ok(1));
    }
}
