use std::fmt;

use crate::config::{EmbeddingConfig, HEADER_LEN};
use crate::error::{EmbeddingError, Result};
use crate::ops::DigitSplit;

/// 인코딩 대상 숫자
///
/// `Integer` 는 소수점 없이 표기되어 `dec_length = 0` 이 되고,
/// `Real` 은 항상 소수점을 포함한다 (`5.0` → `"5.0"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

/// 부호 슬롯 (+1 / -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// 임베딩 앞 3칸: `[sign, int_length, dec_length]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingHeader {
    pub sign: Sign,
    pub int_length: usize,
    pub dec_length: usize,
}

/// 숫자 ↔ 고정 길이 벡터 코덱. 설정된 길이 외에는 상태가 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberEmbedding {
    config: EmbeddingConfig,
}

impl Number {
    pub fn sign(&self) -> Sign {
        let non_negative = match *self {
            Number::Integer(i) => i >= 0,
            // -0.0 >= 0.0 이므로 -0.0 은 양수 취급
            Number::Real(x) => x >= 0.0,
        };
        if non_negative {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Real(x) => x,
        }
    }

    /// 부호를 뗀 절댓값의 10진 표기 (지수 표기 없음)
    pub fn magnitude_string(&self) -> Result<String> {
        match *self {
            Number::Integer(i) => Ok(i.unsigned_abs().to_string()),
            Number::Real(x) => {
                if !x.is_finite() {
                    return Err(EmbeddingError::NonFiniteInput(x));
                }
                // f64 Display 는 최단 왕복 표기를 주지만 정수값이면 소수점을 생략한다
                let rendered = x.abs().to_string();
                if rendered.contains('.') {
                    Ok(rendered)
                } else {
                    Ok(format!("{}.0", rendered))
                }
            }
        }
    }

    /// 부호와 자릿수 그룹으로 분해
    pub fn to_digits(&self) -> Result<(Sign, DigitSplit)> {
        let digits = DigitSplit::from_decimal_str(&self.magnitude_string()?)?;
        Ok((self.sign(), digits))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Real(x) => match self.magnitude_string() {
                Ok(magnitude) if self.sign() == Sign::Negative => write!(f, "-{}", magnitude),
                Ok(magnitude) => f.write_str(&magnitude),
                Err(_) => write!(f, "{}", x),
            },
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl Sign {
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    /// 부호 슬롯 값을 반올림해 ±1 만 허용
    pub fn from_slot(value: f64) -> Result<Self> {
        match value.round() {
            v if v == 1.0 => Ok(Sign::Positive),
            v if v == -1.0 => Ok(Sign::Negative),
            _ => Err(EmbeddingError::InvalidSign(value)),
        }
    }
}

impl EmbeddingHeader {
    /// int_length + dec_length
    pub fn digit_count(&self) -> usize {
        self.int_length.saturating_add(self.dec_length)
    }

    /// 패딩 전 페이로드 길이 `3 + 2n`
    pub fn payload_len(&self) -> usize {
        self.digit_count()
            .saturating_mul(2)
            .saturating_add(HEADER_LEN)
    }
}

impl NumberEmbedding {
    pub fn new(target_length: usize) -> Result<Self> {
        Ok(Self {
            config: EmbeddingConfig::new(target_length)?,
        })
    }

    pub fn from_config(config: EmbeddingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    pub fn target_length(&self) -> usize {
        self.config.target_length
    }

    /// 이 길이로 손실 없이 담을 수 있는 최대 자릿수
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }
}
