use log::{debug, warn};
use ndarray::{s, ArrayView1};
use rustfft::num_complex::Complex64;

use super::types::{EmbeddingHeader, Number, NumberEmbedding, Sign};
use crate::config::HEADER_LEN;
use crate::error::{EmbeddingError, Result};
use crate::ops::{complex_to_digit, phase_residual, spectrum, DigitSplit, PHASE_STEP};

/// 이보다 큰 위상 잔차는 반올림된 자릿수가 원래와 다를 수 있다 (1/4 간격)
pub const AMBIGUITY_THRESHOLD: f64 = PHASE_STEP / 4.0;

/// 디코딩 결과와 위상 복원 품질
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeReport {
    pub number: Number,
    pub header: EmbeddingHeader,
    /// 복원된 위상점들 중 π/10 격자에서 가장 먼 거리 (라디안)
    pub max_phase_residual: f64,
}

impl DecodeReport {
    pub fn is_ambiguous(&self) -> bool {
        self.max_phase_residual > AMBIGUITY_THRESHOLD
    }
}

/// 앞 3칸을 읽어 헤더 복원
pub fn read_header(embedding: &ArrayView1<f64>) -> Result<EmbeddingHeader> {
    if embedding.len() < HEADER_LEN {
        return Err(EmbeddingError::VectorTooShort {
            len: embedding.len(),
        });
    }
    Ok(EmbeddingHeader {
        sign: Sign::from_slot(embedding[0])?,
        int_length: read_length("int_length", embedding[1])?,
        dec_length: read_length("dec_length", embedding[2])?,
    })
}

fn read_length(field: &'static str, value: f64) -> Result<usize> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 {
        return Err(EmbeddingError::InvalidLength { field, value });
    }
    Ok(rounded as usize)
}

impl NumberEmbedding {
    pub fn decode(&self, embedding: &ArrayView1<f64>) -> Result<Number> {
        self.decode_report(embedding).map(|report| report.number)
    }

    /// `decode` 와 같지만 최대 위상 잔차도 함께 돌려준다
    pub fn decode_report(&self, embedding: &ArrayView1<f64>) -> Result<DecodeReport> {
        let header = read_header(embedding)?;
        let n = header.digit_count();

        let required = header.payload_len();
        if required > embedding.len() {
            return Err(EmbeddingError::TruncatedEmbedding {
                required,
                actual: embedding.len(),
            });
        }
        if header.int_length == 0 {
            return Err(EmbeddingError::EmptyIntegerPart);
        }

        let real_parts = embedding.slice(s![HEADER_LEN..HEADER_LEN + n]);
        let imag_parts = embedding.slice(s![HEADER_LEN + n..required]);
        let coeffs: Vec<Complex64> = real_parts
            .iter()
            .zip(imag_parts.iter())
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect();

        let recovered = spectrum::inverse(&coeffs);
        let max_phase_residual = recovered
            .iter()
            .map(|&c| phase_residual(c))
            .fold(0.0, f64::max);
        let digits = DigitSplit::from_sequence(
            recovered.iter().map(|&c| complex_to_digit(c)).collect(),
            header.int_length,
        );

        let number = assemble(header.sign, &digits)?;
        if max_phase_residual > AMBIGUITY_THRESHOLD {
            warn!(
                "ambiguous digit rounding while decoding {}: phase residual {:.4} rad exceeds {:.4}",
                number, max_phase_residual, AMBIGUITY_THRESHOLD
            );
        }
        debug!("decoded {} digits ({}+{}) -> {}", n, header.int_length, header.dec_length, number);

        Ok(DecodeReport {
            number,
            header,
            max_phase_residual,
        })
    }
}

/// 자릿수 그룹과 부호로 숫자 재구성
///
/// 소수부가 있으면 `"<정수부>.<소수부>"` 를 f64 로 파싱, 없으면 i64 정수.
fn assemble(sign: Sign, digits: &DigitSplit) -> Result<Number> {
    if digits.integer.is_empty() {
        return Err(EmbeddingError::EmptyIntegerPart);
    }
    let integer = digits.integer_str();

    if !digits.decimal.is_empty() {
        let magnitude: f64 = format!("{}.{}", integer, digits.decimal_str()).parse()?;
        return Ok(Number::Real(sign.as_f64() * magnitude));
    }

    let overflow = || {
        let prefix = if sign == Sign::Negative { "-" } else { "" };
        EmbeddingError::IntegerOverflow(format!("{}{}", prefix, integer))
    };
    let magnitude: u64 = integer.parse().map_err(|_| overflow())?;
    let signed = match sign {
        Sign::Positive => i128::from(magnitude),
        Sign::Negative => -i128::from(magnitude),
    };
    i64::try_from(signed).map(Number::Integer).map_err(|_| overflow())
}
