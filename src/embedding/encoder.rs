use log::debug;
use ndarray::Array1;
use rustfft::num_complex::Complex64;

use super::types::{EmbeddingHeader, Number, NumberEmbedding};
use crate::config::HEADER_LEN;
use crate::error::{EmbeddingError, Result};
use crate::ops::{digit_to_complex, spectrum, DigitSplit};

/// 자릿수 그룹 → (정수부 위상 시퀀스, 소수부 위상 시퀀스)
pub fn number_to_complex_list(digits: &DigitSplit) -> (Vec<Complex64>, Vec<Complex64>) {
    let integer = digits.integer.iter().map(|&d| digit_to_complex(d)).collect();
    let decimal = digits.decimal.iter().map(|&d| digit_to_complex(d)).collect();
    (integer, decimal)
}

pub fn apply_fft(complex_list: &[Complex64]) -> Vec<Complex64> {
    spectrum::forward(complex_list)
}

impl NumberEmbedding {
    /// 숫자를 `target_length` 길이 벡터로 인코딩
    ///
    /// 레이아웃: `[sign, int_length, dec_length, re_0..re_{n-1}, im_0..im_{n-1}, 0, ...]`
    ///
    /// 자릿수가 `capacity()` 를 넘으면 잘라내지 않고 `CapacityExceeded` 를 돌려준다.
    pub fn encode(&self, number: impl Into<Number>) -> Result<Array1<f64>> {
        let number = number.into();
        let (sign, digits) = number.to_digits()?;
        let header = EmbeddingHeader {
            sign,
            int_length: digits.integer.len(),
            dec_length: digits.decimal.len(),
        };

        let capacity = self.capacity();
        if header.digit_count() > capacity {
            return Err(EmbeddingError::CapacityExceeded {
                digits: header.digit_count(),
                capacity,
                target_length: self.target_length(),
            });
        }

        // 정수부 뒤에 소수부를 이어 하나의 시퀀스로
        let (mut complex_list, decimal_part) = number_to_complex_list(&digits);
        complex_list.extend(decimal_part);
        let coeffs = apply_fft(&complex_list);

        let n = coeffs.len();
        let mut embedding = Array1::<f64>::zeros(self.target_length());
        embedding[0] = header.sign.as_f64();
        embedding[1] = header.int_length as f64;
        embedding[2] = header.dec_length as f64;
        for (k, c) in coeffs.iter().enumerate() {
            embedding[HEADER_LEN + k] = c.re;
            embedding[HEADER_LEN + n + k] = c.im;
        }

        debug!(
            "encoded {} -> {} digits ({}+{}), payload {}/{}",
            number,
            n,
            header.int_length,
            header.dec_length,
            header.payload_len(),
            self.target_length()
        );
        Ok(embedding)
    }
}
