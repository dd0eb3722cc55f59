use crate::error::{EmbeddingError, Result};

/// 10진 표기를 소수점 기준으로 나눈 자릿수 그룹
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitSplit {
    /// 정수부 자릿수 (왼쪽→오른쪽)
    pub integer: Vec<u8>,
    /// 소수부 자릿수, 소수점이 없으면 비어 있음
    pub decimal: Vec<u8>,
}

impl DigitSplit {
    /// `"54.454"` → integer `[5, 4]`, decimal `[4, 5, 4]`
    pub fn from_decimal_str(rendered: &str) -> Result<Self> {
        let (integer, decimal) = match rendered.split_once('.') {
            Some((int_part, dec_part)) => (int_part, dec_part),
            None => (rendered, ""),
        };
        Ok(Self {
            integer: parse_digits(integer)?,
            decimal: parse_digits(decimal)?,
        })
    }

    /// 앞 `int_length` 개는 정수부, 나머지는 소수부
    pub fn from_sequence(mut digits: Vec<u8>, int_length: usize) -> Self {
        let decimal = digits.split_off(int_length.min(digits.len()));
        Self {
            integer: digits,
            decimal,
        }
    }

    /// 전체 자릿수 (int_length + dec_length)
    pub fn len(&self) -> usize {
        self.integer.len() + self.decimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 정수부 뒤에 소수부를 이어 붙인 순서
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.integer.iter().chain(self.decimal.iter()).copied()
    }

    pub fn integer_str(&self) -> String {
        join_digits(&self.integer)
    }

    pub fn decimal_str(&self) -> String {
        join_digits(&self.decimal)
    }
}

fn parse_digits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|ch| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(EmbeddingError::InvalidDigit(ch))
        })
        .collect()
}

fn join_digits(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_decimal_point() {
        let split = DigitSplit::from_decimal_str("54.454").unwrap();
        assert_eq!(split.integer, vec![5, 4]);
        assert_eq!(split.decimal, vec![4, 5, 4]);
        assert_eq!(split.len(), 5);
        assert_eq!(split.iter().collect::<Vec<_>>(), vec![5, 4, 4, 5, 4]);
    }

    #[test]
    fn test_no_decimal_point_gives_empty_decimal() {
        let split = DigitSplit::from_decimal_str("1200").unwrap();
        assert_eq!(split.integer, vec![1, 2, 0, 0]);
        assert!(split.decimal.is_empty());
    }

    #[test]
    fn test_rejects_non_digit() {
        assert_eq!(
            DigitSplit::from_decimal_str("1e5"),
            Err(EmbeddingError::InvalidDigit('e'))
        );
        assert_eq!(
            DigitSplit::from_decimal_str("-3"),
            Err(EmbeddingError::InvalidDigit('-'))
        );
    }

    #[test]
    fn test_from_sequence_and_join() {
        let split = DigitSplit::from_sequence(vec![0, 0, 7, 1, 0], 3);
        assert_eq!(split.integer_str(), "007");
        assert_eq!(split.decimal_str(), "10");

        let split = DigitSplit::from_sequence(vec![4, 2], 5);
        assert_eq!(split.integer, vec![4, 2]);
        assert!(split.decimal.is_empty());
    }
}
