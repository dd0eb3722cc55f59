use thiserror::Error;

/// 임베딩 인코딩/디코딩 오류
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmbeddingError {
    /// 헤더가 요구하는 계수 개수보다 벡터가 짧음
    #[error("Truncated embedding: layout needs {required} values, got {actual}")]
    TruncatedEmbedding { required: usize, actual: usize },

    /// 정수부 자릿수가 0
    #[error("Empty integer part: int_length is 0")]
    EmptyIntegerPart,

    /// 자릿수가 target_length 용량을 초과
    ///
    /// 더 큰 `target_length`로 다시 시도하면 복구된다.
    #[error("Capacity exceeded: {digits} digits, capacity {capacity} for target length {target_length}")]
    CapacityExceeded {
        digits: usize,
        capacity: usize,
        target_length: usize,
    },

    #[error("Vector too short: need at least 3 header values, got {len}")]
    VectorTooShort { len: usize },

    #[error("Invalid sign slot: {0}")]
    InvalidSign(f64),

    #[error("Invalid {field} slot: {value}")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("Non-finite input: {0}")]
    NonFiniteInput(f64),

    #[error("Invalid digit character: {0:?}")]
    InvalidDigit(char),

    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("Integer overflow: {0} does not fit in i64")]
    IntegerOverflow(String),

    /// 헤더 3칸 + 최소 1자리(실수부/허수부)를 담을 수 없는 길이
    #[error("Invalid target length {0}: must be at least 5")]
    InvalidTargetLength(usize),
}

pub type Result<T> = std::result::Result<T, EmbeddingError>;
