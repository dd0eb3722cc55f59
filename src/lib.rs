//! Phase Embedding - 숫자를 고정 길이 실수 벡터로 가역 인코딩
//!
//! 각 자릿수 `d` 를 `e^{iπd/10}` 로 옮기고, 그 시퀀스의 DFT 계수를
//! `[sign, int_length, dec_length, re.., im.., 0..]` 형태로 패킹한다.
//!
//! ```
//! use phase_embedding::{Number, NumberEmbedding};
//!
//! let codec = NumberEmbedding::default();
//! let embedding = codec.encode(-54.454).unwrap();
//! assert_eq!(embedding.len(), 4096);
//! assert_eq!(codec.decode(&embedding.view()).unwrap(), Number::Real(-54.454));
//! ```

pub mod config;
pub mod embedding;
pub mod error;
pub mod ops;

#[cfg(feature = "python")]
mod bindings;

pub use config::{EmbeddingConfig, DEFAULT_TARGET_LENGTH};
pub use embedding::{DecodeReport, EmbeddingHeader, Number, NumberEmbedding, Sign};
pub use error::{EmbeddingError, Result};
