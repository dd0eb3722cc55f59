//! # 숫자 위상 임베딩
//!
//! 자릿수마다 단위원 위의 위상점을 만들고 DFT 계수로 바꿔 고정 길이 벡터에 담는다.
//! 디코딩은 역 DFT 후 각도를 π/10 간격으로 반올림해 자릿수를 되찾는다.

pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::{read_header, DecodeReport, AMBIGUITY_THRESHOLD};
pub use encoder::{apply_fft, number_to_complex_list};
pub use types::{EmbeddingHeader, Number, NumberEmbedding, Sign};
