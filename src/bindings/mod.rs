mod embedding;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Phase Embedding - 숫자 ↔ 고정 길이 벡터
#[pymodule]
pub fn phase_embedding(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("DEFAULT_TARGET_LENGTH", crate::config::DEFAULT_TARGET_LENGTH)?;
    embedding::register(m)?;
    Ok(())
}
