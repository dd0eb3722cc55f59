use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyModule};

use crate::embedding::{Number, NumberEmbedding};
use crate::error::EmbeddingError;

impl From<EmbeddingError> for PyErr {
    fn from(err: EmbeddingError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

#[pyclass(name = "NumberEmbedding")]
#[derive(Clone)]
pub struct NumberEmbeddingPy {
    inner: NumberEmbedding,
}

#[pymethods]
impl NumberEmbeddingPy {
    #[new]
    #[pyo3(signature = (length = 4096))]
    pub fn new(length: usize) -> PyResult<Self> {
        Ok(NumberEmbeddingPy {
            inner: NumberEmbedding::new(length)?,
        })
    }

    #[getter]
    fn length(&self) -> usize {
        self.inner.target_length()
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// float 는 소수부를 가진 실수로, int 는 정수로 인코딩
    #[pyo3(name = "encode")]
    fn encode<'py>(&self, py: Python<'py>, number: &PyAny) -> PyResult<&'py PyArray1<f64>> {
        let number = match number.downcast::<PyFloat>() {
            Ok(value) => Number::Real(value.value()),
            Err(_) => Number::Integer(number.extract::<i64>()?),
        };
        let embedding = self.inner.encode(number)?;
        Ok(embedding.into_pyarray(py))
    }

    #[pyo3(name = "decode")]
    fn decode(&self, py: Python, embedding: PyReadonlyArray1<f64>) -> PyResult<PyObject> {
        let number = self.inner.decode(&embedding.as_array())?;
        Ok(match number {
            Number::Integer(i) => i.into_py(py),
            Number::Real(x) => x.into_py(py),
        })
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<NumberEmbeddingPy>()?;
    Ok(())
}
