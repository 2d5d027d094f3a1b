//! PyO3 bindings for `triangle`.
//!
//! Notes
//! - Keep bindings thin: sides cross the boundary as floats, kinds as their
//!   lowercase labels.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Classify a triangle; returns "equilateral", "isosceles" or "scalene".
///
/// Raises `ValueError` if the sides cannot form a triangle.
#[pyfunction]
fn classify(a: f64, b: f64, c: f64) -> PyResult<&'static str> {
    triangle::classify(a, b, c)
        .map(|kind| kind.label())
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// `True` iff the sides form a valid (non-degenerate) triangle.
#[pyfunction]
fn is_valid(a: f64, b: f64, c: f64) -> bool {
    triangle::validate(a, b, c).is_ok()
}

#[pymodule]
fn triangle_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add("__version__", triangle::VERSION)?;
    Ok(())
}
