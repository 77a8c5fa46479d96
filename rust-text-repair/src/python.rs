//! Python bindings via PyO3.
//!
//! ```python
//! import rust_text_repair
//!
//! rust_text_repair.clean_selected_text("r a n s o m w a r e")
//! text, pattern, confidence, subs = rust_text_repair.reconstruct_text("denialofservice")
//! ```

use pyo3::prelude::*;

/// Clean a PDF selection
#[pyfunction]
fn clean_selected_text(text: String) -> PyResult<String> {
    Ok(crate::clean_selected_text(&text))
}

/// Clean a selection and report how it was repaired
/// Returns: (text, pattern, confidence, substitution_count)
#[pyfunction]
fn reconstruct_text(text: String) -> PyResult<(String, String, Option<f64>, u64)> {
    let result = crate::reconstruct(&text);
    Ok((
        result.text,
        result.pattern.as_str().to_string(),
        result.confidence,
        result.substitutions,
    ))
}

/// Clean many selections in parallel, keeping order
#[pyfunction]
fn clean_batch(texts: Vec<String>) -> PyResult<Vec<String>> {
    Ok(crate::clean_batch(&texts))
}

/// Classify a selection: extreme_spacing, missing_spaces, mixed or normal
#[pyfunction]
fn detect_text_pattern(text: String) -> PyResult<String> {
    Ok(crate::detect_text_pattern(text.trim()).as_str().to_string())
}

#[pyfunction]
fn is_valid_word(word: String) -> PyResult<bool> {
    Ok(crate::is_valid_word(&word))
}

#[pymodule]
fn rust_text_repair(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clean_selected_text, m)?)?;
    m.add_function(wrap_pyfunction!(reconstruct_text, m)?)?;
    m.add_function(wrap_pyfunction!(clean_batch, m)?)?;
    m.add_function(wrap_pyfunction!(detect_text_pattern, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_word, m)?)?;
    Ok(())
}
