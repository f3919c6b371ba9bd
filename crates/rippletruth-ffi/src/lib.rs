// ─────────────────────────────────────────────────────────────────────
// RippleTruth — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the RippleTruth pipeline.
//!
//! Exposes `RippleConfig`, `RipplePipeline`, `Report`, plus the
//! `is_sentinel`, `fetch_url_text` and `ocr_extract` helpers.
//!
//! # FFI Safety
//!
//! - GIL acquired via `Python::with_gil` before every Python callback.
//! - Python exceptions inside an OCR callback → `[Error …` sentinel.
//! - All config validated before storage (`RippleConfig::validate()`).
//!
//! Usage from Python:
//! ```python
//! from rippletruth_kernel import RipplePipeline
//!
//! report = RipplePipeline().analyze("The economy is great and will improve.")
//! print(report.to_markdown())
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use rippletruth_core::{render_markdown, RipplePipeline};
use rippletruth_ingest::{ExternalOcr, HttpFetcher, OcrService, TextFetcher};
use rippletruth_types::{Report, RippleConfig, RippleError};

// ─── PyRippleConfig ─────────────────────────────────────────────────

/// Python-visible configuration.
#[pyclass(name = "RippleConfig")]
#[derive(Clone)]
struct PyRippleConfig {
    inner: RippleConfig,
}

#[pymethods]
impl PyRippleConfig {
    #[new]
    #[pyo3(signature = (
        enable_fact_stack = true,
        enable_linguistic_force = true,
        fetch_timeout_secs = 10,
        min_paragraph_chars = 40,
    ))]
    fn new(
        enable_fact_stack: bool,
        enable_linguistic_force: bool,
        fetch_timeout_secs: u64,
        min_paragraph_chars: usize,
    ) -> PyResult<Self> {
        let config = RippleConfig {
            enable_fact_stack,
            enable_linguistic_force,
            fetch_timeout_secs,
            min_paragraph_chars,
            ..RippleConfig::default()
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            RippleConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    #[getter]
    fn enable_fact_stack(&self) -> bool {
        self.inner.enable_fact_stack
    }

    #[getter]
    fn enable_linguistic_force(&self) -> bool {
        self.inner.enable_linguistic_force
    }

    fn __repr__(&self) -> String {
        format!(
            "RippleConfig(fact_stack={}, linguistic_force={}, fetch_timeout_secs={})",
            self.inner.enable_fact_stack,
            self.inner.enable_linguistic_force,
            self.inner.fetch_timeout_secs
        )
    }
}

// ─── PyReport ───────────────────────────────────────────────────────

/// Python-visible analysis report.
#[pyclass(name = "Report")]
#[derive(Clone)]
struct PyReport {
    inner: Report,
}

#[pymethods]
impl PyReport {
    #[getter]
    fn topic(&self) -> &'static str {
        self.inner.narrative.topic.label()
    }

    #[getter]
    fn polarity(&self) -> &'static str {
        self.inner.narrative.polarity.label()
    }

    #[getter]
    fn tone(&self) -> &'static str {
        self.inner.narrative.tone.label()
    }

    #[getter]
    fn structure(&self) -> &'static str {
        self.inner.narrative.structure.label()
    }

    #[getter]
    fn ripple_score(&self) -> f64 {
        self.inner.metrics.ripple_score
    }

    #[getter]
    fn reliability_index(&self) -> f64 {
        self.inner.traceback.reliability_index
    }

    #[getter]
    fn force_score(&self) -> Option<f64> {
        self.inner.linguistic_force.map(|f| f.force_score)
    }

    #[getter]
    fn interpretation(&self) -> &str {
        &self.inner.interpretation
    }

    #[getter]
    fn human_narrative(&self) -> &str {
        &self.inner.human_narrative
    }

    #[getter]
    fn enhancement(&self) -> Option<&str> {
        self.inner.enhancement.as_deref()
    }

    fn to_markdown(&self) -> String {
        render_markdown(&self.inner)
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let r = &self.inner;

        let narrative = PyDict::new(py);
        narrative.set_item("topic", r.narrative.topic.label())?;
        narrative.set_item("polarity", r.narrative.polarity.label())?;
        narrative.set_item("tone", r.narrative.tone.label())?;
        narrative.set_item("structure", r.narrative.structure.label())?;

        let features = PyDict::new(py);
        features.set_item("intent_strength", r.features.intent_strength)?;
        features.set_item("stability", r.features.stability)?;
        features.set_item("emotion", r.features.emotion)?;
        features.set_item("volatility", r.features.volatility)?;
        features.set_item("harmonics", r.features.harmonics)?;

        let metrics = PyDict::new(py);
        metrics.set_item("FILS", r.metrics.fils)?;
        metrics.set_item("UCIP", r.metrics.ucip)?;
        metrics.set_item("TTCF", r.metrics.ttcf)?;
        metrics.set_item("Drift", r.metrics.drift)?;
        metrics.set_item("RippleScore", r.metrics.ripple_score)?;

        let actors = PyDict::new(py);
        for (actor, p) in r.traceback.actor_distribution.iter() {
            actors.set_item(actor.label(), p)?;
        }
        let traceback = PyDict::new(py);
        traceback.set_item("actor_probabilities", actors)?;
        traceback.set_item("amplification_pattern", r.traceback.amplification_pattern)?;
        traceback.set_item("mutation_likelihood", r.traceback.mutation_likelihood)?;
        traceback.set_item("RippleTruthIndex", r.traceback.reliability_index)?;
        traceback.set_item("interpretation", &r.traceback.interpretation)?;

        let dict = PyDict::new(py);
        dict.set_item("narrative", narrative)?;
        dict.set_item("features", features)?;
        dict.set_item("intention", metrics)?;
        dict.set_item("traceback", traceback)?;

        match &r.linguistic_force {
            Some(f) => {
                let force = PyDict::new(py);
                force.set_item("emotionality", f.emotionality)?;
                force.set_item("assertion", f.assertion)?;
                force.set_item("volatility", f.volatility)?;
                force.set_item("intent_strength", f.intent_strength)?;
                force.set_item("coherence", f.coherence)?;
                force.set_item("force_score", f.force_score)?;
                dict.set_item("linguistic_force", force)?;
            }
            None => dict.set_item("linguistic_force", py.None())?,
        }

        match &r.fact_stack {
            Some(fs) => {
                let facts = PyDict::new(py);
                facts.set_item("claims", fs.claims.clone())?;
                facts.set_item("contradictions", fs.contradictions.clone())?;
                facts.set_item("exaggerations", fs.exaggerations.clone())?;
                facts.set_item("stability_score", fs.stability_score)?;
                dict.set_item("fact_stack", facts)?;
            }
            None => dict.set_item("fact_stack", py.None())?,
        }

        dict.set_item("human_narrative", &r.human_narrative)?;
        dict.set_item("enhancement", r.enhancement.as_deref())?;
        dict.set_item("interpretation", &r.interpretation)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Report(topic={:?}, ripple_score={:.4}, reliability_index={:.1})",
            self.topic(),
            self.inner.metrics.ripple_score,
            self.inner.traceback.reliability_index
        )
    }
}

// ─── PyRipplePipeline ───────────────────────────────────────────────

/// Python-visible pipeline.
#[pyclass(name = "RipplePipeline")]
struct PyRipplePipeline {
    inner: RipplePipeline,
}

#[pymethods]
impl PyRipplePipeline {
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyRippleConfig>) -> Self {
        let cfg = config.map(|c| c.inner).unwrap_or_default();
        Self {
            inner: RipplePipeline::new(cfg),
        }
    }

    /// Score any string, including the empty string.
    fn analyze(&self, py: Python<'_>, text: &str) -> PyReport {
        let report = py.allow_threads(|| self.inner.analyze(text));
        PyReport { inner: report }
    }

    /// Score collaborator output; raises ValueError on a sentinel.
    fn analyze_resolved(&self, py: Python<'_>, text: &str) -> PyResult<PyReport> {
        match py.allow_threads(|| self.inner.analyze_resolved(text)) {
            Ok(report) => Ok(PyReport { inner: report }),
            Err(RippleError::Extraction(s)) => Err(PyValueError::new_err(s)),
            Err(e) => Err(PyRuntimeError::new_err(e.to_string())),
        }
    }
}

// ─── Free functions ─────────────────────────────────────────────────

/// True if `text` is an `[Error …` / `[No readable …` sentinel.
#[pyfunction]
fn is_sentinel(text: &str) -> bool {
    rippletruth_types::is_sentinel(text)
}

/// Fetch article text from `url`, or return a sentinel string.
#[pyfunction]
#[pyo3(signature = (url, config = None))]
fn fetch_url_text(py: Python<'_>, url: &str, config: Option<PyRippleConfig>) -> PyResult<String> {
    let cfg = config.map(|c| c.inner).unwrap_or_default();
    let fetcher = HttpFetcher::new(&cfg).map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    Ok(py.allow_threads(|| fetcher.fetch_url_text(url)))
}

/// Run OCR through a Python `recognizer(bytes) -> str` callback.
///
/// Without a recognizer the "OCR unavailable" sentinel is returned.
#[pyfunction]
#[pyo3(signature = (image, recognizer = None))]
fn ocr_extract(image: Vec<u8>, recognizer: Option<PyObject>) -> String {
    let service = match recognizer {
        Some(cb) => OcrService::new(ExternalOcr::new(move |bytes: &[u8]| {
            Python::with_gil(|py| match cb.call1(py, (bytes,)) {
                Ok(result) => result
                    .extract::<String>(py)
                    .map_err(|e| RippleError::Ocr(e.to_string())),
                Err(e) => Err(RippleError::Ocr(e.to_string())),
            })
        })),
        None => OcrService::default(),
    };
    service.ocr_extract(&image)
}

// ─── Module ─────────────────────────────────────────────────────────

#[pymodule]
fn rippletruth_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRippleConfig>()?;
    m.add_class::<PyRipplePipeline>()?;
    m.add_class::<PyReport>()?;
    m.add_function(wrap_pyfunction!(is_sentinel, m)?)?;
    m.add_function(wrap_pyfunction!(fetch_url_text, m)?)?;
    m.add_function(wrap_pyfunction!(ocr_extract, m)?)?;
    m.add("TABLES_VERSION", rippletruth_core::tables::TABLES_VERSION)?;
    Ok(())
}
