//! pyo3-innganger for Python-frontenden (kart-rendering). All inn/ut går
//! som JSON-strenger; feil mappes til PyValueError med full kontekst.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analyzer::analyze;
use crate::ingest::{analysis_to_json, samples_from_json};
use crate::models::Position3D;

/// Analyserer én track fra en JSON-liste av samples og returnerer
/// `{"annotations": [...], "summary": {...}}` som JSON-streng.
#[pyfunction]
pub fn analyze_track_json(samples_json: &str) -> PyResult<String> {
    let samples =
        samples_from_json(samples_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let analysis = analyze(&samples).map_err(|e| PyValueError::new_err(e.to_string()))?;
    analysis_to_json(&analysis).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// 3D-avstand (meter) mellom to posisjoner gitt som grader + meter.
#[pyfunction]
pub fn distance_3d(
    lat1: f64,
    lon1: f64,
    alt1: f64,
    lat2: f64,
    lon2: f64,
    alt2: f64,
) -> PyResult<f64> {
    let a = Position3D::new(lat1, lon1, alt1);
    let b = Position3D::new(lat2, lon2, alt2);
    crate::geo::distance_3d(&a, &b).map_err(|e| PyValueError::new_err(e.to_string()))
}
