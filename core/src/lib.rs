//! trackgraph core: telemetri-til-metrikk-motor for GPS-tracks.
//!
//! Tar en ordnet, ikke-tom serie av samples (posisjon, høyde, tid på døgnet)
//! og avleder per-sample-annotasjoner pluss et track-sammendrag. Interne
//! enheter er SI (meter, sekunder, m/s); presentasjonslag skalerer selv.
//! Parsing av råfiler og all rendering ligger i Python-frontenden.

pub mod analyzer;
pub mod cli;
pub mod errors;
pub mod geo;
pub mod ingest;
pub mod models;

#[cfg(feature = "python")]
mod py;

pub use analyzer::{analyze, annotate, Annotations, TrackAnalysis};
pub use errors::{GeoError, IngestError};
pub use geo::{distance_3d, EARTH_RADIUS_M};
pub use models::{Annotation, Position3D, Sample, StepMetrics, TrackSummary};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn trackgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py::analyze_track_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::distance_3d, m)?)?;
    Ok(())
}
