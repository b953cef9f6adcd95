//! JSON-grensen mot frontenden: tolerant parsing av sample-lister og
//! serialisering av analyseresultatet. Filparsing (CSV-oppdeling, dropping
//! av rader med manglende felt) skjer oppstrøms; her antas velformet JSON
//! med mulige alias-feltnavn.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::analyzer::TrackAnalysis;
use crate::errors::IngestError;
use crate::models::{Annotation, Sample, TrackSummary};

/// Tolerant sample-inngang (aksepter eldre/avvikende feltnavn)
#[derive(Debug, Deserialize, Clone)]
struct SampleInTol {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    lon: f64,
    #[serde(default, alias = "altitude", alias = "altitude_m", alias = "elev")]
    alt: f64,
    #[serde(alias = "time", alias = "timestamp")]
    t: String,
}

/// Tid på døgnet, f.eks. "13:37:02.250" (brøkdel valgfri)
const TIME_OF_DAY_FMT: &str = "%H:%M:%S%.f";

/// Parser en JSON-liste av samples til kjernens modell.
pub fn samples_from_json(samples_json: &str) -> Result<Vec<Sample>, IngestError> {
    let mut de = serde_json::Deserializer::from_str(samples_json);
    let raw: Vec<SampleInTol> = spte::deserialize(&mut de)?;

    let mut out = Vec::with_capacity(raw.len());
    for (index, r) in raw.into_iter().enumerate() {
        let t = NaiveTime::parse_from_str(&r.t, TIME_OF_DAY_FMT).map_err(|source| {
            IngestError::BadTime { index, value: r.t.clone(), source }
        })?;
        out.push(Sample::new(r.lat, r.lon, r.alt, t));
    }
    Ok(out)
}

#[derive(Serialize)]
struct AnalysisOut<'a> {
    annotations: &'a [Annotation],
    summary: &'a TrackSummary,
}

/// Serialiserer annotasjoner + sammendrag som ett JSON-objekt.
pub fn analysis_to_json(analysis: &TrackAnalysis) -> Result<String, IngestError> {
    let out = AnalysisOut {
        annotations: &analysis.annotations,
        summary: &analysis.summary,
    };
    Ok(serde_json::to_string(&out)?)
}
