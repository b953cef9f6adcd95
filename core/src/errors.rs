use thiserror::Error;

/// Feil fra geometri-laget. Ikke-endelige koordinater avvises ved grensen
/// i stedet for å slippe NaN gjennom beregningene.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoError {
    #[error("non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Feil fra JSON-grensen (py-bindings og andre tolerante innganger).
#[derive(Debug, Error)]
pub enum IngestError {
    // serde_path_to_error sin Display inkluderer JSON-stien til feltet som feilet
    #[error("invalid samples JSON: {0}")]
    Json(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("sample {index}: unparseable time-of-day {value:?}: {source}")]
    BadTime {
        index: usize,
        value: String,
        source: chrono::ParseError,
    },

    #[error("serializing analysis to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}
