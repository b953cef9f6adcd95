use chrono::NaiveTime;
use serde::{Serialize, Deserialize};

/// Geografisk posisjon med høyde (WGS84-grader, meter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub lat_deg: f64,      // grader, -90..90
    pub lon_deg: f64,      // grader, -180..180
    pub altitude_m: f64,   // meter, signert
}

impl Position3D {
    pub fn new(lat_deg: f64, lon_deg: f64, altitude_m: f64) -> Self {
        Self { lat_deg, lon_deg, altitude_m }
    }
}

/// Ett telemetri-punkt: posisjon + tid på døgnet (sub-sekund-presisjon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub position: Position3D,
    pub t: NaiveTime,
}

impl Sample {
    pub fn new(lat_deg: f64, lon_deg: f64, altitude_m: f64, t: NaiveTime) -> Self {
        Self { position: Position3D::new(lat_deg, lon_deg, altitude_m), t }
    }
}

/// Avledede tall for overgangen fra forrige sample til dette.
///
/// `speed_ms` er `None` når tidsdeltaet er 0 eller negativt (ikke-monoton
/// tidsserie); distansen rapporteres likevel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    pub distance_delta_m: f64,
    pub time_delta_s: f64,
    pub speed_ms: Option<f64>,
}

/// Per-sample record for rendering (markør/tooltip per punkt).
/// `step` er `None` kun for første sample i tracken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: Position3D,
    pub t: NaiveTime,
    pub distance_from_origin_m: f64,
    pub altitude_above_origin_m: f64,
    pub step: Option<StepMetrics>,
}

/// Aggregater for én hel track. Alle felt er 0 for tom track;
/// hastighets- og distansefeltene er 0 for en track med ett sample.
///
/// Hastigheter er m/s; omregning til km/t er presentasjonslagets ansvar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackSummary {
    pub max_speed_ms: f64,
    pub avg_speed_ms: f64,
    pub max_altitude_m: f64,
    pub max_altitude_above_origin_m: f64,
    pub max_distance_from_origin_m: f64,
    pub total_distance_m: f64,
    pub total_duration_s: f64,
}
