use chrono::NaiveTime;

use crate::errors::GeoError;
use crate::geo::distance_3d;
use crate::models::{Annotation, Sample, StepMetrics, TrackSummary};

/// Sekunder fra `a` til `b`, signert. Negativ ved ikke-monoton serie
/// (inkludert midnattsovergang i en tid-på-døgnet-serie).
fn seconds_between(a: NaiveTime, b: NaiveTime) -> f64 {
    let d = b.signed_duration_since(a);
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        // utenfor i64-nanosekunder skjer ikke innenfor ett døgn
        None => d.num_seconds() as f64,
    }
}

fn annotate_one(samples: &[Sample], i: usize) -> Result<Annotation, GeoError> {
    let s = &samples[i];
    let origin = &samples[0].position;

    // 0 for første sample per definisjon (beregnes fra origin selv,
    // så valideringen dekker også origin-posisjonen)
    let distance_from_origin_m = distance_3d(origin, &s.position)?;

    let step = if i == 0 {
        None
    } else {
        let prev = &samples[i - 1];
        let time_delta_s = seconds_between(prev.t, s.t);
        let distance_delta_m = distance_3d(&prev.position, &s.position)?;
        let speed_ms = if time_delta_s > 0.0 {
            Some(distance_delta_m / time_delta_s)
        } else {
            log::warn!(
                "non-monotonic timestamps at sample {i} (dt = {time_delta_s} s); speed excluded"
            );
            None
        };
        Some(StepMetrics { distance_delta_m, time_delta_s, speed_ms })
    };

    Ok(Annotation {
        position: s.position,
        t: s.t,
        distance_from_origin_m,
        altitude_above_origin_m: s.position.altitude_m - origin.altitude_m,
        step,
    })
}

/// Lat iterator over per-sample-annotasjoner for én track.
///
/// Origin er første sample og ligger fast for hele tracken. Renderere kan
/// streame herfra uten å materialisere hele serien; `analyze` bruker samme
/// iterator og folder sammendraget i samme pass.
pub struct Annotations<'a> {
    samples: &'a [Sample],
    idx: usize,
}

pub fn annotate(samples: &[Sample]) -> Annotations<'_> {
    Annotations { samples, idx: 0 }
}

impl<'a> Iterator for Annotations<'a> {
    type Item = Result<Annotation, GeoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.samples.len() {
            return None;
        }
        let i = self.idx;
        self.idx += 1;
        Some(annotate_one(self.samples, i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.samples.len() - self.idx;
        (rest, Some(rest))
    }
}

impl<'a> ExactSizeIterator for Annotations<'a> {}

/// Komplett resultat for én track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackAnalysis {
    pub annotations: Vec<Annotation>,
    pub summary: TrackSummary,
}

/// Ett forover-pass over tracken: annotasjoner + sammendrag.
///
/// - Tom track gir tomt resultat med null-summary (ingen feil).
/// - Track med ett sample gir null for fart/distanse; høydefeltene
///   defineres av det ene samplet.
/// - Steg med dt <= 0 bidrar med distanse og varighet, men holdes utenfor
///   fartserien (snittet skal ikke korrumperes av korrupt klokke).
/// - `avg_speed_ms` er aritmetisk snitt av fartserien, ikke distanse/tid.
///
/// Feiler kun på ikke-endelige koordinater; da finnes ingen delresultater.
pub fn analyze(samples: &[Sample]) -> Result<TrackAnalysis, GeoError> {
    let mut annotations = Vec::with_capacity(samples.len());

    let mut speed_sum = 0.0f64;
    let mut speed_count = 0usize;
    let mut max_speed = 0.0f64;
    let mut max_altitude = f64::NEG_INFINITY;
    let mut max_from_origin = 0.0f64;
    let mut total_distance = 0.0f64;
    let mut total_duration = 0.0f64;

    for ann in annotate(samples) {
        let ann = ann?;

        if let Some(step) = ann.step {
            total_distance += step.distance_delta_m;
            total_duration += step.time_delta_s;
            if let Some(v) = step.speed_ms {
                speed_sum += v;
                speed_count += 1;
                max_speed = max_speed.max(v);
            }
        }
        max_altitude = max_altitude.max(ann.position.altitude_m);
        max_from_origin = max_from_origin.max(ann.distance_from_origin_m);

        annotations.push(ann);
    }

    let summary = if annotations.is_empty() {
        TrackSummary::default()
    } else {
        let origin_altitude = annotations[0].position.altitude_m;
        TrackSummary {
            max_speed_ms: max_speed,
            avg_speed_ms: if speed_count > 0 {
                speed_sum / speed_count as f64
            } else {
                0.0
            },
            max_altitude_m: max_altitude,
            max_altitude_above_origin_m: max_altitude - origin_altitude,
            max_distance_from_origin_m: max_from_origin,
            total_distance_m: total_distance,
            total_duration_s: total_duration,
        }
    };

    Ok(TrackAnalysis { annotations, summary })
}
