use crate::analyzer::analyze;
use crate::errors::GeoError;
use crate::models::Sample;

/// Konsoll-sammendrag for én track. Omregning m/s -> km/t skjer her,
/// i presentasjonslaget; kjernen er SI-ren.
pub fn print_track_report(samples: &[Sample]) -> Result<(), GeoError> {
    let analysis = analyze(samples)?;
    let s = analysis.summary;

    println!("--- Track Report ---");
    println!("Samples: {}", analysis.annotations.len());
    println!("Total distance: {:.1} m", s.total_distance_m);
    println!("Total duration: {:.1} s", s.total_duration_s);
    println!(
        "Max speed: {:.1} km/h  (avg {:.1} km/h)",
        s.max_speed_ms * 3.6,
        s.avg_speed_ms * 3.6
    );
    println!(
        "Max altitude: {:.1} m  ({:+.1} m vs start)",
        s.max_altitude_m, s.max_altitude_above_origin_m
    );
    println!("Max distance from home: {:.1} m", s.max_distance_from_origin_m);

    Ok(())
}
