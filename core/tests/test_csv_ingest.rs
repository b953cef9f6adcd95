//! Simulerer oppstrøms-parseren: CSV-logg med en "GPS"-kolonne ("lat lon"),
//! høyde og tid på døgnet, slått opp til kjernens Sample-modell.

use chrono::NaiveTime;
use trackgraph_core::{analyze, Sample};

const LOG: &str = "\
GPS,Altitude,Time
60.0 10.0,120.0,10:15:00.0
60.001 10.0,125.0,10:15:02.0
60.002 10.001,122.0,10:15:05.5
";

fn samples_from_csv(data: &str) -> Vec<Sample> {
    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    let mut samples = Vec::new();
    for record in rdr.records() {
        let record = record.unwrap();
        let mut gps = record[0].split_whitespace();
        let lat: f64 = gps.next().unwrap().parse().unwrap();
        let lon: f64 = gps.next().unwrap().parse().unwrap();
        let alt: f64 = record[1].parse().unwrap();
        let t = NaiveTime::parse_from_str(&record[2], "%H:%M:%S%.f").unwrap();
        samples.push(Sample::new(lat, lon, alt, t));
    }
    samples
}

#[test]
fn test_csv_shaped_track_end_to_end() {
    let samples = samples_from_csv(LOG);
    assert_eq!(samples.len(), 3);

    let analysis = analyze(&samples).unwrap();
    let s = analysis.summary;

    // ~111 m pr 0.001 breddegrad, pluss høydevariasjon
    assert!(s.total_distance_m > 200.0 && s.total_distance_m < 300.0);
    assert!((s.total_duration_s - 5.5).abs() < 1e-9);
    assert_eq!(s.max_altitude_m, 125.0);
    assert_eq!(s.max_altitude_above_origin_m, 5.0);
    assert!(s.max_distance_from_origin_m > 0.0);
    assert!(s.max_speed_ms > 0.0);
    assert_eq!(analysis.annotations[0].distance_from_origin_m, 0.0);
}
