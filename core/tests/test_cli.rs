use chrono::NaiveTime;
use trackgraph_core::cli::print_track_report;
use trackgraph_core::Sample;

#[test]
fn test_report_smoke() {
    let t0 = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let t1 = NaiveTime::from_hms_opt(10, 0, 10).unwrap();
    let samples = vec![
        Sample::new(59.91, 10.75, 15.0, t0),
        Sample::new(59.912, 10.752, 22.0, t1),
    ];
    print_track_report(&samples).unwrap();
}

#[test]
fn test_report_handles_empty_track() {
    print_track_report(&[]).unwrap();
}
