use gesture_core::cli::{capture_aggregates, print_capture_report};
use gesture_core::{build_feature_payload, RawCapture, Sample, SampleIn, TargetLen};

#[test]
fn test_capture_aggregates_match_payload() {
    let mut capture = RawCapture::new(
        "O",
        (0..25)
            .map(|i| {
                let a = i as f64 * 0.25;
                Sample::new(a.cos(), a.sin(), 0.1 * a, i as f64 * 16.0)
            })
            .collect(),
    );
    // to ugyldige samples som validatoren skal fjerne
    capture.readings.push(SampleIn::default());
    capture.readings.push(SampleIn { x: None, ..SampleIn::from(Sample::new(0.0, 0.0, 0.0, 400.0)) });

    let (valid, agg) = capture_aggregates(&capture, TargetLen::DEFAULT);
    assert_eq!(valid, 25);

    let payload = build_feature_payload(&capture.readings, Some(capture.label.as_str()));
    let values: Vec<f64> = payload.features.values().take(6).collect();
    assert_eq!(values, agg.values().to_vec());
}

#[test]
fn test_capture_report_smoke() {
    // tomt og umerket opptak skal ikke panikke
    let (valid, agg) = capture_aggregates(&RawCapture::default(), TargetLen::DEFAULT);
    assert_eq!(valid, 0);
    assert_eq!(agg.total_path_length, 0.0);
    print_capture_report(&RawCapture::default(), TargetLen::DEFAULT);
}
