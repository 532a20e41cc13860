use gesture_core::types::{dataset_header, feature_keys};
use gesture_core::{build_feature_payload, validate_samples, Sample, SampleIn, TARGET_POINTS};

fn s(x: f64, y: f64, z: f64, t: f64) -> Sample {
    Sample::new(x, y, z, t)
}

#[test]
fn validator_drops_non_finite_and_keeps_order() {
    let input = vec![
        s(1.0, 1.0, 1.0, 0.0),
        s(f64::NAN, 1.0, 1.0, 10.0),
        s(2.0, 2.0, 2.0, 20.0),
        s(3.0, f64::INFINITY, 3.0, 30.0),
        s(4.0, 4.0, 4.0, f64::NEG_INFINITY),
        s(2.0, 2.0, 2.0, 20.0),
    ];
    let valid = validate_samples(&input);
    assert_eq!(valid, vec![input[0], input[2], input[5]]);
}

#[test]
fn validator_handles_missing_fields_from_json() {
    let raw = r#"[
        {"x": 1, "y": 2, "z": 3, "msElapsedSinceStart": 0},
        {"x": 1, "z": 3, "msElapsedSinceStart": 5},
        {"x": 1, "y": 2, "z": 3, "msElapsedSinceStart": null},
        {"x": 4, "y": 5, "z": 6, "msElapsedSinceStart": 10}
    ]"#;
    let parsed: Vec<SampleIn> = serde_json::from_str(raw).unwrap();
    let valid = validate_samples(&parsed);
    assert_eq!(valid, vec![s(1.0, 2.0, 3.0, 0.0), s(4.0, 5.0, 6.0, 10.0)]);
}

#[test]
fn payload_has_86_keys_in_contract_order() {
    let input: Vec<Sample> = (0..50).map(|i| s(i as f64, 2.0 * i as f64, 0.0, i as f64 * 20.0)).collect();
    let payload = build_feature_payload(&input, Some("A"));

    let keys: Vec<&str> = payload.features.keys().collect();
    assert_eq!(keys.len(), 6 + 4 * TARGET_POINTS);
    assert_eq!(
        &keys[..10],
        &[
            "duration_ms",
            "total_path_length",
            "avg_step_length",
            "range_x",
            "range_y",
            "range_z",
            "p1_x",
            "p1_y",
            "p1_z",
            "p1_t"
        ]
    );
    assert_eq!(keys[keys.len() - 1], "p20_t");
    assert_eq!(keys, feature_keys(TARGET_POINTS));

    let header = dataset_header(TARGET_POINTS);
    assert_eq!(header.len(), 86);
    assert_eq!(header[0], "label");
}

#[test]
fn payload_serializes_as_features_object_without_label() {
    let payload = build_feature_payload(&[s(1.0, 0.0, 0.0, 0.0), s(3.0, 0.0, 0.0, 100.0)], Some("B"));
    let json = serde_json::to_string(&payload).unwrap();

    assert!(json.starts_with(r#"{"features":{"duration_ms":100.0,"total_path_length":"#));
    assert!(!json.contains("\"label\""));

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["features"]["p1_x"], 0.0);
    assert_eq!(v["features"]["p20_x"], 2.0);
    assert_eq!(v["features"]["p20_t"], 100.0);
}

#[test]
fn empty_capture_gives_all_zero_features() {
    let payload = build_feature_payload::<Sample>(&[], None);
    assert_eq!(payload.features.len(), 86);
    assert!(payload.features.values().all(|v| v == 0.0));
    assert_eq!(payload.label, None);
}

#[test]
fn all_invalid_capture_behaves_like_empty() {
    let input = vec![s(f64::NAN, 0.0, 0.0, 0.0); 5];
    let payload = build_feature_payload(&input, None);
    assert!(payload.features.values().all(|v| v == 0.0));
}

#[test]
fn payload_is_byte_identical_across_builds() {
    let input: Vec<Sample> = (0..23)
        .map(|i| s((i as f64 * 0.7).sin(), (i as f64 * 0.3).cos(), -0.1 * i as f64, i as f64 * 17.0))
        .collect();
    let a = serde_json::to_string(&build_feature_payload(&input, Some("C"))).unwrap();
    let b = serde_json::to_string(&build_feature_payload(&input, Some("C"))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn features_are_finite_for_finite_input() {
    let input: Vec<Sample> = (0..7).map(|i| s(1e6 * i as f64, -1e-6 * i as f64, 0.0, i as f64)).collect();
    let payload = build_feature_payload(&input, None);
    assert!(payload.features.values().all(f64::is_finite));
}

#[test]
fn payload_into_row_carries_label() {
    let row = build_feature_payload(&[s(0.0, 0.0, 0.0, 0.0)], Some("Z")).into_row();
    assert_eq!(row.label, "Z");
    assert_eq!(row.features.get("p1_t"), Some(0.0));

    let row = build_feature_payload(&[s(0.0, 0.0, 0.0, 0.0)], None).into_row();
    assert_eq!(row.label, "");
}
