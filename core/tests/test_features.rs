use gesture_core::{aggregate, normalize_to_origin, resample, Sample};

fn s(x: f64, y: f64, z: f64, t: f64) -> Sample {
    Sample::new(x, y, z, t)
}

#[test]
fn normalized_first_point_is_origin() {
    let input = vec![s(4.0, -2.0, 9.5, 10.0), s(1.0, 1.0, 1.0, 20.0), s(-7.0, 3.0, 0.0, 35.0)];
    let resampled = resample(&input, 20).unwrap();
    let norm = normalize_to_origin(&resampled);

    assert_eq!(norm.len(), 20);
    assert_eq!((norm[0].x, norm[0].y, norm[0].z), (0.0, 0.0, 0.0));
    // tidsstempler er urørt
    for (a, b) in norm.iter().zip(resampled.iter()) {
        assert_eq!(a.ms_elapsed_since_start, b.ms_elapsed_since_start);
    }
}

#[test]
fn normalize_empty_is_empty() {
    assert!(normalize_to_origin(&[]).is_empty());
}

#[test]
fn identical_points_have_zero_path_and_range() {
    let pts = vec![s(2.0, 3.0, 4.0, 7.0); 20];
    let agg = aggregate(&normalize_to_origin(&pts));
    assert_eq!(agg.total_path_length, 0.0);
    assert_eq!(agg.avg_step_length, 0.0);
    assert_eq!((agg.range_x, agg.range_y, agg.range_z), (0.0, 0.0, 0.0));
    assert_eq!(agg.duration_ms, 0.0);
}

#[test]
fn duration_is_clamped_when_timestamps_decrease() {
    let pts = vec![s(0.0, 0.0, 0.0, 500.0), s(1.0, 0.0, 0.0, 200.0), s(2.0, 0.0, 0.0, 100.0)];
    let agg = aggregate(&pts);
    assert_eq!(agg.duration_ms, 0.0);
}

#[test]
fn single_point_has_zero_step_length() {
    let agg = aggregate(&[s(0.0, 0.0, 0.0, 9.0)]);
    assert_eq!(agg.total_path_length, 0.0);
    assert_eq!(agg.avg_step_length, 0.0);
}

#[test]
fn end_to_end_three_point_example() {
    let input = vec![s(1.0, 0.0, 0.0, 0.0), s(3.0, 0.0, 0.0, 100.0)];
    let norm = normalize_to_origin(&resample(&input, 3).unwrap());

    let xs: Vec<f64> = norm.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);

    let agg = aggregate(&norm);
    assert_eq!(agg.range_x, 2.0);
    assert_eq!(agg.total_path_length, 2.0);
    assert_eq!(agg.avg_step_length, 1.0);
    assert_eq!(agg.duration_ms, 100.0);
    assert_eq!((agg.range_y, agg.range_z), (0.0, 0.0));
}

#[test]
fn path_length_is_euclidean_in_3d() {
    let pts = vec![s(0.0, 0.0, 0.0, 0.0), s(1.0, 2.0, 2.0, 10.0), s(1.0, 2.0, 2.0, 20.0)];
    let agg = aggregate(&pts);
    assert!((agg.total_path_length - 3.0).abs() < 1e-12);
    assert!((agg.avg_step_length - 1.5).abs() < 1e-12);
    assert_eq!(agg.duration_ms, 20.0);
}
