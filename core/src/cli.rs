use crate::features::aggregate;
use crate::models::RawCapture;
use crate::resample::{resample_to, TargetLen};
use crate::trajectory::estimate_positions;
use crate::types::Aggregates;
use crate::validate::validate_samples;

/// Aggregater for ett opptak, samme kjede som payload-byggeren.
pub fn capture_aggregates(capture: &RawCapture, target: TargetLen) -> (usize, Aggregates) {
    let valid = validate_samples(&capture.readings);
    (valid.len(), aggregate(&resample_to(&valid, target)))
}

pub fn print_capture_report(capture: &RawCapture, target: TargetLen) {
    let (valid, agg) = capture_aggregates(capture, target);
    let label = if capture.is_labeled() { capture.label.as_str() } else { "<unlabeled>" };

    println!("--- Capture Report ---");
    println!("Label: {}", label);
    println!("Samples: {} ({} valid)", capture.readings.len(), valid);
    println!("Duration: {:.0} ms", agg.duration_ms);
    println!("Path length: {:.3} (avg step {:.3})", agg.total_path_length, agg.avg_step_length);
    println!("Range x/y/z: {:.3} / {:.3} / {:.3}", agg.range_x, agg.range_y, agg.range_z);

    let positions = estimate_positions(&validate_samples(&capture.readings));
    if let Some(end) = positions.last() {
        println!("Est. end position (m): ({:.3}, {:.3}, {:.3})", end.x, end.y, end.z);
    }
}
