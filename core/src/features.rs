use ordered_float::OrderedFloat;

use crate::models::Sample;
use crate::types::Aggregates;

/// max - min over én akse. 0.0 for tom sekvens.
fn axis_range(points: &[Sample], axis: impl Fn(&Sample) -> f64) -> f64 {
    let max = points.iter().map(|p| OrderedFloat(axis(p))).max();
    let min = points.iter().map(|p| OrderedFloat(axis(p))).min();
    match (max, min) {
        (Some(hi), Some(lo)) => hi.0 - lo.0,
        _ => 0.0,
    }
}

#[inline]
fn dist3(a: &Sample, b: &Sample) -> f64 {
    (a.x - b.x).hypot(a.y - b.y).hypot(a.z - b.z)
}

/// Aggregater over en normalisert sekvens.
///
/// Alle verdiene er translasjonsinvariante, så det er likegyldig om sekvensen
/// er flyttet til origo eller ikke.
///
/// `duration_ms` klemmes til >= 0 selv om tidsstemplene ikke er monotone.
/// Tom sekvens (degenerert kall) gir bare nuller.
pub fn aggregate(points: &[Sample]) -> Aggregates {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Aggregates::default();
    };

    let total_path_length: f64 = points.windows(2).map(|w| dist3(&w[0], &w[1])).sum();
    let steps = points.len() - 1;
    let avg_step_length = if steps > 0 { total_path_length / steps as f64 } else { 0.0 };

    Aggregates {
        duration_ms: (last.ms_elapsed_since_start - first.ms_elapsed_since_start).max(0.0),
        total_path_length,
        avg_step_length,
        range_x: axis_range(points, |p| p.x),
        range_y: axis_range(points, |p| p.y),
        range_z: axis_range(points, |p| p.z),
    }
}
