use crate::features::aggregate;
use crate::metrics;
use crate::models::{CandidateSample, Sample};
use crate::normalize::normalize_to_origin;
use crate::resample::{resample_to, TargetLen};
use crate::types::{point_keys, Aggregates, FeaturePayload, FeatureVector, AGGREGATE_KEYS};
use crate::validate::validate_samples;

/// Flater ut aggregater + punkter til én ordnet mapping:
/// `duration_ms, total_path_length, avg_step_length, range_x, range_y, range_z, p1_x, p1_y, p1_z, p1_t, p2_x, ...`
pub fn flatten(points: &[Sample], agg: &Aggregates) -> FeatureVector {
    let mut fv = FeatureVector::with_capacity(AGGREGATE_KEYS.len() + 4 * points.len());

    for (key, value) in AGGREGATE_KEYS.iter().zip(agg.values()) {
        fv.push(*key, value);
    }

    for (idx, p) in points.iter().enumerate() {
        let [kx, ky, kz, kt] = point_keys(idx + 1);
        fv.push(kx, p.x);
        fv.push(ky, p.y);
        fv.push(kz, p.z);
        fv.push(kt, p.ms_elapsed_since_start);
    }

    fv
}

/// Hele kjeden: valider → resample → normaliser → aggreger → flat mapping.
pub fn build_features<T: CandidateSample>(raw: &[T], target: TargetLen) -> FeatureVector {
    let valid = validate_samples(raw);
    let resampled = resample_to(&valid, target);
    // før forskyvning: store, endelige koordinater kan flyte over til inf i
    // den normaliserte sekvensen, og inf - inf gir NaN i steglengdene
    let agg = aggregate(&resampled);
    let normalized = normalize_to_origin(&resampled);
    flatten(&normalized, &agg)
}

/// Inngangspunktet for predictor og eksport, med systemets faste N = 20.
pub fn build_feature_payload<T: CandidateSample>(raw: &[T], label: Option<&str>) -> FeaturePayload {
    build_feature_payload_with(raw, label, TargetLen::DEFAULT)
}

pub fn build_feature_payload_with<T: CandidateSample>(
    raw: &[T],
    label: Option<&str>,
    target: TargetLen,
) -> FeaturePayload {
    let features = build_features(raw, target);
    metrics::global().payloads_built_total().inc();

    FeaturePayload {
        label: label.map(str::to_owned),
        features,
    }
}
