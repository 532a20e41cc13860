use crate::models::{CandidateSample, Sample};

/// Beholder kun samples der x, y, z og tidsstempel er endelige tall.
/// Rekkefølgen bevares; ingen reparasjon, ingen dedup. Tomt resultat er ok.
pub fn validate_samples<T: CandidateSample>(candidates: &[T]) -> Vec<Sample> {
    let valid: Vec<Sample> = candidates.iter().filter_map(CandidateSample::candidate).collect();

    let dropped = candidates.len() - valid.len();
    if dropped > 0 {
        log::debug!(
            "validator: dropped {} of {} samples (missing/non-finite fields)",
            dropped,
            candidates.len()
        );
    }
    valid
}
