use crate::error::PipelineError;
use crate::models::Sample;
use crate::types::TARGET_POINTS;

/// Mållengde for interpolering. Alltid >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLen(usize);

impl TargetLen {
    pub const DEFAULT: TargetLen = TargetLen(TARGET_POINTS);

    pub fn new(n: usize) -> Result<Self, PipelineError> {
        if n < 2 {
            return Err(PipelineError::InvalidArgument(format!(
                "target length must be >= 2 for interpolation, got {n}"
            )));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TargetLen {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Vektet form: gir `a` eksakt for t = 0 og `b` for t = 1, også når `b - a` ville flyte over.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Resampler til nøyaktig `n` punkter.
///
/// - tom input → `n` nullpunkter
/// - ett punkt → `n` kopier
/// - ellers lineær interpolasjon over indeksposisjon; `n < 2` gir `InvalidArgument`
pub fn resample(points: &[Sample], n: usize) -> Result<Vec<Sample>, PipelineError> {
    match points {
        [] => Ok(vec![Sample::default(); n]),
        [only] => Ok(vec![*only; n]),
        _ => Ok(interpolate(points, TargetLen::new(n)?)),
    }
}

/// Samme som `resample`, men mållengden er allerede validert.
pub fn resample_to(points: &[Sample], target: TargetLen) -> Vec<Sample> {
    match points {
        [] => vec![Sample::default(); target.get()],
        [only] => vec![*only; target.get()],
        _ => interpolate(points, target),
    }
}

fn interpolate(points: &[Sample], target: TargetLen) -> Vec<Sample> {
    let n = target.get();
    let last = points.len() - 1;

    (0..n)
        .map(|i| {
            // i = 0 → første punkt, i = n-1 → siste punkt (eksakt)
            let pos = (i * last) as f64 / (n - 1) as f64;
            let left = (pos.floor() as usize).min(last);
            let right = (left + 1).min(last);
            let t = pos - left as f64;
            let (a, b) = (&points[left], &points[right]);

            Sample {
                x: lerp(a.x, b.x, t),
                y: lerp(a.y, b.y, t),
                z: lerp(a.z, b.z, t),
                ms_elapsed_since_start: lerp(a.ms_elapsed_since_start, b.ms_elapsed_since_start, t)
                    .round(),
            }
        })
        .collect()
}
