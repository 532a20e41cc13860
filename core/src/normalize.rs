use crate::models::Sample;

/// Flytter sekvensen slik at første punkt blir origo (x, y, z).
/// Tidsstempler røres ikke. Tom sekvens returneres uendret.
pub fn normalize_to_origin(points: &[Sample]) -> Vec<Sample> {
    let Some(origin) = points.first().copied() else {
        return Vec::new();
    };

    points
        .iter()
        .map(|p| Sample {
            x: p.x - origin.x,
            y: p.y - origin.y,
            z: p.z - origin.z,
            ..*p
        })
        .collect()
}
