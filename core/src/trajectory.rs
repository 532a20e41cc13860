//! Grovt posisjonsestimat (dobbel integrasjon) for visualisering.
//! Ingen presisjonsgaranti – drift er forventet.

use serde::{Deserialize, Serialize};

use crate::models::Sample;

pub const ACCEL_THRESHOLD: f64 = 0.1; // m/s², under dette = i ro
pub const VELOCITY_DAMPING: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Enhetsorientering i grader (deviceorientation: alpha/beta/gamma).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Orientation {
    /// Enhetsakselerasjon → verdensramme, forenklet Rz(alpha)·Rx(beta)·Ry(gamma).
    pub fn to_world(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let (sa, ca) = self.alpha.to_radians().sin_cos();
        let (sb, cb) = self.beta.to_radians().sin_cos();
        let (sg, cg) = self.gamma.to_radians().sin_cos();

        let wx = x * ca * cg - y * ca * sg + z * sa;
        let wy = x * (sa * sb * cg + cb * sg) + y * (-sa * sb * sg + cb * cg) - z * sb * ca;
        let wz = x * (-sa * cb * cg + sb * sg) + y * (sa * cb * sg + sb * cg) + z * cb * ca;
        (wx, wy, wz)
    }
}

/// Posisjoner uten orientering (enhetsramme = verdensramme).
pub fn estimate_positions(samples: &[Sample]) -> Vec<Position> {
    integrate(samples.len(), |i| (samples[i], None))
}

/// Posisjoner med orientering per sample.
pub fn estimate_positions_oriented(samples: &[(Sample, Orientation)]) -> Vec<Position> {
    integrate(samples.len(), |i| (samples[i].0, Some(samples[i].1)))
}

fn integrate(len: usize, at: impl Fn(usize) -> (Sample, Option<Orientation>)) -> Vec<Position> {
    let mut out = Vec::with_capacity(len.max(1));
    out.push(Position::default());

    let mut v = [0.0f64; 3];
    let mut p = Position::default();

    for i in 1..len {
        let (cur, orient) = at(i);
        let (prev, _) = at(i - 1);
        let dt = (cur.ms_elapsed_since_start - prev.ms_elapsed_since_start) / 1000.0;

        let (ax, ay, az) = match orient {
            Some(o) => o.to_world(cur.x, cur.y, cur.z),
            None => (cur.x, cur.y, cur.z),
        };

        if (ax * ax + ay * ay + az * az).sqrt() < ACCEL_THRESHOLD {
            v = [0.0; 3];
        } else {
            v[0] = (v[0] + ax * dt) * VELOCITY_DAMPING;
            v[1] = (v[1] + ay * dt) * VELOCITY_DAMPING;
            v[2] = (v[2] + az * dt) * VELOCITY_DAMPING;
        }

        p.x += v[0] * dt;
        p.y += v[1] * dt;
        p.z += v[2] * dt;
        out.push(p);
    }

    out
}
