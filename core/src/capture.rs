use std::time::Instant;

use crate::config::Config;
use crate::models::{RawCapture, Sample};
use crate::trajectory::{estimate_positions_oriented, Orientation, Position};

/// Opptaksbuffer for én gest.
///
/// Nullstilles ved `start`, fylles med `push`, og leveres videre by value ved `stop`.
/// Enhetens event-kilde eier ikke bufferet – den kaller bare inn hit.
#[derive(Debug)]
pub struct CaptureSession {
    label: String,
    started: Option<Instant>,
    buffer: Vec<Sample>,
    // siste kjente orientering; hvert sample får en kopi ved push
    orientation: Orientation,
    orientations: Vec<Orientation>,
    deadzone: f64,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            started: None,
            buffer: Vec::new(),
            orientation: Orientation::default(),
            orientations: Vec::new(),
            deadzone: 0.0,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new().with_deadzone(cfg.deadzone)
    }

    /// Akselerasjoner med |a| < `deadzone` settes til 0 per akse (0.0 = av).
    pub fn with_deadzone(mut self, deadzone: f64) -> Self {
        self.deadzone = if deadzone.is_finite() { deadzone.max(0.0) } else { 0.0 };
        self
    }

    pub fn start(&mut self, label: impl Into<String>) {
        if self.started.is_some() {
            log::debug!("capture: restart discards {} buffered samples", self.buffer.len());
        }
        self.label = label.into();
        self.buffer.clear();
        self.orientations.clear();
        self.started = Some(Instant::now());
    }

    pub fn is_recording(&self) -> bool {
        self.started.is_some()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oppdaterer orienteringen (grader). Manglende/ikke-endelige vinkler blir 0.
    pub fn set_orientation(&mut self, alpha: f64, beta: f64, gamma: f64) {
        let finite_or_zero = |a: f64| if a.is_finite() { a } else { 0.0 };
        self.orientation = Orientation {
            alpha: finite_or_zero(alpha),
            beta: finite_or_zero(beta),
            gamma: finite_or_zero(gamma),
        };
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Posisjonsestimat for bufferet så langt, rotert til verdensramme.
    pub fn trajectory(&self) -> Vec<Position> {
        let oriented: Vec<(Sample, Orientation)> =
            self.buffer.iter().copied().zip(self.orientations.iter().copied()).collect();
        estimate_positions_oriented(&oriented)
    }

    /// Tidsstempler med ms siden `start`.
    pub fn push(&mut self, x: f64, y: f64, z: f64) -> bool {
        let Some(started) = self.started else {
            log::debug!("capture: sample ignored, not recording");
            return false;
        };
        let ms = started.elapsed().as_millis() as f64;
        self.push_at(x, y, z, ms)
    }

    /// For eksternt tidsstemplede events (ms siden opptaksstart).
    pub fn push_at(&mut self, x: f64, y: f64, z: f64, ms_elapsed_since_start: f64) -> bool {
        if self.started.is_none() {
            log::debug!("capture: sample ignored, not recording");
            return false;
        }
        let sample = Sample::new(
            self.apply_deadzone(x),
            self.apply_deadzone(y),
            self.apply_deadzone(z),
            ms_elapsed_since_start,
        );
        if !sample.is_finite() {
            return false;
        }
        self.buffer.push(sample);
        self.orientations.push(self.orientation);
        true
    }

    fn apply_deadzone(&self, a: f64) -> f64 {
        if a.abs() < self.deadzone {
            0.0
        } else {
            a
        }
    }

    /// Forsegler opptaket. `None` hvis det ikke pågikk noe opptak.
    pub fn stop(&mut self) -> Option<RawCapture> {
        self.started.take()?;
        let samples = std::mem::take(&mut self.buffer);
        self.orientations.clear();
        let label = std::mem::take(&mut self.label);
        log::info!("capture: sealed '{}' with {} samples", label, samples.len());
        Some(RawCapture::new(label, samples))
    }
}
