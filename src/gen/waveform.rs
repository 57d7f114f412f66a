//! Waveform shapes and their closed-form sample functions.

use std::f64::consts::PI;
use std::fmt;

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
    /// Sine frequency-modulated by itself.
    SineOfSine,
}

impl Waveform {
    /// All variants, in the order a selector UI lists them.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::SineOfSine,
    ];

    /// Normalized amplitude in [-1, 1] at sample index `n`.
    ///
    /// `f` is the frequency as a fraction of the sample rate
    /// (`frequency_hz / sample_rate_hz`), so one period spans `1/f` samples.
    pub fn normalized_sample(self, f: f64, n: usize) -> f64 {
        let phase = 2.0 * PI * f * n as f64;
        match self {
            Waveform::Sine => phase.sin(),
            // sign(0) is taken as +1 so the output is exactly two-valued.
            Waveform::Square => {
                if phase.sin() < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
            // asin folds the phase into [-pi/2, pi/2]; 2/pi rescales to [-1, 1].
            Waveform::Triangle => 2.0 * phase.sin().asin() / PI,
            // Fractional-part ramp centered on zero.
            Waveform::Sawtooth => {
                let t = f * n as f64;
                2.0 * (t - (t + 0.5).floor())
            }
            Waveform::SineOfSine => (2.0 * PI * f * phase.sin()).sin(),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Triangle => "Triangle",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::SineOfSine => "Sine of sine",
        };
        f.write_str(name)
    }
}
