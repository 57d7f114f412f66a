//! Tone synthesis: one request in, one 16-bit PCM buffer out.

use crate::error::{ToneError, ToneResult};
use crate::gen::waveform::Waveform;

/// Peak amplitude. Symmetric on purpose: using `i16::MIN` would make the
/// negative half-wave one LSB louder than the positive one.
pub const PEAK_AMPLITUDE: f64 = i16::MAX as f64;

/// An immutable description of one tone buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    pub waveform: Waveform,
    pub frequency_hz: f64,
    pub sample_rate_hz: u32,
    pub sample_count: usize,
}

impl ToneRequest {
    /// A one-second buffer (`sample_count == sample_rate_hz`), regardless of
    /// the waveform period.
    ///
    /// Unless the frequency divides the sample rate, the buffer holds a
    /// fractional number of periods and looping it clicks at the wrap point.
    /// Use [`ToneRequest::period_aligned`] when that matters.
    pub fn new(waveform: Waveform, frequency_hz: f64, sample_rate_hz: u32) -> Self {
        Self {
            waveform,
            frequency_hz,
            sample_rate_hz,
            sample_count: sample_rate_hz as usize,
        }
    }

    /// Sizes the buffer to the largest whole number of periods that fits in
    /// `max_count` samples, with a floor of one period (a single period
    /// longer than `max_count` is kept whole rather than truncated).
    ///
    /// The wrap point then lands on a period boundary and the loop is
    /// (near-)seamless, at the cost of a buffer slightly shorter than asked.
    pub fn period_aligned(
        waveform: Waveform,
        frequency_hz: f64,
        sample_rate_hz: u32,
        max_count: usize,
    ) -> ToneResult<Self> {
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return Err(ToneError::InvalidFrequency { freq: frequency_hz });
        }
        if sample_rate_hz == 0 {
            return Err(ToneError::InvalidSampleRate { rate: sample_rate_hz });
        }
        let period = sample_rate_hz as f64 / frequency_hz;
        let periods = ((max_count as f64 / period).floor()).max(1.0);
        let sample_count = (periods * period).round() as usize;
        Ok(Self {
            waveform,
            frequency_hz,
            sample_rate_hz,
            sample_count,
        })
    }

    fn validate(&self) -> ToneResult<()> {
        if !(self.frequency_hz.is_finite() && self.frequency_hz > 0.0) {
            return Err(ToneError::InvalidFrequency {
                freq: self.frequency_hz,
            });
        }
        if self.sample_rate_hz == 0 {
            return Err(ToneError::InvalidSampleRate {
                rate: self.sample_rate_hz,
            });
        }
        if self.sample_count == 0 {
            return Err(ToneError::EmptyBuffer);
        }
        Ok(())
    }
}

/// Renders the request into a fresh buffer of signed 16-bit mono samples.
///
/// Pure: the same request always yields a bit-identical buffer, and every
/// sample lies in `[-32767, 32767]`.
pub fn synthesize(request: &ToneRequest) -> ToneResult<Vec<i16>> {
    request.validate()?;

    let f = request.frequency_hz / request.sample_rate_hz as f64;
    let mut samples = Vec::with_capacity(request.sample_count);
    for n in 0..request.sample_count {
        let v = request.waveform.normalized_sample(f, n);
        let scaled = (v * PEAK_AMPLITUDE).round();
        samples.push(scaled.clamp(-PEAK_AMPLITUDE, PEAK_AMPLITUDE) as i16);
    }
    Ok(samples)
}
