/// Platform abstraction for audio output
/// This module provides a unified interface for looped tone playback across
/// platform backends (native CPAL today).

use std::sync::{Arc, Mutex};

/// Trait for platform-specific audio output implementations
pub trait AudioOutput {
    /// Open the output device and discover its stream configuration
    fn initialize(&mut self) -> Result<(), anyhow::Error>;

    /// Start the audio stream
    fn start(&mut self) -> Result<(), anyhow::Error>;

    /// Stop the audio stream
    fn stop(&mut self) -> Result<(), anyhow::Error>;

    /// Sample rate of the opened output stream, in Hz
    fn sample_rate(&self) -> u32;

    /// Check if the audio output is active
    fn is_active(&self) -> bool;
}

/// Shared loop state between the control thread and the audio callback.
///
/// The buffer plays front to back and wraps; the wrap index is the loop
/// point. An empty buffer renders silence.
pub struct LoopState {
    pub samples: Vec<i16>,
    pub position: usize,
    pub volume: f32,
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            position: 0,
            volume: 1.0,
        }
    }

    /// Replace the looped buffer and rewind to its start.
    pub fn set_samples(&mut self, samples: Vec<i16>) {
        self.samples = samples;
        self.position = 0;
    }

    /// Next mono value as f32 in [-1, 1], volume applied.
    pub fn next_value(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let raw = self.samples[self.position];
        self.position = (self.position + 1) % self.samples.len();
        (raw as f32 / i16::MAX as f32) * self.volume
    }
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle the control thread uses to talk to a running output stream.
#[derive(Clone)]
pub struct LoopHandle {
    state: Arc<Mutex<LoopState>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LoopState::new())),
        }
    }

    pub(crate) fn state(&self) -> Arc<Mutex<LoopState>> {
        self.state.clone()
    }

    /// Swap in a freshly synthesized buffer (waveform or frequency change).
    pub fn set_buffer(&self, samples: Vec<i16>) {
        self.state.lock().unwrap().set_samples(samples);
    }

    /// Seek back to the loop start (used on stop, so the next play begins
    /// at the front of the buffer).
    pub fn rewind(&self) {
        self.state.lock().unwrap().position = 0;
    }

    pub fn set_volume(&self, volume: f32) {
        self.state.lock().unwrap().volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.state.lock().unwrap().volume
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

#[cfg(feature = "native")]
pub use self::cpal_output::CpalOutput;
