//! Looping tone generation: waveform synthesis into 16-bit PCM buffers,
//! plus the playback lifecycle and display helpers a tone-generator UI
//! builds on top.

pub mod display;
pub mod error;
pub mod gen;
pub mod playback;

// Platform abstraction layer
pub mod platform;

// Offline WAV export
#[cfg(feature = "bounce")]
pub mod bounce;

pub use error::{ToneError, ToneResult};
pub use gen::{synthesize, ToneRequest, Waveform};
pub use playback::{Playback, PlaybackState};
