pub mod synth;
pub mod waveform;

pub use self::synth::*;
pub use self::waveform::*;
