//! Offline bounce of a synthesized buffer to a 16-bit mono WAV file.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

pub fn write_wav(
    path: impl AsRef<Path>,
    samples: &[i16],
    sample_rate_hz: u32,
) -> Result<(), anyhow::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
