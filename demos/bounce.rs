/* Bounce each waveform to a WAV file for offline listening. */

use tonegen::bounce::write_wav;
use tonegen::{synthesize, ToneRequest, Waveform};

fn main() -> anyhow::Result<()> {
    let sample_rate = 44100;
    let frequency_hz = 440.0;

    for waveform in Waveform::ALL {
        // Period-aligned so the files loop cleanly in an editor.
        let req = ToneRequest::period_aligned(waveform, frequency_hz, sample_rate, sample_rate as usize)?;
        let samples = synthesize(&req)?;

        let name = waveform
            .to_string()
            .to_lowercase()
            .replace(' ', "_");
        let path = format!("{name}_{}hz.wav", frequency_hz as u32);
        write_wav(&path, &samples, sample_rate)?;
        println!("Wrote {} ({} samples)", path, samples.len());
    }

    Ok(())
}
