use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, Sample, SizedSample, Stream, StreamConfig,
};

use super::{AudioOutput, LoopHandle, LoopState};
use std::sync::{Arc, Mutex};

/// CPAL-backed looped playback of a static sample buffer.
///
/// The analogue of a static-mode platform audio track with loop points at
/// the buffer edges: the buffer in the shared [`LoopState`] repeats until
/// the stream is stopped or the buffer is swapped.
pub struct CpalOutput {
    stream: Option<Stream>,
    device: Option<Device>,
    config: Option<StreamConfig>,
    sample_rate: u32,
    is_active: bool,
}

impl CpalOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            device: None,
            config: None,
            sample_rate: 44100,
            is_active: false,
        }
    }

    /// Create a stream that plays the handle's looped buffer
    pub fn create_stream(&mut self, handle: &LoopHandle) -> Result<(), anyhow::Error> {
        let device = self
            .device
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Device not initialized"))?;
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Config not initialized"))?;

        let supported_config = device.default_output_config()?;
        let state = handle.state();
        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(device, config, state)?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(device, config, state)?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(device, config, state)?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(device, config, state)?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(device, config, state)?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(device, config, state)?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(device, config, state)?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(device, config, state)?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(device, config, state)?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(device, config, state)?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format '{}'",
                    sample_format
                ))
            }
        };

        self.stream = Some(stream);
        Ok(())
    }

    /// Setup the CPAL host and device
    fn setup_host_device(&mut self) -> Result<(), anyhow::Error> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;

        let config = device.default_output_config()?;

        self.sample_rate = config.sample_rate().0;
        self.device = Some(device);
        self.config = Some(config.into());

        Ok(())
    }

    /// Create a typed stream for the given sample format
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        state: Arc<Mutex<LoopState>>,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let num_channels = config.channels as usize;
        let err_fn = |err| eprintln!("Error building output sound stream: {}", err);

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                Self::process_frame(output, &state, num_channels);
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }

    /// Fill one callback buffer from the loop state
    fn process_frame<SampleType>(
        output: &mut [SampleType],
        state: &Arc<Mutex<LoopState>>,
        num_channels: usize,
    ) where
        SampleType: Sample + FromSample<f32>,
    {
        // Lock once for the entire buffer
        let mut state_guard = state.lock().unwrap();

        for frame in output.chunks_mut(num_channels) {
            let value: SampleType = SampleType::from_sample(state_guard.next_value());

            // Mono source: copy the same value to all channels
            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }
}

impl Default for CpalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalOutput {
    fn initialize(&mut self) -> Result<(), anyhow::Error> {
        self.setup_host_device()?;
        Ok(())
    }

    fn start(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.play()?;
            self.is_active = true;
        } else {
            return Err(anyhow::anyhow!(
                "Stream not created. Call create_stream first."
            ));
        }

        Ok(())
    }

    fn stop(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
            self.is_active = false;
        }

        Ok(())
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
