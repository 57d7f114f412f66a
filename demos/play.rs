/* Tone Lab - Interactive CLI tone generator.
Pick a waveform, sweep the frequency, adjust volume, watch the elapsed
playback clock. */

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

use tonegen::display::{format_frequency, Chronometer};
use tonegen::platform::{AudioOutput, CpalOutput, LoopHandle};
use tonegen::{synthesize, Playback, PlaybackState, ToneRequest, Waveform};

const FREQ_MIN: f64 = 20.0;
const FREQ_MAX: f64 = 20000.0;

fn render_display(
    waveform: Waveform,
    frequency_hz: f64,
    volume: f64,
    state: PlaybackState,
    chrono: &Chronometer,
) {
    // Clear screen, move cursor to home
    print!("\x1b[2J\x1b[H");

    print!("=== Tone Lab ===\r\n");
    print!("1-5=waveform ↑↓=freq ±10 PgUp/PgDn=freq ±100 +/-=volume\r\n");
    print!("SPACE=play/pause S=stop Q=quit\r\n");
    print!("\r\n");

    for (i, wf) in Waveform::ALL.iter().enumerate() {
        let indicator = if *wf == waveform { ">" } else { " " };
        print!("{} {}. {}\r\n", indicator, i + 1, wf);
    }

    print!("\r\n");
    print!("Frequency: {}\r\n", format_frequency(frequency_hz as u32));
    print!("Volume:    {:.0}%\r\n", volume * 100.0);

    let elapsed = match state {
        PlaybackState::Idle => "00.000".to_string(),
        _ => chrono.display(),
    };
    print!("State:     {:?}  {}\r\n", state, elapsed);

    io::stdout().flush().unwrap();
}

fn main() -> anyhow::Result<()> {
    let mut output = CpalOutput::new();
    output.initialize()?;
    // Synthesize at the device rate so playback pitch is exact.
    let sample_rate = output.sample_rate();
    println!("Output sample rate: {} Hz", sample_rate);

    let handle = LoopHandle::new();
    output.create_stream(&handle)?;

    let mut waveform = Waveform::Sine;
    let mut frequency_hz: f64 = 440.0;
    let mut volume: f64 = 1.0;

    let mut chrono = Chronometer::new();
    let mut playback = Playback::new();

    let buffer = synthesize(&ToneRequest::new(waveform, frequency_hz, sample_rate))?;
    handle.set_buffer(buffer);

    execute!(io::stdout(), Clear(ClearType::All), cursor::Hide)?;
    enable_raw_mode()?;

    let result = loop {
        render_display(waveform, frequency_hz, volume, playback.state(), &chrono);

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(KeyEvent { code, .. }) = event::read()? else {
            continue;
        };

        let mut retune = false;
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
            KeyCode::Char(c @ '1'..='5') => {
                let picked = Waveform::ALL[c as usize - '1' as usize];
                if picked != waveform {
                    waveform = picked;
                    retune = true;
                }
            }
            KeyCode::Up => {
                frequency_hz = (frequency_hz + 10.0).min(FREQ_MAX);
                retune = true;
            }
            KeyCode::Down => {
                frequency_hz = (frequency_hz - 10.0).max(FREQ_MIN);
                retune = true;
            }
            KeyCode::PageUp => {
                frequency_hz = (frequency_hz + 100.0).min(FREQ_MAX);
                retune = true;
            }
            KeyCode::PageDown => {
                frequency_hz = (frequency_hz - 100.0).max(FREQ_MIN);
                retune = true;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                volume = (volume + 0.05).min(1.0);
                playback.set_volume(volume);
                handle.set_volume(volume as f32);
            }
            KeyCode::Char('-') => {
                volume = (volume - 0.05).max(0.0);
                playback.set_volume(volume);
                handle.set_volume(volume as f32);
            }
            KeyCode::Char(' ') => {
                if playback.is_playing() {
                    playback.pause();
                    output.stop()?;
                } else {
                    if playback.state() == PlaybackState::Idle {
                        chrono.start();
                    }
                    playback.play();
                    output.start()?;
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if playback.state() != PlaybackState::Idle {
                    playback.stop();
                    output.stop()?;
                    handle.rewind();
                }
            }
            _ => {}
        }

        if retune {
            let buffer = synthesize(&ToneRequest::new(waveform, frequency_hz, sample_rate))?;
            handle.set_buffer(buffer);
        }
    };

    disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show)?;
    println!();

    result
}
