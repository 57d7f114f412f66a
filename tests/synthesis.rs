// Integration tests for the tone synthesis core

use tonegen::gen::PEAK_AMPLITUDE;
use tonegen::{synthesize, ToneError, ToneRequest, Waveform};

#[test]
fn test_all_waveforms_stay_in_symmetric_range() {
    for wf in Waveform::ALL {
        let req = ToneRequest::new(wf, 997.0, 44100);
        let samples = synthesize(&req).unwrap();
        assert_eq!(samples.len(), 44100);
        for (n, &s) in samples.iter().enumerate() {
            assert!(
                (-32767..=32767).contains(&(s as i32)),
                "{wf} sample {n} out of range: {s}"
            );
        }
    }
}

#[test]
fn test_sine_exact_periodicity() {
    // 11025 Hz at 44100 Hz: the period is exactly 4 samples.
    let req = ToneRequest::new(Waveform::Sine, 11025.0, 44100);
    let samples = synthesize(&req).unwrap();
    let k = 4;
    for n in 0..samples.len() - k {
        assert_eq!(
            samples[n],
            samples[n + k],
            "sine not periodic at n={n}: {} vs {}",
            samples[n],
            samples[n + k]
        );
    }
}

#[test]
fn test_square_takes_only_peak_values() {
    let req = ToneRequest::new(Waveform::Square, 440.0, 44100);
    let samples = synthesize(&req).unwrap();
    for (n, &s) in samples.iter().enumerate() {
        assert!(
            s == 32767 || s == -32767,
            "square sample {n} is not a peak value: {s}"
        );
    }
}

#[test]
fn test_sawtooth_is_a_linear_ramp() {
    // Rises monotonically except for one full-range drop per period.
    let req = ToneRequest::new(Waveform::Sawtooth, 100.0, 44100);
    let samples = synthesize(&req).unwrap();

    let mut drops = 0;
    for n in 0..samples.len() - 1 {
        let step = samples[n + 1] as i32 - samples[n] as i32;
        if step < 0 {
            let full_range = 2.0 * PEAK_AMPLITUDE;
            assert!(
                (-step as f64) > full_range * 0.99,
                "sawtooth fell by {} at n={n}, expected a full-range drop",
                -step
            );
            drops += 1;
        }
    }
    // One wrap per 441-sample period over one second.
    assert_eq!(drops, 100);
}

#[test]
fn test_synthesis_is_deterministic() {
    let req = ToneRequest::new(Waveform::Triangle, 523.25, 44100);
    let a = synthesize(&req).unwrap();
    let b = synthesize(&req).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sine_100hz_reference_points() {
    let req = ToneRequest {
        waveform: Waveform::Sine,
        frequency_hz: 100.0,
        sample_rate_hz: 44100,
        sample_count: 441,
    };
    let samples = synthesize(&req).unwrap();

    assert_eq!(samples[0], 0);
    // Quarter period is 110.25 samples; the nearest samples sit within a
    // fraction of a degree of the crest.
    let crest = samples[110].max(samples[111]);
    assert!(crest >= 32760, "expected a near-peak crest, got {crest}");
}

#[test]
fn test_invalid_requests_are_rejected() {
    let req = ToneRequest::new(Waveform::Sine, 0.0, 44100);
    assert_eq!(
        synthesize(&req),
        Err(ToneError::InvalidFrequency { freq: 0.0 })
    );

    let req = ToneRequest::new(Waveform::Sine, f64::NAN, 44100);
    assert!(matches!(
        synthesize(&req),
        Err(ToneError::InvalidFrequency { .. })
    ));

    let req = ToneRequest::new(Waveform::Sine, 440.0, 0);
    assert_eq!(
        synthesize(&req),
        Err(ToneError::InvalidSampleRate { rate: 0 })
    );
}

#[test]
fn test_period_aligned_loops_seamlessly() {
    // 100 whole periods: the sample after the wrap equals the first sample.
    let req = ToneRequest::period_aligned(Waveform::Sawtooth, 100.0, 44100, 44100).unwrap();
    assert_eq!(req.sample_count, 44100);
    let samples = synthesize(&req).unwrap();

    // The loop point continues the ramp instead of clipping it mid-flight:
    // the last sample of the buffer is one step below the first.
    let step_up = samples[1] as i32 - samples[0] as i32;
    let wrap_step = samples[0] as i32 - *samples.last().unwrap() as i32;
    assert!(
        (wrap_step - step_up).abs() <= 1,
        "wrap step {wrap_step} should match the in-period step {step_up}"
    );
}
