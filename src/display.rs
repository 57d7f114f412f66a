//! Label formatting for the UI layer, plus a count-up chronometer.

use std::time::{Duration, Instant};

/// Frequency label, e.g. `1000` -> `"1000 Hz"`.
pub fn format_frequency(hz: u32) -> String {
    format!("{hz} Hz")
}

/// Elapsed-time label, e.g. `1234` ms -> `"01.234"`.
///
/// Seconds are zero-padded to two digits but not wrapped, so the label keeps
/// growing past 99 seconds.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let s = elapsed_ms / 1000;
    let ms = elapsed_ms % 1000;
    format!("{s:02}.{ms:03}")
}

/// A count-up timer over the monotonic clock.
///
/// `start` rebases to now; `display` renders the time since the base in the
/// `"SS.mmm"` form above. Independent of synthesis and playback.
#[derive(Debug, Clone, Copy)]
pub struct Chronometer {
    base: Instant,
}

impl Chronometer {
    /// A chronometer based at the moment of creation.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
        }
    }

    /// Rebases the chronometer to now.
    pub fn start(&mut self) {
        self.base = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.base.elapsed()
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed().as_millis() as u64)
    }
}

impl Default for Chronometer {
    fn default() -> Self {
        Self::new()
    }
}
