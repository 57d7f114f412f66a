//! Playback lifecycle, kept apart from synthesis.
//!
//! `Playback` is the little state machine the UI layer owns: play, pause,
//! stop, a volume fader and a listener that fires whenever the is-playing
//! bit flips. It never touches sample data; callers re-synthesize on a
//! waveform or frequency change and hand the new buffer to the output layer.

/// Lifecycle states of a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

/// Callback invoked with `true` when playback starts and `false` when it
/// pauses or stops.
pub type PlaybackChangedListener = Box<dyn FnMut(bool) + Send>;

pub struct Playback {
    state: PlaybackState,
    volume: f64,
    listener: Option<PlaybackChangedListener>,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            volume: 1.0,
            listener: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn set_listener(&mut self, listener: PlaybackChangedListener) {
        self.listener = Some(listener);
    }

    /// Starts (or resumes) playback. No-op when already playing.
    pub fn play(&mut self) {
        if self.state != PlaybackState::Playing {
            self.state = PlaybackState::Playing;
            self.notify(true);
        }
    }

    /// Pauses a playing tone. No-op from Idle or Paused.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            self.notify(false);
        }
    }

    /// Stops playback entirely. No-op when already idle. Stopping a paused
    /// tone goes straight to Idle without a second notification.
    pub fn stop(&mut self) {
        let was_playing = self.state == PlaybackState::Playing;
        if self.state != PlaybackState::Idle {
            self.state = PlaybackState::Idle;
            if was_playing {
                self.notify(false);
            }
        }
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    fn notify(&mut self, is_playing: bool) {
        if let Some(listener) = self.listener.as_mut() {
            listener(is_playing);
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn starts_idle_at_full_volume() {
        let pb = Playback::new();
        assert_eq!(pb.state(), PlaybackState::Idle);
        assert_eq!(pb.volume(), 1.0);
    }

    #[test]
    fn play_pause_stop_transitions() {
        let mut pb = Playback::new();
        pb.play();
        assert_eq!(pb.state(), PlaybackState::Playing);
        pb.pause();
        assert_eq!(pb.state(), PlaybackState::Paused);
        pb.play();
        assert_eq!(pb.state(), PlaybackState::Playing);
        pb.stop();
        assert_eq!(pb.state(), PlaybackState::Idle);
    }

    #[test]
    fn pause_from_idle_is_a_no_op() {
        let mut pb = Playback::new();
        pb.pause();
        assert_eq!(pb.state(), PlaybackState::Idle);
    }

    #[test]
    fn listener_fires_only_on_real_changes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_listener = calls.clone();

        let mut pb = Playback::new();
        pb.set_listener(Box::new(move |_| {
            calls_in_listener.fetch_add(1, Ordering::SeqCst);
        }));

        pb.play();
        pb.play(); // redundant
        pb.pause();
        pb.pause(); // redundant
        pb.stop(); // paused -> idle, is-playing bit unchanged
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn volume_is_clamped() {
        let mut pb = Playback::new();
        pb.set_volume(1.7);
        assert_eq!(pb.volume(), 1.0);
        pb.set_volume(-0.3);
        assert_eq!(pb.volume(), 0.0);
        pb.set_volume(0.25);
        assert_eq!(pb.volume(), 0.25);
    }
}
