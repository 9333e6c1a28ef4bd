//! Notification tone played on bot replies.
//!
//! The tone is synthesized by the host (Web Audio in the widget); there is no
//! asset file. Playback is decorative, so [`play_best_effort`] only logs
//! failures.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

/// Error returned by [`AudioCue::play`].
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// The host exposes no audio synthesis facility.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
    /// Building or starting the oscillator graph failed.
    #[error("audio synthesis failed: {0}")]
    Synthesis(String),
}

/// Parameters of the synthesized sine tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub fade_ms: u32,
    pub peak_gain: f32,
}

impl Default for Tone {
    fn default() -> Self {
        Self { frequency_hz: 800.0, duration_ms: 150, fade_ms: 10, peak_gain: 0.3 }
    }
}

impl Tone {
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.duration_ms) / 1000.0
    }

    /// Fade length in seconds, clamped to half the tone so in and out never overlap.
    pub fn fade_secs(&self) -> f64 {
        f64::from(self.fade_ms.min(self.duration_ms / 2)) / 1000.0
    }
}

/// Host capability that can play a [`Tone`].
pub trait AudioCue: Send + Sync {
    fn play(&self, tone: &Tone) -> Result<(), AudioError>;
}

/// Cue that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&self, _tone: &Tone) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Play `tone`, logging and discarding any failure.
pub fn play_best_effort(cue: &dyn AudioCue, tone: &Tone) {
    if let Err(e) = cue.play(tone) {
        log::warn!("notification sound skipped: {e}");
    }
}
