//! Web Audio notification tone.
//!
//! Synthesizes a short sine beep with a linear fade in and out. One
//! `AudioContext` is reused, since browsers cap how many a page may open.
//! Autoplay policy starts a context suspended unless it is created or resumed
//! inside a user gesture, so click/keydown handlers call [`prime`] before the
//! delayed reply plays the tone.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use saanvi::audio::{AudioCue, AudioError, Tone};

#[cfg(feature = "csr")]
thread_local! {
    static AUDIO_CONTEXT: std::cell::RefCell<Option<web_sys::AudioContext>> = const { std::cell::RefCell::new(None) };
}

/// [`AudioCue`] backed by the browser's Web Audio API.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioCue;

impl AudioCue for WebAudioCue {
    fn play(&self, tone: &Tone) -> Result<(), AudioError> {
        #[cfg(feature = "csr")]
        {
            play_tone(tone)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = tone;
            Err(AudioError::Unavailable("no browser audio".to_owned()))
        }
    }
}

/// Create (or resume) the shared audio context. Call from a user gesture.
pub fn prime() {
    #[cfg(feature = "csr")]
    {
        match audio_context() {
            Ok(ctx) => {
                let _ = ctx.resume();
            }
            Err(e) => log::warn!("notification sound unavailable: {e}"),
        }
    }
}

#[cfg(feature = "csr")]
fn audio_context() -> Result<web_sys::AudioContext, AudioError> {
    AUDIO_CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            return Ok(ctx.clone());
        }
        let ctx = web_sys::AudioContext::new().map_err(|e| AudioError::Unavailable(format!("{e:?}")))?;
        *slot = Some(ctx.clone());
        Ok(ctx)
    })
}

#[cfg(feature = "csr")]
fn play_tone(tone: &Tone) -> Result<(), AudioError> {
    let js_err = |e: wasm_bindgen::JsValue| AudioError::Synthesis(format!("{e:?}"));

    let ctx = audio_context()?;
    if ctx.state() == web_sys::AudioContextState::Suspended {
        let _ = ctx.resume();
    }
    let oscillator = ctx.create_oscillator().map_err(js_err)?;
    let gain = ctx.create_gain().map_err(js_err)?;

    oscillator.set_type(web_sys::OscillatorType::Sine);
    oscillator.frequency().set_value(tone.frequency_hz);
    oscillator.connect_with_audio_node(&gain).map_err(js_err)?;
    gain.connect_with_audio_node(&ctx.destination()).map_err(js_err)?;

    let start = ctx.current_time();
    let end = start + tone.duration_secs();
    let fade = tone.fade_secs();
    let level = gain.gain();
    level.set_value_at_time(0.0, start).map_err(js_err)?;
    level.linear_ramp_to_value_at_time(tone.peak_gain, start + fade).map_err(js_err)?;
    level.linear_ramp_to_value_at_time(tone.peak_gain, end - fade).map_err(js_err)?;
    level.linear_ramp_to_value_at_time(0.0, end).map_err(js_err)?;

    oscillator.start().map_err(js_err)?;
    oscillator.stop_with_when(end).map_err(js_err)?;
    Ok(())
}
