use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

// A6 note, short decay.
const TICK_FREQUENCY_HZ: f32 = 880.0;
const TICK_GAIN: f32 = 0.3;
const TICK_DECAY_S: f64 = 0.05;

/// Fire-and-forget tick tone for the spinning wheel.
///
/// The underlying `AudioContext` is created on the first tick and reused for
/// the rest of the page lifetime. The player is an ordinary owned value held
/// by whichever component emits sound; it carries no global state.
#[derive(Default)]
pub struct TickPlayer {
    context: Option<AudioContext>,
}

impl TickPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays one tick. Audio being unavailable (e.g. blocked by browser
    /// autoplay policy) is logged and otherwise ignored; the spin visuals
    /// must never depend on sound.
    pub fn play(&mut self) {
        if let Err(err) = self.play_tone() {
            log::warn!("could not play tick sound: {:?}", err);
        }
    }

    fn play_tone(&mut self) -> Result<(), JsValue> {
        if self.context.is_none() {
            self.context = Some(AudioContext::new()?);
        }
        let Some(context) = self.context.as_ref() else {
            return Ok(());
        };

        let oscillator = context.create_oscillator()?;
        let gain = context.create_gain()?;
        let now = context.current_time();

        oscillator.set_type(OscillatorType::Sine);
        oscillator.frequency().set_value_at_time(TICK_FREQUENCY_HZ, now)?;
        gain.gain().set_value_at_time(TICK_GAIN, now)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;

        oscillator.start()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.00001, now + TICK_DECAY_S)?;
        oscillator.stop_with_when(now + TICK_DECAY_S)?;

        Ok(())
    }
}
