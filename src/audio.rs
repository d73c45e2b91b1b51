//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Every failure here is swallowed: a missing audio stack means a silent
//! game, never a stopped one.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped - short high blip
    Jump,
    /// Score milestone - shorter, higher blip
    Score,
    /// Game over - long low tone
    GameOver,
}

/// A single decaying sine tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Starting gain before the volume multiplier
    pub gain: f32,
    pub duration: f64,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::ScoreMilestone { .. } => Some(SoundEffect::Score),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::DayNightToggled { .. } | GameEvent::NewBest { .. } => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            SoundEffect::Jump => Tone {
                freq: 500.0,
                gain: 0.3,
                duration: 0.1,
            },
            SoundEffect::Score => Tone {
                freq: 800.0,
                gain: 0.1,
                duration: 0.05,
            },
            SoundEffect::GameOver => Tone {
                freq: 200.0,
                gain: 0.3,
                duration: 0.5,
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let tone = effect.tone();
            let Some((osc, gain)) = self.create_osc(ctx, tone.freq, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(self.volume * tone.gain, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + tone.duration)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + tone.duration).ok();
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_cues() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jump), Some(SoundEffect::Jump));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::ScoreMilestone { score: 100 }),
            Some(SoundEffect::Score)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::GameOver { score: 3 }),
            Some(SoundEffect::GameOver)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::NewBest { score: 3 }), None);
    }

    #[test]
    fn test_game_over_is_longest_and_lowest() {
        let over = SoundEffect::GameOver.tone();
        for other in [SoundEffect::Jump, SoundEffect::Score] {
            let tone = other.tone();
            assert!(over.duration > tone.duration);
            assert!(over.freq < tone.freq);
        }
        assert!(SoundEffect::Score.tone().freq > SoundEffect::Jump.tone().freq);
    }
}
