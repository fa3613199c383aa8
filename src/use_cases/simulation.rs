// Owned simulation context: the single lander, its exhaust, and the held keys.

use crate::domain::systems::{exhaust, flight};
use crate::domain::tuning::{ExhaustTuning, PlayerTuning};
use crate::domain::{InputState, KeyBindings, ParticleSnapshot, Player, WorldSnapshot};
use rand::Rng;

/// Tunings applied by a simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimSettings {
    pub player: PlayerTuning,
    pub exhaust: ExhaustTuning,
}

pub struct Simulation<R> {
    pub player: Player,
    pub input: InputState,
    pub bindings: KeyBindings,
    pub settings: SimSettings,
    rng: R,
    tick: u64,
    simulated_ms: f64,
}

impl<R: Rng> Simulation<R> {
    pub fn new(settings: SimSettings, bindings: KeyBindings, rng: R) -> Self {
        Self {
            player: Player::new(),
            input: InputState::new(),
            bindings,
            settings,
            rng,
            tick: 0,
            simulated_ms: 0.0,
        }
    }

    pub fn press(&mut self, key: &str) {
        self.input.press(key);
    }

    pub fn release(&mut self, key: &str) {
        self.input.release(key);
    }

    /// Advances the world by `dt_ms` of elapsed real time.
    ///
    /// Non-positive and non-finite durations are ignored. Large durations are applied as one
    /// step without subdivision. Returns whether the world advanced.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return false;
        }

        let controls = self.bindings.controls(&self.input);
        flight::tick_player(&mut self.player, controls, dt_ms, self.settings.player);
        exhaust::tick_exhaust(
            &mut self.player,
            &mut self.rng,
            dt_ms,
            self.settings.player,
            self.settings.exhaust,
        );

        self.tick += 1;
        self.simulated_ms += dt_ms;
        true
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn simulated_ms(&self) -> f64 {
        self.simulated_ms
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            simulated_ms: self.simulated_ms,
            position: self.player.position,
            velocity: self.player.velocity,
            angle: self.player.angle,
            particles: self.player.particles.iter().map(ParticleSnapshot::from).collect(),
        }
    }
}
