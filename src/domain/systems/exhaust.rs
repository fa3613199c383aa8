use crate::domain::state::{Particle, Player};
use crate::domain::tuning::{ExhaustTuning, PlayerTuning};
use crate::domain::vector::{Vector2, rotate};
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI};

/// Emits, integrates and expires exhaust particles for one tick of `dt_ms`.
///
/// Runs after `flight::tick_player` so emission uses this tick's position and angle.
/// Returns true if a particle was emitted.
pub fn tick_exhaust<R: Rng>(
    player: &mut Player,
    rng: &mut R,
    dt_ms: f64,
    player_cfg: PlayerTuning,
    cfg: ExhaustTuning,
) -> bool {
    let emitted = try_emit(player, rng, player_cfg, cfg);
    tick_particles(&mut player.particles, dt_ms, cfg);
    emitted
}

/// Spends one interval from the accumulator and emits a single particle.
///
/// At most one particle per call, however far the accumulator has overshot; the
/// remainder carries into later ticks.
fn try_emit<R: Rng>(
    player: &mut Player,
    rng: &mut R,
    player_cfg: PlayerTuning,
    cfg: ExhaustTuning,
) -> bool {
    if player.emit_accumulator_ms <= cfg.interval_ms {
        return false;
    }
    player.emit_accumulator_ms -= cfg.interval_ms;

    let up = player.up();
    let angle_sample = rng.gen_range(0.0..1.0);
    let speed_sample = rng.gen_range(0.0..1.0);

    // Spawn at the tail of the hull.
    let position = player.position - up * (player_cfg.height / 2.0);
    let velocity = exhaust_velocity(up, angle_sample, speed_sample, cfg);
    player.particles.push(Particle::new(position, velocity));
    true
}

/// Ejection velocity from two uniform samples in `[0, 1)`.
///
/// The cone offset is `(angle_sample - PI/2) * PI + PI`, applied to `up` and then
/// reversed. The skew this gives the exhaust spread is intended.
pub fn exhaust_velocity(
    up: Vector2,
    angle_sample: f64,
    speed_sample: f64,
    cfg: ExhaustTuning,
) -> Vector2 {
    let offset = (angle_sample - FRAC_PI_2) * PI + PI;
    let dir = rotate(up, offset);
    let speed = speed_sample * cfg.max_speed;
    dir * -speed
}

/// Moves and ages every particle, then drops the ones at or past their lifetime.
pub fn tick_particles(particles: &mut Vec<Particle>, dt_ms: f64, cfg: ExhaustTuning) {
    let dt_s = dt_ms / 1000.0;
    for p in particles.iter_mut() {
        p.position += p.velocity * dt_s;
        p.age_ms += dt_ms;
    }

    particles.retain(|p| p.age_ms < cfg.max_age_ms);
}
