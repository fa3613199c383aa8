// Domain-level simulation entities and snapshot types.

use crate::domain::vector::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub age_ms: f64, // time since emission
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            age_ms: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vector2,
    pub velocity: Vector2, // units/s
    pub angle: f64,        // radians, unbounded; 0 = up

    // Thrust time not yet spent on emissions (ms). Only grows while thrust is held.
    pub emit_accumulator_ms: f64,
    // Emission order.
    pub particles: Vec<Particle>,
}

impl Player {
    /// Player at rest at the origin, pointing up, with no exhaust.
    pub fn new() -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            angle: 0.0,
            emit_accumulator_ms: 0.0,
            particles: Vec::new(),
        }
    }

    pub fn up(&self) -> Vector2 {
        Vector2::up(self.angle)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub age_ms: f64,
}

/// Read-only view of the simulation handed to renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub simulated_ms: f64,
    pub position: Vector2,
    pub velocity: Vector2,
    pub angle: f64,
    pub particles: Vec<ParticleSnapshot>,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position,
            velocity: p.velocity,
            age_ms: p.age_ms,
        }
    }
}
