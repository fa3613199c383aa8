// Domain layer: core simulation types and rules.

pub mod input;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod vector;

pub use input::{Action, Controls, InputState, KeyBindings};
pub use state::{Particle, ParticleSnapshot, Player, WorldSnapshot};
pub use vector::Vector2;
