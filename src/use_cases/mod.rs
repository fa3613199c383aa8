// Use cases layer: the owned simulation and the loop that drives it.

pub mod game;
pub mod simulation;
pub mod types;

pub use simulation::{SimSettings, Simulation};
pub use types::{InputEvent, LoopSettings};
