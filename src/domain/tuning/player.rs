/// Gameplay tuning for the lander.
///
/// Keep this separate from runtime configuration (tick rates, frame cadence, etc.).

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Hull width in world units.
    pub width: f64,

    /// Hull height in world units. Exhaust spawns half this distance behind the centre.
    pub height: f64,

    /// Rotation speed in radians per second.
    pub rot_speed: f64,

    /// Downward acceleration in units per second squared.
    pub gravity: f64,

    /// Linear damping; velocity is scaled by `1 - drag * 0.01 * dt_ms` each tick.
    pub drag: f64,

    /// Thrust acceleration along the nose in units per second squared.
    pub thrust: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 6.0,
            rot_speed: 5.0,
            gravity: 30.0,
            drag: 0.075,
            thrust: 100.0,
        }
    }
}
