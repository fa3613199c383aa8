/// Gameplay tuning for thruster exhaust particles.

#[derive(Debug, Clone, Copy)]
pub struct ExhaustTuning {
    /// Lifetime in milliseconds; a particle is removed once its age reaches this.
    pub max_age_ms: f64,

    /// Thrust time in milliseconds between emissions.
    pub interval_ms: f64,

    /// Upper bound (exclusive) of the ejection speed in units per second.
    pub max_speed: f64,

    /// Radius of a freshly emitted particle when drawn.
    pub max_size: f64,
}

impl Default for ExhaustTuning {
    fn default() -> Self {
        Self {
            max_age_ms: 2250.0,
            interval_ms: 20.0,
            max_speed: 4.0,
            max_size: 1.0,
        }
    }
}
