// Use-case level inputs/outputs for the physics loop.

use std::time::Duration;

/// Key transitions delivered to the physics loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Press(String),
    Release(String),
    ReleaseAll,
}

/// Runtime settings for the physics loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Target interval between physics ticks.
    pub tick_interval: Duration,
    /// Elapsed time above which a tick is reported as a stall.
    pub stall_warn: Duration,
}
