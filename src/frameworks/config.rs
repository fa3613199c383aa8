use crate::domain::{Action, KeyBindings};
use std::{env, time::Duration};

// Runtime constants and environment lookups (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
// Interval between info-level frame summaries from the log sink.
pub const LOG_SUMMARY_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutput {
    Json,
    Log,
    None,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

pub fn physics_tick_interval() -> Duration {
    let ticks_per_second = parsed::<u32>("PHYSICS_TICKS_PER_SECOND")
        .filter(|v| *v > 0)
        .unwrap_or(200);
    Duration::from_secs(1) / ticks_per_second
}

pub fn render_interval() -> Duration {
    let millis = parsed::<u64>("RENDER_INTERVAL_MS")
        .filter(|v| *v > 0)
        .unwrap_or(16);
    Duration::from_millis(millis)
}

pub fn stall_warn() -> Duration {
    Duration::from_millis(parsed::<u64>("STALL_WARN_MS").unwrap_or(250))
}

pub fn frame_output() -> FrameOutput {
    parse_frame_output(env::var("FRAME_OUTPUT").ok().as_deref())
}

fn parse_frame_output(value: Option<&str>) -> FrameOutput {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("json") => FrameOutput::Json,
        Some("none") => FrameOutput::None,
        _ => FrameOutput::Log,
    }
}

/// Fixed RNG seed for reproducible exhaust, if configured.
pub fn rng_seed() -> Option<u64> {
    parsed("LANDER_SEED")
}

pub fn key_bindings() -> KeyBindings {
    bindings_from(|key| env::var(key).ok())
}

// Defaults, with any action whose variable is set rebound to that key list.
fn bindings_from<F>(lookup: F) -> KeyBindings
where
    F: Fn(&str) -> Option<String>,
{
    let mut bindings = KeyBindings::default();
    for (action, key) in [
        (Action::RotateLeft, "KEYS_ROTATE_LEFT"),
        (Action::RotateRight, "KEYS_ROTATE_RIGHT"),
        (Action::Thrust, "KEYS_THRUST"),
    ] {
        if let Some(keys) = lookup(key).as_deref().and_then(parse_key_list) {
            bindings.bind(action, keys);
        }
    }
    bindings
}

// Comma-separated key identifiers; an empty list keeps the defaults.
fn parse_key_list(value: &str) -> Option<Vec<String>> {
    let keys: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect();
    (!keys.is_empty()).then_some(keys)
}
