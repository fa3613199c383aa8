use super::simulation::Simulation;
use super::types::{InputEvent, LoopSettings};
use crate::domain::WorldSnapshot;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::{Notify, mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Fixed-cadence physics loop.
///
/// Each tick measures the real time since the previous one and steps the simulation by
/// that amount, so a late tick produces a proportionally larger step. Returns the
/// simulation once `shutdown` is notified.
pub async fn world_task<R: Rng>(
    mut sim: Simulation<R>,
    mut input_rx: mpsc::Receiver<InputEvent>,
    snapshot_tx: watch::Sender<WorldSnapshot>,
    settings: LoopSettings,
    shutdown: Arc<Notify>,
) -> Simulation<R> {
    // Missed ticks are delayed, never bursted; a tick never starts before the last ended.
    let mut interval = tokio::time::interval(settings.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_tick = Instant::now();
    info!(
        tick_interval_ms = settings.tick_interval.as_secs_f64() * 1000.0,
        "physics loop started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;

        // Apply all key transitions that arrived since the last tick.
        while let Ok(ev) = input_rx.try_recv() {
            apply_input(&mut sim, ev);
        }

        if elapsed > settings.stall_warn {
            warn!(
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "physics tick stalled; applying one large step"
            );
        }

        if sim.step(elapsed.as_secs_f64() * 1000.0) {
            let _ = snapshot_tx.send(sim.snapshot());
        }
    }

    info!(
        ticks = sim.tick(),
        simulated_ms = sim.simulated_ms(),
        "physics loop stopped"
    );
    sim
}

fn apply_input<R: Rng>(sim: &mut Simulation<R>, ev: InputEvent) {
    match ev {
        InputEvent::Press(key) => {
            debug!(%key, repeat = sim.input.is_held(&key), "key down");
            sim.press(&key);
        }
        InputEvent::Release(key) => {
            debug!(%key, "key up");
            sim.release(&key);
        }
        InputEvent::ReleaseAll => {
            debug!(released = sim.input.held_count(), "all keys released");
            sim.input.release_all();
        }
    }
}
