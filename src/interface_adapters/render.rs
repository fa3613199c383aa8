// Render adapter: turns world snapshots into draw data on its own cadence.

use crate::domain::tuning::{ExhaustTuning, PlayerTuning, ViewTuning};
use crate::domain::vector::{rotate, wrap};
use crate::domain::{Vector2, WorldSnapshot};
use crate::interface_adapters::sink::{FrameSink, RenderError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info};

/// Follow camera. Draw calls apply `scale(zoom)` then `translate(translate)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub zoom: f64,
    /// Half the visible world extent along each axis.
    pub half_extent: f64,
    pub translate: Vector2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hull {
    pub center: Vector2,
    pub angle: f64,
    pub width: f64,
    pub height: f64,
    /// World-space corners, clockwise from the nose-left corner.
    pub corners: [Vector2; 4],
}

/// Everything a backend needs to draw one frame, in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawFrame {
    pub tick: u64,
    /// Real time since the previous frame; informational only.
    pub frame_dt_ms: f64,
    pub camera: Camera,
    pub grid_dot_radius: f64,
    pub grid: Vec<Vector2>,
    pub particles: Vec<Circle>,
    pub player: Hull,
}

/// Tunings the render adapter reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSettings {
    pub view: ViewTuning,
    pub player: PlayerTuning,
    pub exhaust: ExhaustTuning,
}

pub fn camera_for(snapshot: &WorldSnapshot, view: &ViewTuning) -> Camera {
    let speed = snapshot.velocity.length();
    // Zoom out as the lander speeds up.
    let zoom = (view.base_zoom - speed / view.zoom_speed_divisor).max(view.min_zoom);
    let half_extent = view.game_width / zoom / 2.0;
    Camera {
        zoom,
        half_extent,
        translate: Vector2::new(
            -snapshot.position.x + half_extent,
            -snapshot.position.y + half_extent,
        ),
    }
}

/// Grid dots covering the visible area plus one spacing of margin on each side.
pub fn grid_dots(center: Vector2, camera: &Camera, view: &ViewTuning) -> Vec<Vector2> {
    let spacing = view.grid_spacing;
    let top_left = Vector2::new(center.x - camera.half_extent, center.y - camera.half_extent);
    let span = (view.game_width + spacing) / camera.zoom;

    // Snap the first row and column onto the grid lattice.
    let first = Vector2::new(
        top_left.x - wrap(top_left.x, spacing) - spacing,
        top_left.y - wrap(top_left.y, spacing) - spacing,
    );
    let end = Vector2::new(top_left.x + span, top_left.y + span);
    if spacing <= 0.0 || ![first.x, first.y, end.x, end.y, spacing].iter().all(|v| v.is_finite()) {
        return Vec::new();
    }

    // Row and column count never exceed the span plus both margins.
    let steps = (span / spacing).ceil() as usize + 2;
    let along = |start: f64, end: f64| -> Vec<f64> {
        (0..steps)
            .map(|i| start + i as f64 * spacing)
            .take_while(|v| *v < end)
            .collect()
    };
    let xs = along(first.x, end.x);
    let ys = along(first.y, end.y);

    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| Vector2::new(x, y)))
        .collect()
}

pub fn hull_for(snapshot: &WorldSnapshot, player: &PlayerTuning) -> Hull {
    let (hw, hh) = (player.width / 2.0, player.height / 2.0);
    let local = [
        Vector2::new(-hw, -hh),
        Vector2::new(hw, -hh),
        Vector2::new(hw, hh),
        Vector2::new(-hw, hh),
    ];
    Hull {
        center: snapshot.position,
        angle: snapshot.angle,
        width: player.width,
        height: player.height,
        corners: local.map(|c| snapshot.position + rotate(c, snapshot.angle)),
    }
}

pub fn compose_frame(snapshot: &WorldSnapshot, settings: &RenderSettings, frame_dt_ms: f64) -> DrawFrame {
    let camera = camera_for(snapshot, &settings.view);
    let exhaust = &settings.exhaust;

    // Particles shrink linearly to nothing over their lifetime.
    let particles = snapshot
        .particles
        .iter()
        .map(|p| Circle {
            center: p.position,
            radius: (exhaust.max_size * (1.0 - p.age_ms / exhaust.max_age_ms)).max(0.0),
        })
        .collect();

    DrawFrame {
        tick: snapshot.tick,
        frame_dt_ms,
        camera,
        grid_dot_radius: settings.view.grid_dot_radius,
        grid: grid_dots(snapshot.position, &camera, &settings.view),
        particles,
        player: hull_for(snapshot, &settings.player),
    }
}

/// Variable-cadence render loop.
///
/// Reads the latest published snapshot each frame and never advances physics. Stops on
/// shutdown, when the physics loop is gone, or when the sink fails with an I/O error.
/// Returns the number of frames presented.
pub async fn render_task<S: FrameSink>(
    mut snapshot_rx: watch::Receiver<WorldSnapshot>,
    mut sink: S,
    settings: RenderSettings,
    frame_interval: Duration,
    shutdown: Arc<Notify>,
) -> u64 {
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_frame = Instant::now();
    let mut frames: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        if snapshot_rx.has_changed().is_err() {
            info!("snapshot channel closed; render loop exiting");
            break;
        }

        let now = Instant::now();
        let frame_dt_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        let frame = {
            let snapshot = snapshot_rx.borrow_and_update();
            compose_frame(&snapshot, &settings, frame_dt_ms)
        };

        match sink.present(&frame) {
            Ok(()) => frames += 1,
            Err(RenderError::Encode(e)) => {
                error!(error = %e, tick = frame.tick, "failed to encode frame");
            }
            Err(e @ RenderError::Io(_)) => {
                error!(error = %e, "frame sink failed; render loop exiting");
                break;
            }
        }
    }

    info!(frames, "render loop stopped");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticleSnapshot;

    fn at_rest(position: Vector2) -> WorldSnapshot {
        WorldSnapshot {
            position,
            ..WorldSnapshot::default()
        }
    }

    #[test]
    fn when_at_rest_then_camera_uses_base_zoom_and_centers_player() {
        let view = ViewTuning::default();
        let cam = camera_for(&at_rest(Vector2::new(3.0, -7.0)), &view);

        assert_eq!(cam.zoom, 1.25);
        assert_eq!(cam.half_extent, 40.0);
        assert_eq!(cam.translate, Vector2::new(37.0, 47.0));
    }

    #[test]
    fn when_moving_fast_then_camera_zooms_out_and_clamps() {
        let view = ViewTuning::default();
        let mut snap = at_rest(Vector2::ZERO);

        snap.velocity = Vector2::new(0.0, 125.0);
        assert!((camera_for(&snap, &view).zoom - 1.0).abs() < 1e-12);

        snap.velocity = Vector2::new(3000.0, 0.0);
        assert_eq!(camera_for(&snap, &view).zoom, view.min_zoom);
    }

    #[test]
    fn when_player_is_off_lattice_then_grid_dots_stay_on_lattice() {
        let view = ViewTuning::default();
        for pos in [Vector2::new(-13.3, 27.9), Vector2::new(0.0, 0.0), Vector2::new(-45.0, -45.0)] {
            let snap = at_rest(pos);
            let cam = camera_for(&snap, &view);
            let dots = grid_dots(pos, &cam, &view);

            assert!(!dots.is_empty());
            for d in &dots {
                assert!(wrap(d.x, 10.0).min(10.0 - wrap(d.x, 10.0)) < 1e-9, "{d:?}");
                assert!(wrap(d.y, 10.0).min(10.0 - wrap(d.y, 10.0)) < 1e-9, "{d:?}");
            }

            // no gap wider than one spacing at either edge of the view
            let tl = Vector2::new(pos.x - cam.half_extent, pos.y - cam.half_extent);
            let min_x = dots.iter().map(|d| d.x).fold(f64::INFINITY, f64::min);
            let max_x = dots.iter().map(|d| d.x).fold(f64::NEG_INFINITY, f64::max);
            assert!(min_x <= tl.x);
            assert!(max_x >= tl.x + 2.0 * cam.half_extent - 10.0);
        }
    }

    #[test]
    fn when_at_origin_then_grid_starts_one_spacing_before_view() {
        let view = ViewTuning::default();
        let snap = at_rest(Vector2::ZERO);
        let cam = camera_for(&snap, &view);
        let dots = grid_dots(Vector2::ZERO, &cam, &view);

        // top-left is (-40, -40); span is 110 / 1.25 = 88
        assert_eq!(dots[0], Vector2::new(-50.0, -50.0));
        let cols = dots.iter().filter(|d| d.y == -50.0).count();
        assert_eq!(cols, 10);
        assert_eq!(dots.len(), 100);
    }

    #[test]
    fn when_position_is_not_finite_then_grid_is_empty() {
        let view = ViewTuning::default();
        for pos in [
            Vector2::new(0.0, f64::NAN),
            Vector2::new(f64::NAN, 0.0),
            Vector2::new(0.0, f64::NEG_INFINITY),
            Vector2::new(f64::INFINITY, 3.0),
        ] {
            let snap = at_rest(pos);
            let cam = camera_for(&snap, &view);
            assert!(grid_dots(pos, &cam, &view).is_empty(), "{pos:?}");
        }

        // a broken snapshot still composes a frame
        let mut snap = at_rest(Vector2::new(0.0, f64::NAN));
        snap.velocity = Vector2::new(f64::NAN, f64::NAN);
        let frame = compose_frame(&snap, &RenderSettings::default(), 16.0);
        assert!(frame.grid.is_empty());
        assert_eq!(frame.camera.zoom, view.min_zoom);
    }

    #[test]
    fn when_position_is_huge_then_grid_stays_bounded() {
        let view = ViewTuning::default();
        let pos = Vector2::new(1e300, -1e300);
        let snap = at_rest(pos);
        let cam = camera_for(&snap, &view);

        let dots = grid_dots(pos, &cam, &view);

        let steps = (110.0_f64 / 1.25 / 10.0).ceil() as usize + 2;
        assert!(dots.len() <= steps * steps, "dots={}", dots.len());
    }

    #[test]
    fn when_particles_age_then_radius_shrinks() {
        let mut snap = at_rest(Vector2::ZERO);
        snap.particles = vec![
            ParticleSnapshot {
                position: Vector2::new(1.0, 2.0),
                velocity: Vector2::ZERO,
                age_ms: 0.0,
            },
            ParticleSnapshot {
                position: Vector2::ZERO,
                velocity: Vector2::ZERO,
                age_ms: 1125.0,
            },
        ];

        let frame = compose_frame(&snap, &RenderSettings::default(), 16.0);

        assert_eq!(frame.particles[0].radius, 1.0);
        assert_eq!(frame.particles[0].center, Vector2::new(1.0, 2.0));
        assert_eq!(frame.particles[1].radius, 0.5);
        assert_eq!(frame.frame_dt_ms, 16.0);
    }

    #[test]
    fn when_rotated_quarter_turn_then_hull_lies_sideways() {
        let mut snap = at_rest(Vector2::new(10.0, 0.0));
        snap.angle = std::f64::consts::FRAC_PI_2;

        let hull = hull_for(&snap, &PlayerTuning::default());

        // nose-left corner (-1, -3) rotates to (3, -1)
        assert!((hull.corners[0].x - 13.0).abs() < 1e-12);
        assert!((hull.corners[0].y + 1.0).abs() < 1e-12);
        let xs: Vec<f64> = hull.corners.iter().map(|c| c.x).collect();
        let width = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - xs.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!((width - 6.0).abs() < 1e-12);
    }
}
