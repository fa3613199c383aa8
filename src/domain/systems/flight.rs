use crate::domain::input::Controls;
use crate::domain::state::Player;
use crate::domain::tuning::PlayerTuning;

/// Advances the lander body by `dt_ms`: rotation, gravity, thrust, drag, then position.
///
/// Each step sees the values written by the previous one; position integrates with the
/// velocity updated this tick (semi-implicit Euler).
pub fn tick_player(player: &mut Player, controls: Controls, dt_ms: f64, cfg: PlayerTuning) {
    let dt_s = dt_ms / 1000.0;

    // rotation; holding both cancels exactly
    let turn = f64::from(controls.rotate_right as i8 - controls.rotate_left as i8);
    player.angle += turn * dt_ms * cfg.rot_speed / 1000.0;

    // gravity (+Y is down)
    player.velocity.y += dt_ms * cfg.gravity / 1000.0;

    // thrust along the nose; emission timing only advances while thrusting
    if controls.thrust {
        player.emit_accumulator_ms += dt_ms;
        player.velocity += player.up() * (cfg.thrust * dt_s);
    }

    // drag
    player.velocity.scale_mut(1.0 - cfg.drag * 0.01 * dt_ms);

    // position integrate
    player.position += player.velocity * dt_s;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vector::Vector2;

    const THRUST: Controls = Controls {
        rotate_left: false,
        rotate_right: false,
        thrust: true,
    };

    fn no_drag() -> PlayerTuning {
        PlayerTuning {
            drag: 0.0,
            ..PlayerTuning::default()
        }
    }

    #[test]
    fn when_no_keys_held_then_gravity_pulls_down() {
        let mut p = Player::new();
        tick_player(&mut p, Controls::default(), 5.0, no_drag());

        assert!((p.velocity.y - 0.15).abs() < 1e-12);
        assert_eq!(p.velocity.x, 0.0);
        // position uses the updated velocity
        assert!((p.position.y - 0.15 * 0.005).abs() < 1e-15);
        assert_eq!(p.emit_accumulator_ms, 0.0);
    }

    #[test]
    fn when_thrusting_upright_then_velocity_points_up() {
        let mut p = Player::new();
        tick_player(&mut p, THRUST, 20.0, no_drag());

        // gravity +0.6, thrust -2.0
        assert!((p.velocity.y - (0.6 - 2.0)).abs() < 1e-12);
        assert!(p.velocity.x.abs() < 1e-12);
        assert_eq!(p.emit_accumulator_ms, 20.0);
    }

    #[test]
    fn when_rotating_right_then_angle_increases_by_rate() {
        let mut p = Player::new();
        let controls = Controls {
            rotate_right: true,
            ..Controls::default()
        };
        tick_player(&mut p, controls, 100.0, PlayerTuning::default());
        assert!((p.angle - 0.5).abs() < 1e-12);

        let controls = Controls {
            rotate_left: true,
            ..Controls::default()
        };
        tick_player(&mut p, controls, 300.0, PlayerTuning::default());
        assert!((p.angle + 1.0).abs() < 1e-12);
    }

    #[test]
    fn when_rotated_then_thrust_follows_the_nose() {
        let mut p = Player::new();
        p.angle = std::f64::consts::FRAC_PI_2;
        let cfg = PlayerTuning {
            gravity: 0.0,
            drag: 0.0,
            ..PlayerTuning::default()
        };
        tick_player(&mut p, THRUST, 10.0, cfg);

        assert!((p.velocity.x - 1.0).abs() < 1e-12);
        assert!(p.velocity.y.abs() < 1e-12);
    }

    #[test]
    fn when_drag_applies_then_velocity_scales_by_linear_factor() {
        let mut p = Player::new();
        p.velocity = Vector2::new(10.0, -4.0);
        let cfg = PlayerTuning {
            gravity: 0.0,
            ..PlayerTuning::default()
        };
        tick_player(&mut p, Controls::default(), 5.0, cfg);

        let factor = 1.0 - 0.075 * 0.01 * 5.0;
        assert!((p.velocity.x - 10.0 * factor).abs() < 1e-12);
        assert!((p.velocity.y + 4.0 * factor).abs() < 1e-12);
    }

    #[test]
    fn when_thrust_released_then_accumulator_is_frozen() {
        let mut p = Player::new();
        tick_player(&mut p, THRUST, 7.0, PlayerTuning::default());
        tick_player(&mut p, Controls::default(), 50.0, PlayerTuning::default());

        assert_eq!(p.emit_accumulator_ms, 7.0);
    }
}
