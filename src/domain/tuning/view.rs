/// Presentation tuning for the follow camera and background grid.

#[derive(Debug, Clone, Copy)]
pub struct ViewTuning {
    /// Visible world width at zoom 1.0.
    pub game_width: f64,

    /// Distance between background grid dots.
    pub grid_spacing: f64,

    pub grid_dot_radius: f64,

    /// Zoom when the lander is at rest.
    pub base_zoom: f64,

    /// Speed that removes one full unit of zoom.
    pub zoom_speed_divisor: f64,

    /// Floor for the zoom so the visible area stays finite at high speed.
    pub min_zoom: f64,
}

impl Default for ViewTuning {
    fn default() -> Self {
        Self {
            game_width: 100.0,
            grid_spacing: 10.0,
            grid_dot_radius: 0.5,
            base_zoom: 1.25,
            zoom_speed_divisor: 500.0,
            min_zoom: 0.05,
        }
    }
}
