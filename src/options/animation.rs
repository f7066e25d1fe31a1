use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Per-frame decorative increments and easing factors.
pub struct AnimationOptions {
    /// Node spin about Y, radians per frame.
    #[schemars(title = "Node Spin", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub node_spin: f32,
    /// Satellite group spin about Y, radians per frame.
    #[schemars(title = "Satellite Spin", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub satellite_spin: f32,
    /// Platform spin about Y, radians per frame.
    #[schemars(title = "Platform Spin", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub platform_spin: f32,
    /// Particle field spin about X, radians per frame.
    #[schemars(skip)]
    pub particle_spin_x: f32,
    /// Particle field spin about Y, radians per frame.
    #[schemars(skip)]
    pub particle_spin_y: f32,
    /// Scale of the hovered node.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub hover_scale: f32,
    /// Scale of the selected node.
    #[schemars(title = "Selected Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub selected_scale: f32,
    /// Fraction of the remaining scale change applied per frame.
    #[schemars(skip)]
    pub scale_smoothing: f32,
    /// Vertical bob speed.
    #[schemars(title = "Float Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub float_speed: f32,
    /// Vertical bob intensity.
    #[schemars(title = "Float Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub float_intensity: f32,
    /// Vertical bob speed of satellites.
    #[schemars(skip)]
    pub satellite_float_speed: f32,
    /// Vertical bob intensity of satellites.
    #[schemars(skip)]
    pub satellite_float_intensity: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            node_spin: 0.01,
            satellite_spin: 0.02,
            platform_spin: 0.005,
            particle_spin_x: 0.0005,
            particle_spin_y: 0.001,
            hover_scale: 1.2,
            selected_scale: 1.1,
            scale_smoothing: 0.1,
            float_speed: 2.0,
            float_intensity: 0.5,
            satellite_float_speed: 1.0,
            satellite_float_intensity: 0.3,
        }
    }
}
