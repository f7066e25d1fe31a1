use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, framing and orbit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera position while nothing is selected.
    #[schemars(skip)]
    pub overview_position: [f32; 3],
    /// Look-at point while nothing is selected.
    #[schemars(skip)]
    pub overview_look_at: [f32; 3],
    /// Offset from a focused node to the camera.
    #[schemars(skip)]
    pub focus_offset: [f32; 3],
    /// Fraction of the remaining distance covered per frame.
    #[schemars(title = "Camera Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Closest manual zoom distance.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest manual zoom distance.
    #[schemars(title = "Max Distance", range(min = 10.0, max = 60.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Drag rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Wheel zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Idle orbit speed; 1.0 is one revolution per minute at 60 fps.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            overview_position: [0.0, 5.0, 15.0],
            overview_look_at: [0.0, 0.0, 0.0],
            focus_offset: [3.0, 2.0, 5.0],
            smoothing: 0.05,
            min_distance: 8.0,
            max_distance: 25.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            auto_rotate_speed: 0.5,
        }
    }
}
