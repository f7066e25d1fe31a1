use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// When the host loop is asked to draw.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameLoop {
    /// Draw only when something changed.
    #[default]
    Demand,
    /// Draw every frame.
    Always,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Frame scheduling parameters.
pub struct RenderOptions {
    /// Frame loop discipline.
    #[schemars(title = "Frame Loop")]
    pub frame_loop: FrameLoop,
    /// Camera distance to target below which it counts as converged.
    #[schemars(skip)]
    pub convergence_epsilon: f32,
    /// Scale difference below which node easing counts as settled.
    #[schemars(skip)]
    pub scale_epsilon: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            frame_loop: FrameLoop::Demand,
            convergence_epsilon: 1e-3,
            scale_epsilon: 1e-3,
        }
    }
}
