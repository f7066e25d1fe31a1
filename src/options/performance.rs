use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Performance", inline)]
#[serde(default)]
/// Frame-rate sampling window and tier thresholds.
pub struct PerformanceOptions {
    /// Length of one measurement window in milliseconds.
    #[schemars(skip)]
    pub window_ms: f64,
    /// Lowest fps classified as Medium.
    #[schemars(title = "Medium Threshold", range(min = 1, max = 120))]
    pub medium_fps: u32,
    /// Lowest fps classified as High.
    #[schemars(title = "High Threshold", range(min = 1, max = 240))]
    pub high_fps: u32,
}

impl Default for PerformanceOptions {
    fn default() -> Self {
        Self {
            window_ms: 1000.0,
            medium_fps: 30,
            high_fps: 55,
        }
    }
}
