//! Frame-rate sampling and performance tiers.

use std::fmt;

use serde::Serialize;

use crate::options::PerformanceOptions;

/// Discretized frame-rate classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceTier {
    /// At or above the high threshold.
    High,
    /// Between the medium and high thresholds.
    Medium,
    /// Below the medium threshold.
    Low,
}

impl PerformanceTier {
    /// Classify a frame rate against `[medium, high)` thresholds.
    #[must_use]
    pub fn classify(fps: u32, medium: u32, high: u32) -> Self {
        if fps < medium {
            Self::Low
        } else if fps < high {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// Windowed frame-rate sampler.
///
/// Counts drawn frames and, once a full window has elapsed, publishes
/// `round(frames * 1000 / elapsed_ms)` and the matching tier. There is no
/// hysteresis: each closed window reclassifies from scratch. The tier is
/// display-only.
#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    window_ms: f64,
    medium_fps: u32,
    high_fps: u32,
    /// Frames counted in the open window
    frame_count: u32,
    /// Start of the open window; set by the first tick
    window_start: Option<f64>,
    fps: u32,
    tier: PerformanceTier,
}

impl PerformanceMonitor {
    /// Create a monitor reporting 60 fps / High until the first window
    /// closes.
    #[must_use]
    pub fn new(options: &PerformanceOptions) -> Self {
        Self {
            window_ms: options.window_ms,
            medium_fps: options.medium_fps,
            high_fps: options.high_fps,
            frame_count: 0,
            window_start: None,
            fps: 60,
            tier: PerformanceTier::High,
        }
    }

    /// Record one drawn frame at `now_ms`.
    ///
    /// A timestamp earlier than the window start keeps the window open.
    /// A zero-length window is skipped instead of divided by.
    pub fn tick(&mut self, now_ms: f64) {
        if !now_ms.is_finite() {
            return;
        }
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            self.frame_count = 1;
            return;
        };
        self.frame_count = self.frame_count.saturating_add(1);

        let elapsed = now_ms - start;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return;
        }

        self.fps = (f64::from(self.frame_count) * 1000.0 / elapsed).round() as u32;
        self.frame_count = 0;
        self.window_start = Some(now_ms);

        let tier =
            PerformanceTier::classify(self.fps, self.medium_fps, self.high_fps);
        if tier != self.tier {
            log::info!(
                "performance tier {} -> {} ({} fps)",
                self.tier,
                tier,
                self.fps
            );
            self.tier = tier;
        }
    }

    /// Restart sampling; the last published values are kept.
    pub fn reset_window(&mut self) {
        self.frame_count = 0;
        self.window_start = None;
    }

    /// Most recently published frame rate.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Most recently published tier.
    #[must_use]
    pub fn tier(&self) -> PerformanceTier {
        self.tier
    }
}
