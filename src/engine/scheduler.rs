//! On-demand draw scheduling.
//!
//! The engine redeclares the scene on every host callback but only draws
//! when something is still changing. Every intent marks the scene dirty,
//! which guarantees one fresh frame after any burst of mutations.

use std::fmt;

use crate::options::{FrameLoop, RenderOptions};

/// Per-frame facts the scheduler bases its decision on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Activity {
    /// Live camera is within epsilon of its target.
    pub camera_converged: bool,
    /// Every node scale is within epsilon of its target.
    pub scales_settled: bool,
    /// The user is dragging the orbit.
    pub dragging: bool,
    /// Overview auto-rotation is running.
    pub auto_rotating: bool,
}

/// Why a frame was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// `always` frame loop.
    Continuous,
    /// An intent changed state since the last draw.
    Invalidated,
    /// Manual orbit in progress.
    Dragging,
    /// The camera has not reached its target.
    CameraMoving,
    /// Overview auto-rotation.
    AutoRotating,
    /// Hover/selection scale easing in progress.
    Animating,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Continuous => "continuous",
            Self::Invalidated => "invalidated",
            Self::Dragging => "dragging",
            Self::CameraMoving => "camera moving",
            Self::AutoRotating => "auto-rotating",
            Self::Animating => "animating",
        };
        f.write_str(s)
    }
}

/// Decides whether a host callback results in a draw or an idle tick.
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    frame_loop: FrameLoop,
    /// An intent changed state since the last draw
    dirty: bool,
}

impl RenderScheduler {
    /// Create a dirty scheduler so the first callback draws.
    #[must_use]
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            frame_loop: options.frame_loop,
            dirty: true,
        }
    }

    /// Request a draw on the next callback. Repeated calls before that draw
    /// still owe a single frame.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether a draw is owed to an intent.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether [`decide`](Self::decide) would draw, without consuming
    /// anything.
    #[must_use]
    pub fn wants_frame(&self, activity: Activity) -> bool {
        self.reason(activity).is_some()
    }

    /// Decide the current callback. Any draw clears the dirty flag, since
    /// the drawn frame already reflects every intent so far.
    pub fn decide(&mut self, activity: Activity) -> Option<DrawReason> {
        let reason = self.reason(activity);
        if reason.is_some() {
            self.dirty = false;
        }
        log::trace!(
            "scheduler: {}",
            reason.map_or_else(|| "idle".to_owned(), |r| r.to_string())
        );
        reason
    }

    /// Apply a new frame loop mode.
    pub fn configure(&mut self, options: &RenderOptions) {
        self.frame_loop = options.frame_loop;
    }

    fn reason(&self, activity: Activity) -> Option<DrawReason> {
        if self.frame_loop == FrameLoop::Always {
            Some(DrawReason::Continuous)
        } else if self.dirty {
            Some(DrawReason::Invalidated)
        } else if activity.dragging {
            Some(DrawReason::Dragging)
        } else if !activity.camera_converged {
            Some(DrawReason::CameraMoving)
        } else if activity.auto_rotating {
            Some(DrawReason::AutoRotating)
        } else if !activity.scales_settled {
            Some(DrawReason::Animating)
        } else {
            None
        }
    }
}
