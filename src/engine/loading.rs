//! One-time asset-load gate.
//!
//! Until the host reports completion the engine shows a loading message
//! instead of drawing. A stalled load leaves the gate closed forever; there
//! is no timeout and no retry.

/// Loading state reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetGate {
    /// Assets still loading.
    Loading {
        /// Last reported progress in `[0, 100]`.
        progress: f32,
    },
    /// Assets loaded; frames may be drawn.
    Ready,
}

impl Default for AssetGate {
    fn default() -> Self {
        Self::Loading { progress: 0.0 }
    }
}

impl AssetGate {
    /// Record a progress report. Reaching 100 opens the gate; `NaN` is
    /// ignored. Progress never moves backwards.
    pub fn report_progress(&mut self, percent: f32) {
        let Self::Loading { progress } = self else {
            return;
        };
        if percent.is_nan() {
            return;
        }
        let percent = percent.clamp(0.0, 100.0).max(*progress);
        if percent >= 100.0 {
            self.mark_loaded();
        } else {
            log::debug!("assets {percent:.0}%");
            *progress = percent;
        }
    }

    /// Open the gate.
    pub fn mark_loaded(&mut self) {
        if *self != Self::Ready {
            log::info!("assets loaded");
            *self = Self::Ready;
        }
    }

    /// Whether frames may be drawn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self == Self::Ready
    }

    /// Progress in percent (100 once ready).
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self {
            Self::Loading { progress } => *progress,
            Self::Ready => 100.0,
        }
    }

    /// Loading indicator text, `None` once ready.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading { progress } => {
                Some(format!("Loading 3D Dashboard... {progress:.0}%"))
            }
            Self::Ready => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let mut gate = AssetGate::default();
        gate.report_progress(40.4);
        assert_eq!(gate.message().as_deref(), Some("Loading 3D Dashboard... 40%"));
        gate.report_progress(10.0);
        assert!((gate.progress() - 40.4).abs() < 1e-6);
        gate.report_progress(f32::NAN);
        assert!((gate.progress() - 40.4).abs() < 1e-6);
        gate.report_progress(-5.0);
        assert!(!gate.is_ready());
    }

    #[test]
    fn full_progress_opens_the_gate() {
        let mut gate = AssetGate::default();
        gate.report_progress(250.0);
        assert!(gate.is_ready());
        assert_eq!(gate.message(), None);
        gate.report_progress(20.0);
        assert!(gate.is_ready());
    }

    #[test]
    fn explicit_load_opens_the_gate() {
        let mut gate = AssetGate::default();
        gate.mark_loaded();
        assert!(gate.is_ready());
        assert!((gate.progress() - 100.0).abs() < f32::EPSILON);
    }
}
