//! Decorative per-frame animation state.
//!
//! Everything that moves without user input lives here as plain data, and
//! [`SceneAnimation::step`] produces the next state from the current one.
//! Nothing here reads selection or camera state directly; the caller passes
//! in the per-node scale targets derived from hover/selection.

use glam::Vec2;

use crate::options::AnimationOptions;
use crate::util::smoothing::approach_f32;

/// Golden angle, used to spread per-node bob phases.
const PHASE_SPREAD: f32 = 2.399_963;

/// Vertical bob offset for a floating object.
///
/// `time` is in seconds; the curve peaks at `intensity / 10`.
#[must_use]
pub fn float_offset(time: f32, phase: f32, speed: f32, intensity: f32) -> f32 {
    ((time + phase) / 4.0 * speed).sin() / 10.0 * intensity
}

/// Per-node bob phase so nodes do not float in lockstep.
#[must_use]
pub fn node_phase(index: usize) -> f32 {
    index as f32 * PHASE_SPREAD
}

/// Snapshot of all decorative animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAnimation {
    /// Node spin about Y (shared by all nodes).
    pub node_spin: f32,
    /// Satellite group spin about Y. Restarts when the focus changes.
    pub satellite_spin: f32,
    /// Platform spin about Y.
    pub platform_spin: f32,
    /// Particle field rotation (x, y).
    pub particle_rotation: Vec2,
    /// Seconds of float-bob time.
    pub float_time: f32,
    /// Current scale of each node, in catalog order.
    pub scales: Vec<f32>,
}

impl SceneAnimation {
    /// Initial state for `node_count` nodes at rest scale.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_spin: 0.0,
            satellite_spin: 0.0,
            platform_spin: 0.0,
            particle_rotation: Vec2::ZERO,
            float_time: 0.0,
            scales: vec![1.0; node_count],
        }
    }

    /// Next state after one frame lasting `dt` seconds.
    ///
    /// Spins advance by a fixed increment per frame; the float bob advances
    /// by wall time. Scales ease toward `scale_targets`.
    #[must_use]
    pub fn step(
        &self,
        rates: &AnimationOptions,
        scale_targets: &[f32],
        dt: f32,
    ) -> Self {
        let scales = self
            .scales
            .iter()
            .zip(scale_targets)
            .map(|(&s, &t)| approach_f32(s, t, rates.scale_smoothing))
            .collect();
        Self {
            node_spin: self.node_spin + rates.node_spin,
            satellite_spin: self.satellite_spin + rates.satellite_spin,
            platform_spin: self.platform_spin + rates.platform_spin,
            particle_rotation: self.particle_rotation
                + Vec2::new(rates.particle_spin_x, rates.particle_spin_y),
            float_time: self.float_time + dt.max(0.0),
            scales,
        }
    }

    /// Whether every node scale is within `eps` of its target.
    #[must_use]
    pub fn is_settled(&self, scale_targets: &[f32], eps: f32) -> bool {
        self.scales
            .iter()
            .zip(scale_targets)
            .all(|(s, t)| (s - t).abs() < eps)
    }
}

/// Scale target for one node: hover wins over selection.
#[must_use]
pub fn scale_target(
    rates: &AnimationOptions,
    hovered: bool,
    selected: bool,
) -> f32 {
    if hovered {
        rates.hover_scale
    } else if selected {
        rates.selected_scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_pure_and_monotonic() {
        let rates = AnimationOptions::default();
        let a = SceneAnimation::new(2);
        let b = a.step(&rates, &[1.0, 1.0], 1.0 / 60.0);
        assert_eq!(a, SceneAnimation::new(2));
        assert!(b.node_spin > a.node_spin);
        assert!(b.satellite_spin > a.satellite_spin);
        assert!(b.platform_spin > a.platform_spin);
        assert!(b.particle_rotation.x > 0.0 && b.particle_rotation.y > 0.0);
        assert!((b.node_spin - 0.01).abs() < 1e-7);
    }

    #[test]
    fn hovered_scale_eases_to_target() {
        let rates = AnimationOptions::default();
        let targets = [scale_target(&rates, true, false), 1.0];
        let mut anim = SceneAnimation::new(2);
        let next = anim.step(&rates, &targets, 0.0);
        assert!((next.scales[0] - 1.02).abs() < 1e-6);
        assert!(!next.is_settled(&targets, 1e-3));
        for _ in 0..200 {
            anim = anim.step(&rates, &targets, 0.0);
        }
        assert!(anim.is_settled(&targets, 1e-3));
    }

    #[test]
    fn hover_beats_selection() {
        let rates = AnimationOptions::default();
        assert_eq!(scale_target(&rates, true, true), 1.2);
        assert_eq!(scale_target(&rates, false, true), 1.1);
        assert_eq!(scale_target(&rates, false, false), 1.0);
    }

    #[test]
    fn float_offset_is_bounded() {
        for i in 0..100 {
            let y = float_offset(i as f32 * 0.37, node_phase(i), 2.0, 0.5);
            assert!(y.abs() <= 0.05 + 1e-6);
        }
    }
}
