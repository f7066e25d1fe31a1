//! Exponential smoothing helpers.
//!
//! Each call moves a value a fixed fraction `alpha` of the remaining way
//! toward its target. With `0 < alpha <= 1` the distance shrinks
//! monotonically and the value never overshoots.

use glam::Vec3;

/// Move `current` toward `target` by `alpha` of the remaining offset.
#[inline]
#[must_use]
pub fn approach(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}

/// Scalar variant of [`approach`].
#[inline]
#[must_use]
pub fn approach_f32(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Whether two points are within `eps` of each other.
#[inline]
#[must_use]
pub fn within(a: Vec3, b: Vec3, eps: f32) -> bool {
    a.distance_squared(b) <= eps * eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_is_monotonic_without_overshoot() {
        let target = Vec3::new(4.0, 2.0, 5.0);
        let mut current = Vec3::new(0.0, 5.0, 15.0);
        let mut last = current.distance(target);
        for _ in 0..200 {
            let next = approach(current, target, 0.05);
            let d = next.distance(target);
            assert!(d < last);
            // Every component keeps its sign relative to the target.
            let before = target - current;
            let after = target - next;
            assert!(before.x * after.x >= 0.0);
            assert!(before.y * after.y >= 0.0);
            assert!(before.z * after.z >= 0.0);
            current = next;
            last = d;
        }
    }

    #[test]
    fn alpha_one_snaps() {
        assert_eq!(approach_f32(1.0, 1.2, 1.0), 1.2);
        assert!(within(approach(Vec3::ZERO, Vec3::ONE, 1.0), Vec3::ONE, 1e-6));
    }
}
