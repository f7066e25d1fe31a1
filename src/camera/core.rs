use glam::{Mat4, Vec3, Vec4};
use serde::Serialize;

/// A resolved perspective pose: where the eye sits, what it looks at, and
/// the lens. This is what a [`SceneFrame`](crate::SceneFrame) carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// World-space eye position.
    pub eye: Vec3,
    /// Point the eye looks at.
    pub target: Vec3,
    /// World up, normally +Y.
    pub up: Vec3,
    /// Width over height.
    pub aspect: f32,
    /// Vertical field of view, degrees.
    pub fovy: f32,
    /// Near plane.
    pub znear: f32,
    /// Far plane.
    pub zfar: f32,
}

/// World-space ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

impl Camera {
    /// View matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses the [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Projection times view.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Ray through pixel `(sx, sy)` of a `width` × `height` viewport.
    ///
    /// Returns `None` for an empty viewport or a degenerate camera.
    #[must_use]
    pub fn screen_ray(
        &self,
        sx: f32,
        sy: f32,
        width: f32,
        height: f32,
    ) -> Option<Ray> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let ndc_x = (2.0 * sx / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height);
        let inv = self.build_matrix().inverse();
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if far.w.abs() <= f32::EPSILON {
            return None;
        }
        let dir = (far.truncate() / far.w - self.eye).try_normalize()?;
        Some(Ray {
            origin: self.eye,
            dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let ray = camera().screen_ray(50.0, 50.0, 100.0, 100.0).unwrap();
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 10.0));
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn upper_left_ray_leans_up_left() {
        let ray = camera().screen_ray(0.0, 0.0, 100.0, 100.0).unwrap();
        assert!(ray.dir.x < 0.0);
        assert!(ray.dir.y > 0.0);
    }

    #[test]
    fn empty_viewport_has_no_ray() {
        assert!(camera().screen_ray(0.0, 0.0, 0.0, 100.0).is_none());
    }
}
