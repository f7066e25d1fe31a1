use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec2, Vec3};
use serde::Serialize;

use crate::camera::core::Camera;
use crate::catalog::Catalog;
use crate::options::CameraOptions;
use crate::selection::Selection;
use crate::util::smoothing::{approach, within};

/// Radians of orbit per pixel of drag at `rotate_speed = 1.0`.
const ROTATE_RADIANS_PER_PIXEL: f32 = 0.005;
/// Distance multiplier per wheel line at `zoom_speed = 1.0`.
const ZOOM_STEP: f32 = 0.95;
/// Keeps the orbit away from the poles so `up` stays valid.
const MIN_POLAR: f32 = 0.05;

/// What the automatic framing is aimed at.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Framing {
    Overview,
    Focus(Vec3),
}

/// Orbit settings a host input layer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitConfig {
    /// Panning is never allowed.
    pub enable_pan: bool,
    /// Wheel zoom is allowed.
    pub enable_zoom: bool,
    /// Drag rotation is allowed.
    pub enable_rotate: bool,
    /// Closest zoom distance.
    pub min_distance: f32,
    /// Farthest zoom distance.
    pub max_distance: f32,
    /// Whether idle auto-rotation is on (nothing selected).
    pub auto_rotate: bool,
    /// Auto-rotation speed.
    pub auto_rotate_speed: f32,
}

/// Steers the live camera toward the framing implied by the selection.
///
/// Every frame the target eye/look-at pair is recomputed from the selection
/// and the live camera covers a fixed fraction `smoothing` of the remaining
/// distance. Manual orbit, zoom and idle auto-rotation perturb the live
/// camera directly and are then eased back toward the framing, which never
/// moves on its own.
pub struct CameraController {
    /// Live camera.
    pub camera: Camera,
    framing: Framing,
    dragging: bool,

    overview_position: Vec3,
    overview_look_at: Vec3,
    focus_offset: Vec3,
    smoothing: f32,
    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    auto_rotate_speed: f32,
}

impl CameraController {
    /// Create a controller with the live camera at the overview framing.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let overview_position = Vec3::from_array(options.overview_position);
        let overview_look_at = Vec3::from_array(options.overview_look_at);
        let camera = Camera {
            eye: overview_position,
            target: overview_look_at,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            camera,
            framing: Framing::Overview,
            dragging: false,
            overview_position,
            overview_look_at,
            focus_offset: Vec3::from_array(options.focus_offset),
            smoothing: options.smoothing,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            auto_rotate_speed: options.auto_rotate_speed,
        }
    }

    /// Put the live camera back at the overview framing.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.camera.eye = self.overview_position;
        self.camera.target = self.overview_look_at;
    }

    /// Recompute the framing from the selection. Never mutates it.
    ///
    /// A focused id missing from the catalog keeps the previous framing.
    pub fn retarget(&mut self, selection: Selection, catalog: &Catalog) {
        match selection {
            Selection::Overview => self.framing = Framing::Overview,
            Selection::Focused(id) => {
                if let Some(node) = catalog.node(id) {
                    self.framing = Framing::Focus(node.position);
                }
            }
        }
    }

    /// Eye position the live camera is easing toward.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        match self.framing {
            Framing::Overview => self.overview_position,
            Framing::Focus(p) => p + self.focus_offset,
        }
    }

    /// Look-at point the live camera is easing toward.
    #[must_use]
    pub fn target_look_at(&self) -> Vec3 {
        match self.framing {
            Framing::Overview => self.overview_look_at,
            Framing::Focus(p) => p,
        }
    }

    /// Advance one frame: nudge the live eye around the live look-at when
    /// auto-rotating, then smooth toward the targets.
    pub fn update(&mut self) {
        if self.is_auto_rotating() {
            // TAU/3600 per frame at speed 1.0
            let step =
                Quat::from_rotation_y(TAU / 3600.0 * self.auto_rotate_speed);
            let arm = self.camera.eye - self.camera.target;
            self.camera.eye = self.camera.target + step * arm;
        }
        let target_position = self.target_position();
        let target_look_at = self.target_look_at();
        self.camera.eye = approach(self.camera.eye, target_position, self.smoothing);
        self.camera.target =
            approach(self.camera.target, target_look_at, self.smoothing);
    }

    /// Whether both eye and look-at are within `eps` of their targets.
    #[must_use]
    pub fn is_converged(&self, eps: f32) -> bool {
        within(self.camera.eye, self.target_position(), eps)
            && within(self.camera.target, self.target_look_at(), eps)
    }

    /// Auto-rotation requires overview framing and no active drag.
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.framing == Framing::Overview
            && !self.dragging
            && self.auto_rotate_speed != 0.0
    }

    /// Mark a manual drag as started or ended.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Whether a manual drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Orbit the live eye around the live look-at by a pixel delta.
    pub fn rotate(&mut self, delta: Vec2) {
        let offset = self.camera.eye - self.camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let k = ROTATE_RADIANS_PER_PIXEL * self.rotate_speed;
        let azimuth = offset.x.atan2(offset.z) - delta.x * k;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta.y * k)
            .clamp(MIN_POLAR, PI - MIN_POLAR);
        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        self.camera.eye = self.camera.target
            + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius;
    }

    /// Wheel zoom: positive `delta` moves closer. Returns the effective
    /// distance after clamping.
    pub fn zoom(&mut self, delta: f32) -> f32 {
        let distance =
            self.camera.distance() * ZOOM_STEP.powf(delta * self.zoom_speed);
        self.set_distance(distance)
    }

    /// Place the live eye at `distance` from the look-at along the current
    /// view direction, clamped to the zoom bounds. Returns the effective
    /// distance.
    pub fn set_distance(&mut self, distance: f32) -> f32 {
        let clamped = if distance.is_nan() {
            self.min_distance
        } else {
            distance.clamp(self.min_distance, self.max_distance)
        };
        let dir = (self.camera.eye - self.camera.target)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        self.camera.eye = self.camera.target + dir * clamped;
        clamped
    }

    /// Update the aspect ratio after a resize. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit settings for the host input layer.
    #[must_use]
    pub fn orbit_config(&self) -> OrbitConfig {
        OrbitConfig {
            enable_pan: false,
            enable_zoom: true,
            enable_rotate: true,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            auto_rotate: self.framing == Framing::Overview,
            auto_rotate_speed: self.auto_rotate_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::node;
    use crate::catalog::NodeId;

    fn setup() -> (CameraController, Catalog) {
        let catalog = Catalog::new(vec![
            node("Alpha", Vec3::new(1.0, 0.0, 0.0), 2),
            node("Beta", Vec3::new(-3.0, 1.0, 2.0), 2),
        ])
        .unwrap();
        (CameraController::new(&CameraOptions::default(), 1.5), catalog)
    }

    #[test]
    fn overview_targets() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Overview, &cat);
        assert_eq!(ctl.target_position(), Vec3::new(0.0, 5.0, 15.0));
        assert_eq!(ctl.target_look_at(), Vec3::ZERO);
        assert!(ctl.orbit_config().auto_rotate);
    }

    #[test]
    fn focus_targets_use_fixed_offset() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Focused(NodeId(1)), &cat);
        assert_eq!(ctl.target_position(), Vec3::new(0.0, 3.0, 7.0));
        assert_eq!(ctl.target_look_at(), Vec3::new(-3.0, 1.0, 2.0));
        assert!(!ctl.is_auto_rotating());
        assert!(!ctl.orbit_config().auto_rotate);
        assert!(!ctl.orbit_config().enable_pan);
    }

    #[test]
    fn convergence_is_monotonic_without_overshoot() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Focused(NodeId(0)), &cat);
        let target = ctl.target_position();
        let mut last = ctl.camera.eye.distance(target);
        let initial = target - ctl.camera.eye;
        // Stay well above f32 resolution so every step is representable.
        for _ in 0..150 {
            ctl.update();
            let delta = target - ctl.camera.eye;
            let d = delta.length();
            assert!(d < last, "distance must shrink every frame");
            assert!(delta.x * initial.x >= 0.0);
            assert!(delta.y * initial.y >= 0.0);
            assert!(delta.z * initial.z >= 0.0);
            last = d;
        }
        assert!(!ctl.is_converged(1e-3));
        for _ in 0..100 {
            ctl.update();
        }
        assert!(ctl.is_converged(1e-3));
    }

    #[test]
    fn one_step_moves_five_percent() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Focused(NodeId(0)), &cat);
        let start = ctl.camera.eye;
        ctl.update();
        let expected = start + (Vec3::new(4.0, 2.0, 5.0) - start) * 0.05;
        assert!((ctl.camera.eye - expected).length() < 1e-5);
    }

    #[test]
    fn zoom_distance_is_clamped() {
        let (mut ctl, _) = setup();
        assert_eq!(ctl.set_distance(3.0), 8.0);
        assert!((ctl.camera.distance() - 8.0).abs() < 1e-4);
        assert_eq!(ctl.set_distance(40.0), 25.0);
        assert!((ctl.camera.distance() - 25.0).abs() < 1e-4);
        assert_eq!(ctl.set_distance(12.0), 12.0);
    }

    #[test]
    fn wheel_zoom_respects_bounds() {
        let (mut ctl, _) = setup();
        for _ in 0..200 {
            let _ = ctl.zoom(1.0);
        }
        assert!((ctl.camera.distance() - 8.0).abs() < 1e-4);
        for _ in 0..200 {
            let _ = ctl.zoom(-1.0);
        }
        assert!((ctl.camera.distance() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn auto_rotation_only_in_overview_without_drag() {
        let (mut ctl, cat) = setup();
        assert!(ctl.is_auto_rotating());
        ctl.set_dragging(true);
        assert!(!ctl.is_auto_rotating());
        ctl.set_dragging(false);
        ctl.retarget(Selection::Focused(NodeId(0)), &cat);
        assert!(!ctl.is_auto_rotating());
    }

    #[test]
    fn auto_rotation_moves_live_eye_not_framing() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Overview, &cat);
        let overview = Vec3::new(0.0, 5.0, 15.0);
        ctl.update();
        assert!(ctl.camera.eye.distance(overview) > 0.0);
        assert!((ctl.camera.eye.y - 5.0).abs() < 1e-5);
        for _ in 0..900 {
            ctl.update();
        }
        assert_eq!(ctl.target_position(), overview);
        assert_eq!(ctl.target_look_at(), Vec3::ZERO);
        // Smoothing holds the eye a small lead ahead of the fixed framing.
        assert!(ctl.camera.eye.distance(overview) < 0.5);
    }

    #[test]
    fn rotate_preserves_radius() {
        let (mut ctl, _) = setup();
        let radius = ctl.camera.distance();
        ctl.rotate(Vec2::new(40.0, -25.0));
        assert!((ctl.camera.distance() - radius).abs() < 1e-3);
        assert_eq!(ctl.camera.target, Vec3::ZERO);
    }

    #[test]
    fn reset_returns_to_overview_pose() {
        let (mut ctl, cat) = setup();
        ctl.retarget(Selection::Focused(NodeId(0)), &cat);
        for _ in 0..10 {
            ctl.update();
        }
        ctl.reset();
        assert_eq!(ctl.camera.eye, Vec3::new(0.0, 5.0, 15.0));
        assert_eq!(ctl.camera.target, Vec3::ZERO);
    }
}
