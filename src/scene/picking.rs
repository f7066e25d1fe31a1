//! CPU picking against the last composed frame.
//!
//! Nodes and satellites are approximated by bounding spheres around their
//! boxes. The nearest hit along the ray wins.

use glam::Vec3;
use serde::Serialize;

use super::SceneFrame;
use crate::camera::core::Ray;
use crate::catalog::NodeId;
use crate::selection::ProjectRef;

/// Half the diagonal of a unit cube.
const HALF_CUBE_DIAGONAL: f32 = 0.866_025_4;

/// What is under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PickTarget {
    /// Empty space.
    #[default]
    None,
    /// A catalog node.
    Node(NodeId),
    /// A project satellite of the focused node.
    Satellite(ProjectRef),
}

impl PickTarget {
    /// The node, if this target is one.
    #[must_use]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    /// Whether nothing is targeted.
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Distance along the ray to the first intersection with a sphere.
///
/// Returns `None` on a miss or when the sphere is behind the origin.
#[inline]
#[must_use]
pub fn ray_sphere(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest node or satellite hit by `ray` in `frame`.
#[must_use]
pub fn pick(frame: &SceneFrame, ray: &Ray) -> PickTarget {
    let nodes = frame.nodes.iter().filter_map(|n| {
        ray_sphere(ray.origin, ray.dir, n.position, n.scale * HALF_CUBE_DIAGONAL)
            .map(|t| (t, PickTarget::Node(n.id)))
    });
    let satellites = frame.satellites.iter().filter_map(|s| {
        ray_sphere(ray.origin, ray.dir, s.position, s.size * HALF_CUBE_DIAGONAL)
            .map(|t| (t, PickTarget::Satellite(s.project)))
    });
    nodes
        .chain(satellites)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map_or(PickTarget::None, |(_, target)| target)
}
