//! Declarative scene description handed to a renderer each drawn frame.
//!
//! The composer turns catalog + selection + animation state into a
//! [`SceneFrame`]: plain data describing every primitive (node boxes,
//! labels, satellites, platform, particle field, lights). A renderer
//! implements [`FrameSink`] to turn frames into pixels.

pub mod animation;
mod composer;
pub mod particles;
pub mod picking;

use std::sync::Arc;

pub use animation::SceneAnimation;
pub use composer::{
    emissive_intensity, satellite_layout, ComposeInput, SceneComposer,
};
use glam::{Vec2, Vec3};
pub use picking::PickTarget;
use serde::Serialize;

use crate::camera::controller::OrbitConfig;
use crate::camera::core::Camera;
use crate::catalog::NodeId;
use crate::selection::ProjectRef;

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Billboard text attached to a visual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Text content.
    pub text: String,
    /// Offset from the owning visual's position.
    pub offset: Vec3,
    /// Font size in world units.
    pub font_size: f32,
}

/// Hover card for a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Node name.
    pub name: String,
    /// Node description.
    pub description: String,
    /// Proficiency score.
    pub proficiency: u8,
    /// Tier accent color for the proficiency line.
    pub accent: &'static str,
}

/// A scene light.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    /// Uniform white light.
    Ambient {
        /// Intensity.
        intensity: f32,
    },
    /// Omnidirectional point light.
    Point {
        /// World position.
        position: Vec3,
        /// Intensity.
        intensity: f32,
        /// CSS hex color.
        color: String,
    },
}

/// One catalog node's box, label and optional tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    /// Catalog id.
    pub id: NodeId,
    /// World position including the float bob.
    pub position: Vec3,
    /// Spin about Y.
    pub rotation_y: f32,
    /// Uniform scale of the unit box.
    pub scale: f32,
    /// Box color.
    pub color: String,
    /// Emissive (glow) color from the proficiency tier.
    pub glow_color: &'static str,
    /// Emissive intensity.
    pub emissive_intensity: f32,
    /// Material opacity.
    pub opacity: f32,
    /// Whether the cursor is over this node.
    pub hovered: bool,
    /// Whether this node is focused.
    pub selected: bool,
    /// Name label below the box.
    pub label: Label,
    /// Present only while hovered.
    pub tooltip: Option<Tooltip>,
}

/// One project satellite of the focused node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteVisual {
    /// Project this satellite stands for.
    pub project: ProjectRef,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Layout angle on the circle, `index / N * 2π`.
    pub angle: f32,
    /// Position relative to the node, before group spin.
    pub local_position: Vec3,
    /// World position after group spin and bob.
    pub position: Vec3,
    /// Group spin about Y shared by all satellites.
    pub group_rotation: f32,
    /// Box edge length.
    pub size: f32,
    /// Box and emissive color.
    pub color: &'static str,
    /// Emissive intensity.
    pub emissive_intensity: f32,
}

/// Central rotating disc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformVisual {
    /// Center of the disc.
    pub position: Vec3,
    /// Disc radius.
    pub radius: f32,
    /// Disc thickness.
    pub height: f32,
    /// Radial segment count.
    pub segments: u32,
    /// Spin about Y.
    pub rotation_y: f32,
    /// Base color.
    pub color: &'static str,
    /// Emissive color.
    pub emissive: &'static str,
    /// Emissive intensity.
    pub emissive_intensity: f32,
    /// Material opacity.
    pub opacity: f32,
}

/// Ambient point cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleVisual {
    /// Point positions, shared across frames.
    pub positions: Arc<[Vec3]>,
    /// Field rotation (x, y).
    pub rotation: Vec2,
    /// Point size.
    pub size: f32,
    /// Point color.
    pub color: String,
    /// Point opacity.
    pub opacity: f32,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    /// Live camera.
    pub camera: Camera,
    /// Orbit settings for the host input layer.
    pub orbit: OrbitConfig,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Clear color.
    pub background: String,
    /// Environment map preset.
    pub environment: String,
    /// Ambient light followed by point lights.
    pub lights: Vec<Light>,
    /// Central disc.
    pub platform: PlatformVisual,
    /// Ambient particles.
    pub particles: ParticleVisual,
    /// One visual per catalog node, in catalog order.
    pub nodes: Vec<NodeVisual>,
    /// Satellites of the focused node; empty in overview.
    pub satellites: Vec<SatelliteVisual>,
}

impl SceneFrame {
    /// Ambient light intensity, if an ambient light is declared.
    #[must_use]
    pub fn ambient_intensity(&self) -> Option<f32> {
        self.lights.iter().find_map(|l| match l {
            Light::Ambient { intensity } => Some(*intensity),
            Light::Point { .. } => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

/// Receives drawn frames.
pub trait FrameSink {
    /// Draw one frame.
    fn draw(&mut self, frame: &SceneFrame);

    /// Answer a pick at physical pixel `(x, y)`. `None` means the sink has
    /// no picking of its own and the caller should pick on the CPU.
    fn pick(&self, _x: f32, _y: f32) -> Option<PickTarget> {
        None
    }
}
