use std::f32::consts::TAU;
use std::sync::Arc;

use glam::{Quat, Vec3};

use super::animation::{float_offset, node_phase, scale_target, SceneAnimation};
use super::{
    Label, Light, NodeVisual, ParticleVisual, PlatformVisual, SatelliteVisual,
    SceneFrame, Tooltip,
};
use crate::camera::controller::OrbitConfig;
use crate::camera::core::Camera;
use crate::catalog::{Catalog, NodeId, TechNode};
use crate::options::Options;
use crate::selection::{ProjectRef, Selection};

const NODE_OPACITY: f32 = 0.8;
const LABEL_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);
const LABEL_FONT_SIZE: f32 = 0.3;

const SATELLITE_RADIUS: f32 = 2.0;
/// 0.5 box at 0.3 scale
const SATELLITE_SIZE: f32 = 0.15;
const SATELLITE_COLOR: &str = "#ff6b6b";
const SATELLITE_EMISSIVE: f32 = 0.2;

const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-10.0, -10.0, -10.0);

/// Emissive intensity for a node: `proficiency / 100` scaled by 0.4 when
/// hovered, 0.3 when selected, 0.15 otherwise.
#[must_use]
pub fn emissive_intensity(proficiency: u8, hovered: bool, selected: bool) -> f32 {
    let base = f32::from(proficiency) / 100.0;
    let factor = if hovered {
        0.4
    } else if selected {
        0.3
    } else {
        0.15
    };
    base * factor
}

/// `(angle, local_position)` for `count` satellites evenly spaced on a
/// circle of `radius` in the XZ plane, starting at +X.
#[must_use]
pub fn satellite_layout(count: usize, radius: f32) -> Vec<(f32, Vec3)> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            (angle, Vec3::new(cos * radius, 0.0, sin * radius))
        })
        .collect()
}

/// Per-frame inputs to [`SceneComposer::compose`].
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    /// Node catalog.
    pub catalog: &'a Catalog,
    /// Current selection.
    pub selection: Selection,
    /// Node under the cursor.
    pub hovered: Option<NodeId>,
    /// Decorative animation state for this frame.
    pub animation: &'a SceneAnimation,
    /// Live camera.
    pub camera: Camera,
    /// Orbit settings.
    pub orbit: OrbitConfig,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// Options for palettes and animation rates.
    pub options: &'a Options,
}

impl ComposeInput<'_> {
    /// Per-node scale targets in catalog order.
    #[must_use]
    pub fn scale_targets(&self) -> Vec<f32> {
        self.catalog
            .iter()
            .map(|(id, _)| {
                scale_target(
                    &self.options.animation,
                    self.hovered == Some(id),
                    self.selection.is_focused(id),
                )
            })
            .collect()
    }
}

/// Builds [`SceneFrame`]s. Owns the particle field so it is generated once
/// per mount.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    particles: Arc<[Vec3]>,
}

impl SceneComposer {
    /// Create a composer around a pre-generated particle field.
    #[must_use]
    pub fn new(particles: Arc<[Vec3]>) -> Self {
        Self { particles }
    }

    /// Declare the full frame.
    #[must_use]
    pub fn compose(&self, input: &ComposeInput<'_>) -> SceneFrame {
        let palette = input.options.theme.palette(input.dark_mode);
        let anim = &input.options.animation;

        let nodes = input
            .catalog
            .iter()
            .map(|(id, node)| node_visual(input, id, node))
            .collect();

        let satellites = input
            .selection
            .focused()
            .and_then(|id| input.catalog.node(id).map(|n| (id, n)))
            .map(|(id, node)| {
                layout_satellites(
                    node,
                    id,
                    input.animation,
                    anim.satellite_float_speed,
                    anim.satellite_float_intensity,
                )
            })
            .unwrap_or_default();

        SceneFrame {
            camera: input.camera,
            orbit: input.orbit,
            dark_mode: input.dark_mode,
            background: palette.background.clone(),
            environment: palette.environment.clone(),
            lights: vec![
                Light::Ambient {
                    intensity: palette.ambient_intensity,
                },
                Light::Point {
                    position: KEY_LIGHT_POSITION,
                    intensity: palette.key_light_intensity,
                    color: "#ffffff".to_owned(),
                },
                Light::Point {
                    position: FILL_LIGHT_POSITION,
                    intensity: palette.fill_light_intensity,
                    color: palette.fill_light_color.clone(),
                },
            ],
            platform: PlatformVisual {
                position: Vec3::new(0.0, -4.0, 0.0),
                radius: 6.0,
                height: 0.5,
                segments: 32,
                rotation_y: input.animation.platform_spin,
                color: "#1a1a2e",
                emissive: "#16213e",
                emissive_intensity: 0.2,
                opacity: 0.8,
            },
            particles: ParticleVisual {
                positions: Arc::clone(&self.particles),
                rotation: input.animation.particle_rotation,
                size: palette.particle_size,
                color: palette.particle_color.clone(),
                opacity: palette.particle_opacity,
            },
            nodes,
            satellites,
        }
    }
}

fn node_visual(
    input: &ComposeInput<'_>,
    id: NodeId,
    node: &TechNode,
) -> NodeVisual {
    let anim = &input.options.animation;
    let hovered = input.hovered == Some(id);
    let selected = input.selection.is_focused(id);
    let tier = node.tier();
    let bob = float_offset(
        input.animation.float_time,
        node_phase(id.0),
        anim.float_speed,
        anim.float_intensity,
    );
    NodeVisual {
        id,
        position: node.position + Vec3::Y * bob,
        rotation_y: input.animation.node_spin,
        scale: input.animation.scales.get(id.0).copied().unwrap_or(1.0),
        color: node.color.clone(),
        glow_color: tier.color(),
        emissive_intensity: emissive_intensity(
            node.proficiency,
            hovered,
            selected,
        ),
        opacity: NODE_OPACITY,
        hovered,
        selected,
        label: Label {
            text: node.name.clone(),
            offset: LABEL_OFFSET,
            font_size: LABEL_FONT_SIZE,
        },
        tooltip: hovered.then(|| Tooltip {
            name: node.name.clone(),
            description: node.description.clone(),
            proficiency: node.proficiency,
            accent: tier.color(),
        }),
    }
}

fn layout_satellites(
    node: &TechNode,
    id: NodeId,
    animation: &SceneAnimation,
    float_speed: f32,
    float_intensity: f32,
) -> Vec<SatelliteVisual> {
    let spin = Quat::from_rotation_y(animation.satellite_spin);
    satellite_layout(node.projects.len(), SATELLITE_RADIUS)
        .into_iter()
        .zip(&node.projects)
        .enumerate()
        .map(|(index, ((angle, local), project))| {
            let bob = float_offset(
                animation.float_time,
                node_phase(index),
                float_speed,
                float_intensity,
            );
            SatelliteVisual {
                project: ProjectRef { node: id, index },
                name: project.name.clone(),
                description: project.description.clone(),
                angle,
                local_position: local,
                position: node.position + spin * local + Vec3::Y * bob,
                group_rotation: animation.satellite_spin,
                size: SATELLITE_SIZE,
                color: SATELLITE_COLOR,
                emissive_intensity: SATELLITE_EMISSIVE,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec2;

    use super::*;
    use crate::camera::controller::CameraController;
    use crate::catalog::tests::node;
    use crate::scene::particles;
    use crate::scene::picking::{pick, PickTarget};

    struct Fixture {
        catalog: Catalog,
        options: Options,
        animation: SceneAnimation,
        controller: CameraController,
        composer: SceneComposer,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Catalog::new(vec![
                node("Alpha", Vec3::new(1.0, 0.0, 0.0), 2),
                node("Beta", Vec3::new(-3.0, 1.0, 2.0), 3),
            ])
            .unwrap();
            let options = Options::default();
            let animation = SceneAnimation::new(catalog.len());
            let controller = CameraController::new(&options.camera, 1.0);
            let composer =
                SceneComposer::new(particles::generate(&options.particles));
            Self {
                catalog,
                options,
                animation,
                controller,
                composer,
            }
        }

        fn frame(
            &self,
            selection: Selection,
            hovered: Option<NodeId>,
            dark_mode: bool,
        ) -> SceneFrame {
            self.composer.compose(&ComposeInput {
                catalog: &self.catalog,
                selection,
                hovered,
                animation: &self.animation,
                camera: self.controller.camera,
                orbit: self.controller.orbit_config(),
                dark_mode,
                options: &self.options,
            })
        }
    }

    #[test]
    fn emissive_factors() {
        assert!((emissive_intensity(100, true, false) - 0.4).abs() < 1e-6);
        assert!((emissive_intensity(100, true, true) - 0.4).abs() < 1e-6);
        assert!((emissive_intensity(100, false, true) - 0.3).abs() < 1e-6);
        assert!((emissive_intensity(80, false, false) - 0.12).abs() < 1e-6);
    }

    #[test]
    fn alpha_satellites_at_zero_and_pi() {
        let fx = Fixture::new();
        let alpha = fx.catalog.lookup("Alpha").unwrap();
        let frame = fx.frame(Selection::Focused(alpha), None, true);

        assert_eq!(frame.satellites.len(), 2);
        let center = Vec3::new(1.0, 0.0, 0.0);
        assert!(frame.satellites[0].angle.abs() < 1e-6);
        assert!((frame.satellites[1].angle - PI).abs() < 1e-6);
        assert!(
            (frame.satellites[0].local_position - Vec3::new(2.0, 0.0, 0.0))
                .length()
                < 1e-5
        );
        assert!(
            (frame.satellites[1].local_position - Vec3::new(-2.0, 0.0, 0.0))
                .length()
                < 1e-5
        );
        for sat in &frame.satellites {
            let flat = sat.position - center;
            assert!((Vec2::new(flat.x, flat.z).length() - 2.0).abs() < 1e-5);
            assert_eq!(sat.project.node, alpha);
        }

        let overview = fx.frame(Selection::Overview, None, true);
        assert!(overview.satellites.is_empty());
    }

    #[test]
    fn three_projects_spread_evenly() {
        let layout = satellite_layout(3, 2.0);
        assert!((layout[1].0 - TAU / 3.0).abs() < 1e-6);
        assert!((layout[2].0 - 2.0 * TAU / 3.0).abs() < 1e-6);
    }

    #[test]
    fn tooltip_only_on_hovered_node() {
        let fx = Fixture::new();
        let beta = fx.catalog.lookup("Beta").unwrap();
        let frame = fx.frame(Selection::Overview, Some(beta), true);
        assert!(frame.nodes[0].tooltip.is_none());
        let tip = frame.nodes[1].tooltip.as_ref().unwrap();
        assert_eq!(tip.name, "Beta");
        assert_eq!(tip.proficiency, 80);
        assert_eq!(tip.accent, "#4a90e2");
        assert_eq!(frame.nodes[1].label.text, "Beta");
    }

    #[test]
    fn dark_mode_round_trip_restores_parameters() {
        let fx = Fixture::new();
        let dark = fx.frame(Selection::Overview, None, true);
        let light = fx.frame(Selection::Overview, None, false);
        let dark_again = fx.frame(Selection::Overview, None, true);

        assert_eq!(dark.ambient_intensity(), Some(0.3));
        assert_eq!(light.ambient_intensity(), Some(0.6));
        assert_eq!(dark.particles.opacity, 0.8);
        assert_eq!(light.particles.opacity, 0.4);
        assert_eq!(light.environment, "dawn");
        assert_eq!(dark, dark_again);
    }

    #[test]
    fn cpu_pick_finds_node_under_center() {
        let mut fx = Fixture::new();
        let alpha = fx.catalog.lookup("Alpha").unwrap();
        fx.controller.camera.eye = Vec3::new(1.0, 0.0, 10.0);
        fx.controller.camera.target = Vec3::new(1.0, 0.0, 0.0);
        let frame = fx.frame(Selection::Overview, None, true);
        let ray = frame.camera.screen_ray(50.0, 50.0, 100.0, 100.0).unwrap();
        assert_eq!(pick(&frame, &ray), PickTarget::Node(alpha));

        let miss = frame.camera.screen_ray(99.0, 1.0, 100.0, 100.0).unwrap();
        assert_eq!(pick(&frame, &miss), PickTarget::None);
    }

    #[test]
    fn cpu_pick_finds_satellite() {
        let mut fx = Fixture::new();
        let alpha = fx.catalog.lookup("Alpha").unwrap();
        // Look straight down the +X satellite of Alpha at (3, y, 0).
        let sat_frame = fx.frame(Selection::Focused(alpha), None, true);
        let sat = sat_frame.satellites[0].position;
        fx.controller.camera.eye = sat + Vec3::new(0.0, 0.0, 5.0);
        fx.controller.camera.target = sat;
        let frame = fx.frame(Selection::Focused(alpha), None, true);
        let ray = frame.camera.screen_ray(50.0, 50.0, 100.0, 100.0).unwrap();
        assert_eq!(
            pick(&frame, &ray),
            PickTarget::Satellite(ProjectRef {
                node: alpha,
                index: 0
            })
        );
    }
}
