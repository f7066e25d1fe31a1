//! Scene orchestration: the [`SceneEngine`] and its intent vocabulary.
//!
//! The engine is single-threaded. Every mutation arrives as a
//! [`SceneCommand`] through [`SceneEngine::execute`]; the host drives time by
//! calling [`SceneEngine::frame`] once per animation callback.

/// Scene intents.
pub mod command;
/// One-time asset-load gate.
pub mod loading;
mod options;
mod queries;
/// On-demand draw scheduling.
pub mod scheduler;

use std::sync::Arc;

use glam::Vec3;

use self::command::SceneCommand;
use self::loading::AssetGate;
pub use self::queries::{DetailPanel, StatusReport};
use self::scheduler::{Activity, DrawReason, RenderScheduler};
use crate::audio::{AudioCues, Cue};
use crate::camera::controller::CameraController;
use crate::catalog::fallback::FallbackView;
use crate::catalog::{Catalog, NodeId};
use crate::options::Options;
use crate::scene::picking::{self, PickTarget};
use crate::scene::{particles, ComposeInput, SceneAnimation, SceneComposer, SceneFrame};
use crate::selection::{Selection, SelectionState};
use crate::util::frame_timing::PerformanceMonitor;

/// Viewport assumed until the host sends a resize.
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// Longest frame the float bob advances by, in seconds. Keeps the bob
/// continuous after an idle stretch.
const MAX_FRAME_DT: f64 = 0.1;

/// Session flags flipped by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
struct Toggles {
    dark_mode: bool,
    gyroscope: bool,
    fallback: bool,
}

/// What the host should show for one animation callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome<'a> {
    /// Assets still loading; show the loading indicator.
    Loading {
        /// Progress in `[0, 100]`.
        progress: f32,
    },
    /// The flat list is active; the 3D scene is unmounted.
    Fallback,
    /// Nothing changed; the host may idle.
    Idle,
    /// Draw this frame.
    Draw {
        /// The declared scene.
        frame: &'a SceneFrame,
        /// Why the scheduler drew.
        reason: DrawReason,
    },
}

/// The interactive scene orchestration engine.
///
/// Owns selection, the camera controller, decorative animation, the
/// performance monitor and the draw scheduler. The host feeds it intents
/// through [`execute`](Self::execute) and calls [`frame`](Self::frame) once
/// per animation callback.
///
/// ```ignore
/// let mut engine = SceneEngine::new(Arc::new(Catalog::reference()?), Options::default());
/// engine.execute(SceneCommand::AssetsLoaded);
/// if let FrameOutcome::Draw { frame, .. } = engine.frame(now_ms) {
///     sink.draw(frame);
/// }
/// ```
pub struct SceneEngine {
    catalog: Arc<Catalog>,
    options: Options,
    active_preset: Option<String>,

    selection: SelectionState,
    hovered: Option<NodeId>,
    camera: CameraController,

    composer: SceneComposer,
    animation: SceneAnimation,
    scheduler: RenderScheduler,
    performance: PerformanceMonitor,
    assets: AssetGate,
    audio: AudioCues,
    toggles: Toggles,

    viewport: (u32, u32),
    /// Timestamp of the last drawn frame
    last_frame_ms: Option<f64>,
    last_frame: Option<SceneFrame>,
}

impl SceneEngine {
    /// Create an engine over `catalog`. Starts in overview, loading, with
    /// the palette chosen by `options.theme.start_dark`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, options: Options) -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        let mut camera = CameraController::new(&options.camera, 1.0);
        camera.resize(width, height);
        let composer = SceneComposer::new(particles::generate(&options.particles));
        log::info!(
            "scene engine: {} nodes, {} particles",
            catalog.len(),
            options.particles.count
        );
        Self {
            selection: SelectionState::new(),
            hovered: None,
            camera,
            composer,
            animation: SceneAnimation::new(catalog.len()),
            scheduler: RenderScheduler::new(&options.render),
            performance: PerformanceMonitor::new(&options.performance),
            assets: AssetGate::default(),
            audio: AudioCues::default(),
            toggles: Toggles {
                dark_mode: options.theme.start_dark,
                gyroscope: false,
                fallback: false,
            },
            viewport: DEFAULT_VIEWPORT,
            last_frame_ms: None,
            last_frame: None,
            active_preset: None,
            catalog,
            options,
        }
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Carry out one intent. Never fails; every intent schedules a draw.
    pub fn execute(&mut self, cmd: SceneCommand) {
        log::debug!("execute {cmd:?}");
        if cmd.is_click() {
            let _ = self.audio.play(Cue::Click);
        }
        match cmd {
            SceneCommand::ClickNode { node } => {
                if self.selection.click(&self.catalog, node) {
                    self.on_selection_changed();
                }
            }
            SceneCommand::SelectNode { node } => {
                if self.selection.select(&self.catalog, node) {
                    self.on_selection_changed();
                }
            }
            SceneCommand::ClosePanel => {
                if self.selection.close_panel(&self.catalog) {
                    self.on_selection_changed();
                }
            }
            SceneCommand::SelectProject { project } => {
                let _ = self.selection.select_project(&self.catalog, project);
            }
            SceneCommand::HoverNode { node } => self.set_hovered(node),
            SceneCommand::BeginOrbit => self.camera.set_dragging(true),
            SceneCommand::EndOrbit => self.camera.set_dragging(false),
            SceneCommand::RotateCamera { delta } => self.camera.rotate(delta),
            SceneCommand::Zoom { delta } => {
                let _ = self.camera.zoom(delta);
            }
            SceneCommand::Resize { width, height } => {
                self.viewport = (width, height);
                self.camera.resize(width, height);
            }
            SceneCommand::ToggleDarkMode => {
                self.toggles.dark_mode = !self.toggles.dark_mode;
                log::info!("dark mode {}", on_off(self.toggles.dark_mode));
            }
            SceneCommand::ToggleGyroscope => {
                self.toggles.gyroscope = !self.toggles.gyroscope;
                log::info!("gyroscope {}", on_off(self.toggles.gyroscope));
            }
            SceneCommand::ToggleAudio => {
                let enabled = self.audio.toggle();
                log::info!("audio {}", on_off(enabled));
            }
            SceneCommand::ToggleFallbackView => {
                self.toggles.fallback = !self.toggles.fallback;
                log::info!("fallback view {}", on_off(self.toggles.fallback));
                if !self.toggles.fallback {
                    self.remount();
                }
            }
            SceneCommand::AssetProgress { percent } => {
                self.assets.report_progress(percent);
            }
            SceneCommand::AssetsLoaded => self.assets.mark_loaded(),
        }
        self.scheduler.invalidate();
    }

    /// Click the node called `name`. Unknown names are ignored.
    pub fn click_node_named(&mut self, name: &str) {
        match self.catalog.lookup(name) {
            Some(node) => self.execute(SceneCommand::ClickNode { node }),
            None => log::warn!("click on unknown node '{name}'"),
        }
    }

    /// Select the node called `name` (`None` returns to overview). Unknown
    /// names are ignored.
    pub fn select_node_named(&mut self, name: Option<&str>) {
        let node = match name {
            Some(name) => match self.catalog.lookup(name) {
                Some(id) => Some(id),
                None => {
                    log::warn!("select of unknown node '{name}'");
                    return;
                }
            },
            None => None,
        };
        self.execute(SceneCommand::SelectNode { node });
    }

    fn set_hovered(&mut self, node: Option<NodeId>) {
        let node = node.filter(|&id| {
            let known = self.catalog.node(id).is_some();
            if !known {
                log::warn!("hover on unknown node id {}", id.0);
            }
            known
        });
        if node == self.hovered {
            return;
        }
        if node.is_some() {
            let _ = self.audio.play(Cue::Hover);
        }
        self.hovered = node;
    }

    fn on_selection_changed(&mut self) {
        self.camera.retarget(self.selection.selection(), &self.catalog);
        // A newly focused node starts its satellites at angle zero.
        self.animation.satellite_spin = 0.0;
    }

    /// Mount the 3D view again after the flat list. Selection survives.
    fn remount(&mut self) {
        self.camera.reset();
        self.camera.retarget(self.selection.selection(), &self.catalog);
        self.animation = SceneAnimation::new(self.catalog.len());
        self.performance.reset_window();
        self.hovered = None;
        self.last_frame = None;
        self.last_frame_ms = None;
    }

    // -----------------------------------------------------------------------
    // Per-frame step
    // -----------------------------------------------------------------------

    /// Run one animation callback at host time `now_ms`.
    ///
    /// Order: fallback and loading gates, camera retarget, scheduling
    /// decision, then (only when drawing) performance sample, camera
    /// smoothing, animation step and composition. An idle callback changes
    /// nothing.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome<'_> {
        if self.toggles.fallback {
            return FrameOutcome::Fallback;
        }
        if !self.assets.is_ready() {
            return FrameOutcome::Loading {
                progress: self.assets.progress(),
            };
        }

        self.camera.retarget(self.selection.selection(), &self.catalog);
        let activity = self.activity();
        let Some(reason) = self.scheduler.decide(activity) else {
            return FrameOutcome::Idle;
        };

        self.performance.tick(now_ms);
        let dt = self.advance_clock(now_ms);
        self.camera.update();

        let targets = self.compose_input().scale_targets();
        self.animation =
            self.animation.step(&self.options.animation, &targets, dt);

        let frame = self.composer.compose(&self.compose_input());
        log::trace!(
            "draw ({reason}): {} nodes, {} satellites",
            frame.nodes.len(),
            frame.satellites.len()
        );
        FrameOutcome::Draw {
            frame: self.last_frame.insert(frame),
            reason,
        }
    }

    /// Whether the next [`frame`](Self::frame) call would draw. Hosts use
    /// this to choose between polling and waiting for events.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        !self.toggles.fallback
            && self.assets.is_ready()
            && self.scheduler.wants_frame(self.activity())
    }

    /// Seconds since the last drawn frame, clamped to `[0, MAX_FRAME_DT]`.
    #[allow(clippy::cast_possible_truncation)]
    fn advance_clock(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = self
            .last_frame_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT));
        self.last_frame_ms = Some(now_ms);
        dt as f32
    }

    fn activity(&self) -> Activity {
        let render = &self.options.render;
        let targets = self.compose_input().scale_targets();
        Activity {
            camera_converged: self.camera.is_converged(render.convergence_epsilon),
            scales_settled: self.animation.is_settled(&targets, render.scale_epsilon),
            dragging: self.camera.is_dragging(),
            auto_rotating: self.camera.is_auto_rotating(),
        }
    }

    fn compose_input(&self) -> ComposeInput<'_> {
        ComposeInput {
            catalog: &self.catalog,
            selection: self.selection.selection(),
            hovered: self.hovered,
            animation: &self.animation,
            camera: self.camera.camera,
            orbit: self.camera.orbit_config(),
            dark_mode: self.toggles.dark_mode,
            options: &self.options,
        }
    }

    // -----------------------------------------------------------------------
    // Picking
    // -----------------------------------------------------------------------

    /// What lies under pixel `(x, y)` of a `width` × `height` viewport,
    /// tested against the last drawn frame through the live camera.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pick(&self, x: f32, y: f32, width: u32, height: u32) -> PickTarget {
        let Some(frame) = &self.last_frame else {
            return PickTarget::None;
        };
        self.camera
            .camera
            .screen_ray(x, y, width as f32, height as f32)
            .map_or(PickTarget::None, |ray| picking::pick(frame, &ray))
    }

    /// [`pick`](Self::pick) against the viewport from the last resize.
    #[must_use]
    pub fn pick_in_viewport(&self, x: f32, y: f32) -> PickTarget {
        let (width, height) = self.viewport;
        self.pick(x, y, width, height)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The catalog this engine was built over.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    /// Node under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// The camera controller (live and target framing).
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Live camera eye position.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera.camera.eye
    }

    /// Decorative animation state.
    #[must_use]
    pub fn animation(&self) -> &SceneAnimation {
        &self.animation
    }

    /// The most recently drawn frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&SceneFrame> {
        self.last_frame.as_ref()
    }

    /// The performance monitor.
    #[must_use]
    pub fn performance(&self) -> &PerformanceMonitor {
        &self.performance
    }

    /// Dark palette active.
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.toggles.dark_mode
    }

    /// Gyroscope flag.
    #[must_use]
    pub fn is_gyroscope_enabled(&self) -> bool {
        self.toggles.gyroscope
    }

    /// Audio cues enabled.
    #[must_use]
    pub fn is_audio_enabled(&self) -> bool {
        self.audio.enabled()
    }

    /// Flat list shown instead of the 3D scene.
    #[must_use]
    pub fn is_fallback_view(&self) -> bool {
        self.toggles.fallback
    }

    /// Assets loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.assets.is_ready()
    }

    /// The flat list built straight from the catalog.
    #[must_use]
    pub fn fallback_view(&self) -> FallbackView {
        FallbackView::from_catalog(&self.catalog)
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
