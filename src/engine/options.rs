//! Options methods for `SceneEngine`

use std::path::Path;

use super::SceneEngine;
use crate::camera::controller::CameraController;
use crate::options::Options;
use crate::scene::{particles, SceneComposer};
use crate::util::frame_timing::PerformanceMonitor;

impl SceneEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the preset last loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and apply the changes to every subsystem.
    ///
    /// The live camera pose, selection and toggles survive. The particle
    /// field is regenerated only when its options changed.
    pub fn set_options(&mut self, new: Options) {
        let old = std::mem::replace(&mut self.options, new);
        if old.camera != self.options.camera {
            self.apply_camera();
        }
        if old.particles != self.options.particles {
            self.composer =
                SceneComposer::new(particles::generate(&self.options.particles));
        }
        if old.performance != self.options.performance {
            self.performance = PerformanceMonitor::new(&self.options.performance);
        }
        self.scheduler.configure(&self.options.render);
        self.scheduler.invalidate();
    }

    /// Rebuild the camera controller, keeping the live pose and drag state.
    fn apply_camera(&mut self) {
        let live = self.camera.camera;
        let dragging = self.camera.is_dragging();
        self.camera = CameraController::new(&self.options.camera, live.aspect);
        self.camera.camera.eye = live.eye;
        self.camera.camera.target = live.target;
        self.camera.set_dragging(dragging);
        self.camera.retarget(self.selection.selection(), &self.catalog);
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}
