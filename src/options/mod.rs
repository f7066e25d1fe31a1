//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera framing, theme palettes, decorative
//! animation rates, particle field, performance thresholds, frame
//! scheduling, keybindings) are consolidated here. Options serialize to/from
//! TOML so a host can ship presets in a directory and let users pick one.

mod animation;
mod camera;
mod keybindings;
mod particles;
mod performance;
mod render;
mod theme;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use particles::ParticleOptions;
pub use performance::PerformanceOptions;
pub use render::{FrameLoop, RenderOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use theme::{Palette, ThemeOptions};

use crate::error::SkillscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera framing, smoothing and orbit parameters.
    pub camera: CameraOptions,
    /// Dark/light palettes.
    pub theme: ThemeOptions,
    /// Decorative per-frame animation rates.
    pub animation: AnimationOptions,
    /// Ambient particle field.
    pub particles: ParticleOptions,
    /// Frame-rate sampling and tier thresholds.
    pub performance: PerformanceOptions,
    /// Frame scheduling.
    pub render: RenderOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::OptionsParse`] on malformed TOML and
    /// [`SkillscapeError::InvalidOptions`] when [`Options::validate`] fails.
    pub fn from_toml_str(text: &str) -> Result<Self, SkillscapeError> {
        let mut opts: Self = toml::from_str(text)
            .map_err(|e| SkillscapeError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::Io`] when the file cannot be read, plus
    /// everything [`Options::from_toml_str`] can return.
    pub fn load(path: &Path) -> Result<Self, SkillscapeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::OptionsParse`] if serialization fails and
    /// [`SkillscapeError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SkillscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::InvalidOptions`] naming the first
    /// inconsistent field.
    pub fn validate(&self) -> Result<(), SkillscapeError> {
        let invalid = |msg: &str| Err(SkillscapeError::InvalidOptions(msg.to_owned()));
        let cam = &self.camera;
        if !(cam.smoothing > 0.0 && cam.smoothing <= 1.0) {
            return invalid("camera.smoothing must be in (0, 1]");
        }
        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return invalid(
                "camera.min_distance must be positive and <= max_distance",
            );
        }
        if !(cam.fovy > 0.0 && cam.fovy < 180.0) {
            return invalid("camera.fovy must be in (0, 180)");
        }
        if !(cam.znear > 0.0 && cam.znear < cam.zfar) {
            return invalid("camera.znear must be positive and < zfar");
        }
        let anim = &self.animation;
        if !(anim.scale_smoothing > 0.0 && anim.scale_smoothing <= 1.0) {
            return invalid("animation.scale_smoothing must be in (0, 1]");
        }
        let perf = &self.performance;
        if perf.window_ms <= 0.0 {
            return invalid("performance.window_ms must be positive");
        }
        if perf.medium_fps > perf.high_fps {
            return invalid("performance.medium_fps must be <= high_fps");
        }
        let render = &self.render;
        if render.convergence_epsilon <= 0.0 || render.scale_epsilon <= 0.0 {
            return invalid("render epsilons must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
smoothing = 0.1
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.smoothing, 0.1);
        assert_eq!(opts.camera.min_distance, 8.0);
        assert_eq!(opts.theme.dark.ambient_intensity, 0.3);
        assert_eq!(opts.render.frame_loop, FrameLoop::Demand);
    }

    #[test]
    fn frame_loop_parses_lowercase() {
        let opts = Options::from_toml_str(
            r#"
[render]
frame_loop = "always"
"#,
        )
        .unwrap();
        assert_eq!(opts.render.frame_loop, FrameLoop::Always);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ClosePanel)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyD"),
            Some(KeyAction::ToggleDarkMode)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_keys_survive_parsing() {
        use crate::input::KeyAction;
        let opts = Options::from_toml_str(
            r#"
[keybindings.bindings]
toggle_audio = "KeyA"
"#,
        )
        .unwrap();
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(KeyAction::ToggleAudio));
        assert_eq!(opts.keybindings.lookup("KeyM"), None);
    }

    #[test]
    fn inverted_zoom_bounds_are_rejected() {
        let err = Options::from_toml_str(
            r"
[camera]
min_distance = 30.0
max_distance = 10.0
",
        )
        .unwrap_err();
        assert!(matches!(err, SkillscapeError::InvalidOptions(_)));
    }

    #[test]
    fn zero_smoothing_is_rejected() {
        let mut opts = Options::default();
        opts.camera.smoothing = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("skillscape-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.theme.start_dark = false;
        opts.save(&dir.join("dawn.toml")).unwrap();

        let loaded = Options::load(&dir.join("dawn.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["dawn".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("theme"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("render"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("smoothing").is_some());
        assert!(camera.get("min_distance").is_some());
        assert!(camera.get("focus_offset").is_none());
        assert!(camera.get("znear").is_none());
    }
}
