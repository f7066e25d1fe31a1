use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mode-dependent visual parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Palette {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Key point light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub key_light_intensity: f32,
    /// Fill point light intensity.
    #[schemars(title = "Fill Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub fill_light_intensity: f32,
    /// Fill point light color.
    #[schemars(skip)]
    pub fill_light_color: String,
    /// Particle point size.
    #[schemars(title = "Particle Size", range(min = 0.01, max = 0.2), extend("step" = 0.01))]
    pub particle_size: f32,
    /// Particle color.
    #[schemars(skip)]
    pub particle_color: String,
    /// Particle opacity.
    #[schemars(title = "Particle Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub particle_opacity: f32,
    /// Environment map preset name.
    #[schemars(skip)]
    pub environment: String,
    /// Clear color behind the scene.
    #[schemars(skip)]
    pub background: String,
}

impl Palette {
    /// Night palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            ambient_intensity: 0.3,
            key_light_intensity: 1.0,
            fill_light_intensity: 0.5,
            fill_light_color: "#4a90e2".into(),
            particle_size: 0.05,
            particle_color: "#4a90e2".into(),
            particle_opacity: 0.8,
            environment: "night".into(),
            background: "#000000".into(),
        }
    }

    /// Dawn palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            ambient_intensity: 0.6,
            key_light_intensity: 0.8,
            fill_light_intensity: 0.5,
            fill_light_color: "#ffa500".into(),
            particle_size: 0.03,
            particle_color: "#666666".into(),
            particle_opacity: 0.4,
            environment: "dawn".into(),
            background: "#f3f4f6".into(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Theme", inline)]
#[serde(default)]
/// Dark and light palettes plus the mode the session starts in.
pub struct ThemeOptions {
    /// Start in dark mode.
    #[schemars(title = "Start Dark")]
    pub start_dark: bool,
    /// Palette used in dark mode.
    pub dark: Palette,
    /// Palette used in light mode.
    pub light: Palette,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            start_dark: true,
            dark: Palette::dark(),
            light: Palette::light(),
        }
    }
}

impl ThemeOptions {
    /// Palette for the given mode.
    #[must_use]
    pub fn palette(&self, dark: bool) -> &Palette {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}
