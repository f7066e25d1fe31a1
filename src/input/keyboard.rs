use serde::{Deserialize, Serialize};

use crate::engine::command::SceneCommand;

/// Parameterless scene intents that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// close_panel = "Escape"
/// toggle_dark_mode = "KeyD"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Dismiss the detail panel and return to overview.
    ClosePanel,
    /// Switch between dark and light palettes.
    ToggleDarkMode,
    /// Flip the gyroscope flag.
    ToggleGyroscope,
    /// Enable or disable audio cues.
    ToggleAudio,
    /// Switch between the 3D scene and the flat list.
    ToggleFallbackView,
}

impl KeyAction {
    /// The intent this action issues.
    #[must_use]
    pub fn to_command(self) -> SceneCommand {
        match self {
            Self::ClosePanel => SceneCommand::ClosePanel,
            Self::ToggleDarkMode => SceneCommand::ToggleDarkMode,
            Self::ToggleGyroscope => SceneCommand::ToggleGyroscope,
            Self::ToggleAudio => SceneCommand::ToggleAudio,
            Self::ToggleFallbackView => SceneCommand::ToggleFallbackView,
        }
    }
}
