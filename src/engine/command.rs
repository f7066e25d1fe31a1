//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, a UI button or a host callback, is represented as a
//! `SceneCommand`. Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

use crate::catalog::NodeId;
use crate::selection::ProjectRef;

/// A discrete intent the engine can carry out.
///
/// Commands never fail. References to nodes or projects that are not in
/// the catalog are logged and ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Selection ──────────────────────────────────────────────────────
    /// Click on a node: focus it, or return to overview if it is already
    /// focused.
    ClickNode {
        /// The clicked node.
        node: NodeId,
    },
    /// Select a node directly (`None` returns to overview).
    SelectNode {
        /// Node to focus.
        node: Option<NodeId>,
    },
    /// Dismiss the detail panel and return to overview.
    ClosePanel,
    /// Open (`Some`) or close (`None`) the project popup.
    SelectProject {
        /// Project to show.
        project: Option<ProjectRef>,
    },
    /// Pointer entered (`Some`) or left (`None`) a node.
    HoverNode {
        /// Node under the pointer.
        node: Option<NodeId>,
    },

    // ── Camera ─────────────────────────────────────────────────────────
    /// A manual orbit drag started.
    BeginOrbit,
    /// The manual orbit drag ended.
    EndOrbit,
    /// Orbit the live camera by a screen-space drag delta in pixels.
    RotateCamera {
        /// Pointer movement since the last event.
        delta: Vec2,
    },
    /// Zoom the live camera (positive = closer).
    Zoom {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The drawing surface changed size.
    Resize {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },

    // ── Toggles ────────────────────────────────────────────────────────
    /// Switch between the dark and light palettes.
    ToggleDarkMode,
    /// Flip the gyroscope flag.
    ToggleGyroscope,
    /// Enable or disable audio cues.
    ToggleAudio,
    /// Switch between the 3D scene and the flat list.
    ToggleFallbackView,

    // ── Host ───────────────────────────────────────────────────────────
    /// Asset loading progress in percent.
    AssetProgress {
        /// Progress in `[0, 100]`.
        percent: f32,
    },
    /// Asset loading finished.
    AssetsLoaded,
}

impl SceneCommand {
    /// Whether this intent is user interaction that should play a click
    /// cue.
    #[must_use]
    pub fn is_click(&self) -> bool {
        matches!(
            self,
            Self::ClickNode { .. } | Self::SelectNode { .. } | Self::SelectProject { .. }
        )
    }
}
