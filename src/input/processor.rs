//! Converts raw platform events into scene intents.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, the current hover target) and the key-binding map. It
//! is the only thing between raw window events and
//! [`SceneEngine::execute`](crate::SceneEngine::execute).

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::command::SceneCommand;
use crate::options::KeybindingOptions;
use crate::scene::PickTarget;

/// Squared pixel distance beyond which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Pointer and keyboard front end of a [`SceneEngine`](crate::SceneEngine).
///
/// The host picks under the cursor, passes the result along with each
/// event, and executes whatever comes back:
///
/// ```
/// # use std::sync::Arc;
/// # use skillscape::{Catalog, InputEvent, InputProcessor, Options, SceneEngine};
/// let catalog = Arc::new(Catalog::reference().unwrap());
/// let mut engine = SceneEngine::new(catalog, Options::default());
/// let mut input = InputProcessor::default();
/// let hovered = engine.pick_in_viewport(640.0, 360.0);
/// let event = InputEvent::CursorMoved { x: 640.0, y: 360.0 };
/// for cmd in input.handle_event(event, hovered) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking and click detection.
    state: InputState,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Last hover target reported to the engine.
    hovered: PickTarget,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::new(),
            mouse_pressed: false,
            hovered: PickTarget::None,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels, if known.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.state.mouse_pos.map(|p| (p.x, p.y))
    }

    /// True between a primary press and its release.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        self.mouse_pressed
    }

    /// Look up a key press and return the corresponding intent, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<SceneCommand> {
        self.key_bindings.lookup(key).map(|a| a.to_command())
    }

    /// Process a raw input event and return the resulting intents.
    ///
    /// `hovered` is what is under the cursor at the event position.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: PickTarget,
    ) -> Vec<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y, hovered)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, hovered)
            }
            InputEvent::Scroll { delta } => vec![SceneCommand::Zoom { delta }],
            InputEvent::CursorLeft => {
                self.state.mouse_pos = None;
                self.update_hover(PickTarget::None).into_iter().collect()
            }
        }
    }

    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
        hovered: PickTarget,
    ) -> Vec<SceneCommand> {
        let delta = self.state.handle_mouse_position(x, y);
        let mut commands = Vec::new();

        if self.mouse_pressed {
            if delta.length_squared() > DRAG_THRESHOLD_SQ {
                self.state.mark_dragging();
            }
            if self.state.is_dragging {
                commands.push(SceneCommand::RotateCamera { delta });
            }
        }

        // Hover does not change mid-drag; the orbit owns the pointer.
        if !self.state.is_dragging {
            commands.extend(self.update_hover(hovered));
        }
        commands
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: PickTarget,
    ) -> Vec<SceneCommand> {
        if button != MouseButton::Left {
            return Vec::new();
        }

        if pressed {
            self.state.handle_mouse_down(hovered);
            self.mouse_pressed = true;
            return vec![SceneCommand::BeginOrbit];
        }

        // A release without a matching press (e.g. focus regained) is ignored.
        if !std::mem::replace(&mut self.mouse_pressed, false) {
            return Vec::new();
        }
        let mut commands = vec![SceneCommand::EndOrbit];
        match self.state.process_mouse_up(hovered) {
            ClickResult::Click(PickTarget::Node(node)) => {
                commands.push(SceneCommand::ClickNode { node });
            }
            ClickResult::Click(PickTarget::Satellite(project)) => {
                commands.push(SceneCommand::SelectProject {
                    project: Some(project),
                });
            }
            ClickResult::Click(PickTarget::None) | ClickResult::NoAction => {}
        }
        commands.extend(self.update_hover(hovered));
        commands
    }

    fn update_hover(&mut self, hovered: PickTarget) -> Option<SceneCommand> {
        if hovered == self.hovered {
            return None;
        }
        let previous = std::mem::replace(&mut self.hovered, hovered);
        // Only node hover is visible; satellite hover changes nothing.
        (previous.node() != hovered.node())
            .then_some(SceneCommand::HoverNode {
                node: hovered.node(),
            })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::catalog::NodeId;
    use crate::selection::ProjectRef;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn click_on_node_issues_click_intent() {
        let mut input = InputProcessor::default();
        let node = PickTarget::Node(NodeId(2));
        let hover = input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }, node);
        assert_eq!(
            hover,
            vec![SceneCommand::HoverNode {
                node: Some(NodeId(2))
            }]
        );
        assert_eq!(
            input.handle_event(press(true), node),
            vec![SceneCommand::BeginOrbit]
        );
        assert_eq!(
            input.handle_event(press(false), node),
            vec![
                SceneCommand::EndOrbit,
                SceneCommand::ClickNode { node: NodeId(2) }
            ]
        );
    }

    #[test]
    fn drag_rotates_and_suppresses_click() {
        let mut input = InputProcessor::default();
        let node = PickTarget::Node(NodeId(0));
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, node);
        let _ = input.handle_event(press(true), node);
        let cmds = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 4.0 }, node);
        assert_eq!(
            cmds,
            vec![SceneCommand::RotateCamera {
                delta: Vec2::new(10.0, 4.0)
            }]
        );
        assert!(input.is_orbiting());
        assert_eq!(
            input.handle_event(press(false), node),
            vec![SceneCommand::EndOrbit]
        );
        assert!(!input.is_orbiting());
    }

    #[test]
    fn satellite_click_selects_project() {
        let mut input = InputProcessor::default();
        let sat = PickTarget::Satellite(ProjectRef {
            node: NodeId(1),
            index: 1,
        });
        let _ = input.handle_event(press(true), sat);
        let cmds = input.handle_event(press(false), sat);
        assert_eq!(
            cmds[1],
            SceneCommand::SelectProject {
                project: Some(ProjectRef {
                    node: NodeId(1),
                    index: 1
                })
            }
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.5 }, PickTarget::None),
            vec![SceneCommand::Zoom { delta: 1.5 }]
        );
    }

    #[test]
    fn hover_changes_only_emit_once() {
        let mut input = InputProcessor::default();
        let node = PickTarget::Node(NodeId(0));
        let first = input.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 }, node);
        let second = input.handle_event(InputEvent::CursorMoved { x: 1.5, y: 1.0 }, node);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        let left = input.handle_event(InputEvent::CursorLeft, PickTarget::None);
        assert_eq!(left, vec![SceneCommand::HoverNode { node: None }]);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut input = InputProcessor::default();
        let cmds = input.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            },
            PickTarget::None,
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn keys_map_to_intents() {
        let input = InputProcessor::default();
        assert_eq!(
            input.handle_key_press("Escape"),
            Some(SceneCommand::ClosePanel)
        );
        assert_eq!(
            input.handle_key_press("KeyL"),
            Some(SceneCommand::ToggleFallbackView)
        );
        assert_eq!(input.handle_key_press("KeyQ"), None);
    }
}
