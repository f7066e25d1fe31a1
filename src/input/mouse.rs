use glam::Vec2;

use crate::scene::PickTarget;

/// Result of a mouse-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag, mismatched down/up targets, or empty space.
    NoAction,
    /// Same target under the cursor at press and release, no drag.
    Click(PickTarget),
}

/// Tracks mouse position, the target under the press and drag detection.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// Last cursor position, `None` until the first move.
    pub(crate) mouse_pos: Option<Vec2>,
    /// What was under the cursor at mouse-down.
    pub(crate) mouse_down_target: PickTarget,
    pub(crate) is_dragging: bool,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record what (if anything) is under the cursor at mouse-down.
    pub(crate) fn handle_mouse_down(&mut self, hovered: PickTarget) {
        self.mouse_down_target = hovered;
        self.is_dragging = false;
    }

    /// Mark that a drag occurred (significant mouse movement while pressed).
    pub(crate) fn mark_dragging(&mut self) {
        self.is_dragging = true;
    }

    /// Update the cursor position and return the delta from the last one.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let delta = self.mouse_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.mouse_pos = Some(pos);
        delta
    }

    /// Process a mouse-up with `hovered` under the cursor.
    pub(crate) fn process_mouse_up(&mut self, hovered: PickTarget) -> ClickResult {
        let down = std::mem::take(&mut self.mouse_down_target);
        let was_dragging = std::mem::replace(&mut self.is_dragging, false);

        if was_dragging || down.is_none() || down != hovered {
            return ClickResult::NoAction;
        }
        ClickResult::Click(hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NodeId;

    #[test]
    fn click_requires_same_target() {
        let mut state = InputState::new();
        state.handle_mouse_down(PickTarget::Node(NodeId(0)));
        assert_eq!(
            state.process_mouse_up(PickTarget::Node(NodeId(0))),
            ClickResult::Click(PickTarget::Node(NodeId(0)))
        );

        state.handle_mouse_down(PickTarget::Node(NodeId(0)));
        assert_eq!(
            state.process_mouse_up(PickTarget::Node(NodeId(1))),
            ClickResult::NoAction
        );
    }

    #[test]
    fn drag_suppresses_click() {
        let mut state = InputState::new();
        state.handle_mouse_down(PickTarget::Node(NodeId(0)));
        state.mark_dragging();
        assert_eq!(
            state.process_mouse_up(PickTarget::Node(NodeId(0))),
            ClickResult::NoAction
        );
        assert!(!state.is_dragging);
    }

    #[test]
    fn first_move_has_zero_delta() {
        let mut state = InputState::new();
        assert_eq!(state.handle_mouse_position(10.0, 10.0), Vec2::ZERO);
        assert_eq!(
            state.handle_mouse_position(13.0, 6.0),
            Vec2::new(3.0, -4.0)
        );
    }
}
