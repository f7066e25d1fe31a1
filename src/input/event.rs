use glam::Vec2;

/// A pointer or wheel event, already stripped of any windowing-library
/// types.
///
/// Hosts translate their native events into these and hand them to
/// [`InputProcessor::handle_event`](super::InputProcessor::handle_event)
/// together with whatever is under the pointer; the processor answers with
/// [`SceneCommand`](crate::SceneCommand)s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer is now at `(x, y)`, in physical pixels from the top-left
    /// corner of the drawing surface.
    CursorMoved {
        /// Pixels from the left edge.
        x: f32,
        /// Pixels from the top edge.
        y: f32,
    },
    /// A pointer button went down or up.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Down (`true`) or up (`false`).
        pressed: bool,
    },
    /// Wheel motion in lines; positive moves the camera closer.
    Scroll {
        /// Lines scrolled.
        delta: f32,
    },
    /// The pointer left the drawing surface.
    CursorLeft,
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Self::CursorMoved { x, y } => Some(Vec2::new(x, y)),
            Self::MouseButton { .. } | Self::Scroll { .. } | Self::CursorLeft => {
                None
            }
        }
    }
}

/// Pointer button. Only [`MouseButton::Left`] drives the scene; the rest
/// are accepted so hosts can forward everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button; click and orbit drag.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// Back, forward or any extra button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as Winit;
        match button {
            Winit::Left => Self::Left,
            Winit::Right => Self::Right,
            Winit::Middle => Self::Middle,
            Winit::Back | Winit::Forward | Winit::Other(_) => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_moves_carry_a_position() {
        let moved = InputEvent::CursorMoved { x: 3.0, y: 4.0 };
        assert_eq!(moved.position(), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(InputEvent::Scroll { delta: 1.0 }.position(), None);
    }
}
